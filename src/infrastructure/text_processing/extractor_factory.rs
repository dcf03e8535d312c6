use std::sync::Arc;

use crate::application::ports::{FileLoader, OcrEngine};
use crate::domain::DocumentFormat;
use crate::presentation::config::ExtractionSettings;

use super::{CompositeFileLoader, ImageOcrAdapter, PdfAdapter, TesseractOcrEngine};

pub struct ExtractorFactory;

impl ExtractorFactory {
    /// PDF text-layer extraction plus tesseract OCR for everything else.
    pub fn create(settings: &ExtractionSettings) -> Arc<dyn FileLoader> {
        tracing::info!(
            command = %settings.tesseract_command,
            language = %settings.tesseract_language,
            "Loading tesseract OCR engine"
        );
        let ocr: Arc<dyn OcrEngine> = Arc::new(TesseractOcrEngine::new(
            settings.tesseract_command.clone(),
            settings.tesseract_language.clone(),
        ));
        Self::with_ocr_engine(ocr)
    }

    pub fn with_ocr_engine(ocr: Arc<dyn OcrEngine>) -> Arc<dyn FileLoader> {
        let pdf_adapter: Arc<dyn FileLoader> = Arc::new(PdfAdapter::new());
        let image_adapter: Arc<dyn FileLoader> = Arc::new(ImageOcrAdapter::new(ocr));

        Arc::new(CompositeFileLoader::new(vec![
            (DocumentFormat::Pdf, pdf_adapter),
            (DocumentFormat::Image, image_adapter),
        ]))
    }
}
