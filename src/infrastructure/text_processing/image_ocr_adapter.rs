use std::io::Cursor;
use std::sync::Arc;

use async_trait::async_trait;
use image::ImageFormat;

use crate::application::ports::{FileLoader, FileLoaderError, OcrEngine};
use crate::domain::{Document, DocumentFormat};

/// Decodes a raster upload and hands it to an OCR engine.
pub struct ImageOcrAdapter {
    ocr: Arc<dyn OcrEngine>,
}

impl ImageOcrAdapter {
    pub fn new(ocr: Arc<dyn OcrEngine>) -> Self {
        Self { ocr }
    }

    fn decode_to_png(data: &[u8]) -> Result<Vec<u8>, FileLoaderError> {
        let image = image::load_from_memory(data).map_err(|e| {
            FileLoaderError::UnsupportedFormat(format!("failed to decode image: {e}"))
        })?;

        let mut png_bytes: Vec<u8> = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut png_bytes), ImageFormat::Png)
            .map_err(|e| FileLoaderError::Io(format!("PNG encode failed: {e}")))?;

        Ok(png_bytes)
    }
}

#[async_trait]
impl FileLoader for ImageOcrAdapter {
    #[tracing::instrument(
        skip(self, data),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
        )
    )]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.format != DocumentFormat::Image {
            return Err(FileLoaderError::UnsupportedFormat(
                document.format.to_string(),
            ));
        }

        let data_owned = data.to_vec();
        let png_bytes = tokio::task::spawn_blocking(move || Self::decode_to_png(&data_owned))
            .await
            .map_err(|e| FileLoaderError::Io(format!("task join error: {e}")))??;

        let text = self
            .ocr
            .recognize(&png_bytes)
            .await
            .map_err(|e| FileLoaderError::Io(e.to_string()))?;

        tracing::info!(chars = text.len(), "Image OCR complete");

        Ok(text)
    }
}
