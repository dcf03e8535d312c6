mod composite_file_loader;
mod extractor_factory;
mod image_ocr_adapter;
mod pdf_adapter;
mod tesseract_ocr_engine;
mod text_normalizer;

pub use composite_file_loader::CompositeFileLoader;
pub use extractor_factory::ExtractorFactory;
pub use image_ocr_adapter::ImageOcrAdapter;
pub use pdf_adapter::PdfAdapter;
pub use tesseract_ocr_engine::TesseractOcrEngine;
pub use text_normalizer::TextNormalizer;
