mod file_loader;
mod generation_backend;
mod ocr_engine;

pub use file_loader::{FileLoader, FileLoaderError};
pub use generation_backend::{GenerationBackend, GenerationError};
pub use ocr_engine::{OcrEngine, OcrError};
