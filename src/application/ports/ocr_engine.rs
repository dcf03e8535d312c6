use async_trait::async_trait;

/// Turns a PNG-encoded raster into text.
#[async_trait]
pub trait OcrEngine: Send + Sync {
    async fn recognize(&self, png_bytes: &[u8]) -> Result<String, OcrError>;
}

#[derive(Debug, thiserror::Error)]
pub enum OcrError {
    #[error("ocr engine unavailable: {0}")]
    EngineUnavailable(String),
    #[error("ocr failed: {0}")]
    RecognitionFailed(String),
}
