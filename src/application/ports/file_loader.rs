use async_trait::async_trait;

use crate::domain::Document;

#[async_trait]
pub trait FileLoader: Send + Sync {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FileLoaderError {
    #[error("corrupt document: {0}")]
    Corrupt(String),
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("extraction i/o failed: {0}")]
    Io(String),
}
