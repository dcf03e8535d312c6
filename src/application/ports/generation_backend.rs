use async_trait::async_trait;

/// A text-generation oracle. Output is untrusted and best-effort.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;

    fn name(&self) -> &'static str;
}

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("generation request failed: {0}")]
    ApiRequestFailed(String),
    #[error("generation rate limited")]
    RateLimited,
    #[error("invalid generation response: {0}")]
    InvalidResponse(String),
    #[error("generation timed out")]
    Timeout,
    #[error("generation backend misconfigured: {0}")]
    Configuration(String),
}
