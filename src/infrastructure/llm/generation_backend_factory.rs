use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::GenerationBackend;
use crate::presentation::config::{OracleProvider, OracleSettings};

use super::{HostedInferenceBackend, LocalGenerationBackend};

pub struct GenerationBackendFactory;

#[derive(Debug, thiserror::Error)]
pub enum GenerationBackendFactoryError {
    #[error("api_token is required for the hosted inference provider")]
    MissingApiToken,
    #[error("model is required for the local generation provider")]
    MissingModel,
    #[error("timeout_seconds must be greater than zero")]
    InvalidTimeout,
    #[error("backend initialization failed: {0}")]
    InitializationFailed(String),
}

impl GenerationBackendFactory {
    pub fn create(
        settings: &OracleSettings,
    ) -> Result<Arc<dyn GenerationBackend>, GenerationBackendFactoryError> {
        if settings.timeout_seconds == 0 {
            return Err(GenerationBackendFactoryError::InvalidTimeout);
        }
        let timeout = Duration::from_secs(settings.timeout_seconds);

        match settings.provider {
            OracleProvider::Hosted => {
                let token = settings
                    .api_token
                    .as_deref()
                    .filter(|t| !t.is_empty())
                    .ok_or(GenerationBackendFactoryError::MissingApiToken)?;
                tracing::info!(url = %settings.url, "Using hosted inference backend");
                let backend = HostedInferenceBackend::new(&settings.url, token, timeout)
                    .map_err(|e| GenerationBackendFactoryError::InitializationFailed(e.to_string()))?;
                Ok(Arc::new(backend))
            }
            OracleProvider::Local => {
                let model = settings
                    .model
                    .as_deref()
                    .filter(|m| !m.is_empty())
                    .ok_or(GenerationBackendFactoryError::MissingModel)?;
                tracing::info!(base_url = %settings.base_url, model, "Using local generation backend");
                let backend = LocalGenerationBackend::new(&settings.base_url, model, timeout)
                    .map_err(|e| GenerationBackendFactoryError::InitializationFailed(e.to_string()))?;
                Ok(Arc::new(backend))
            }
        }
    }
}
