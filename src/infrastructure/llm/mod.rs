mod generation_backend_factory;
mod hosted_inference_backend;
mod local_generation_backend;

pub use generation_backend_factory::{GenerationBackendFactory, GenerationBackendFactoryError};
pub use hosted_inference_backend::{
    DEFAULT_HOSTED_INFERENCE_URL, HostedInferenceBackend, extract_generated_text,
};
pub use local_generation_backend::{DEFAULT_LOCAL_BASE_URL, LocalGenerationBackend};

use crate::application::ports::GenerationError;

fn map_request_error(e: reqwest::Error) -> GenerationError {
    if e.is_timeout() {
        GenerationError::Timeout
    } else {
        GenerationError::ApiRequestFailed(e.to_string())
    }
}
