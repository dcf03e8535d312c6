use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::application::ports::{GenerationBackend, GenerationError};

use super::map_request_error;

pub const DEFAULT_HOSTED_INFERENCE_URL: &str =
    "https://api-inference.huggingface.co/models/google/flan-t5-large";

/// Hosted inference API: `{"inputs": ...}` in, `[{"generated_text": ...}]` out.
pub struct HostedInferenceBackend {
    client: Client,
    url: String,
    api_token: String,
}

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
}

impl HostedInferenceBackend {
    pub fn new(url: &str, api_token: &str, timeout: Duration) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GenerationError::Configuration(format!("http client build: {e}")))?;

        Ok(Self {
            client,
            url: url.to_string(),
            api_token: api_token.to_string(),
        })
    }
}

/// First list element carrying `generated_text` wins; any other shape is empty.
pub fn extract_generated_text(body: &Value) -> Result<String, GenerationError> {
    match body {
        Value::Array(items) => Ok(items
            .iter()
            .find_map(|item| item.get("generated_text").and_then(Value::as_str))
            .unwrap_or_default()
            .to_string()),
        Value::Object(map) => match map.get("error").and_then(Value::as_str) {
            Some(error) => Err(GenerationError::InvalidResponse(error.to_string())),
            None => Ok(String::new()),
        },
        _ => Ok(String::new()),
    }
}

#[async_trait]
impl GenerationBackend for HostedInferenceBackend {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let response = self
            .client
            .post(&self.url)
            .header("Authorization", format!("Bearer {}", self.api_token))
            .json(&InferenceRequest { inputs: prompt })
            .send()
            .await
            .map_err(map_request_error)?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(GenerationError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| GenerationError::InvalidResponse(e.to_string()))?;

        extract_generated_text(&body)
    }

    fn name(&self) -> &'static str {
        "hosted"
    }
}
