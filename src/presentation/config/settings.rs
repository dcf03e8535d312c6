use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;
use crate::application::services::DEFAULT_MAX_PROMPT_CHARS;
use crate::infrastructure::llm::{DEFAULT_HOSTED_INFERENCE_URL, DEFAULT_LOCAL_BASE_URL};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub oracle: OracleSettings,
    pub extraction: ExtractionSettings,
    pub normalizer: NormalizerSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OracleProvider {
    Hosted,
    Local,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OracleSettings {
    pub provider: OracleProvider,
    /// Hosted inference endpoint.
    pub url: String,
    /// Local model server root.
    pub base_url: String,
    pub model: Option<String>,
    pub api_token: Option<String>,
    pub timeout_seconds: u64,
    pub max_prompt_chars: usize,
}

impl Default for OracleSettings {
    fn default() -> Self {
        Self {
            provider: OracleProvider::Hosted,
            url: DEFAULT_HOSTED_INFERENCE_URL.to_string(),
            base_url: DEFAULT_LOCAL_BASE_URL.to_string(),
            model: None,
            api_token: None,
            timeout_seconds: 60,
            max_prompt_chars: DEFAULT_MAX_PROMPT_CHARS,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExtractionSettings {
    pub max_file_size_mb: usize,
    pub tesseract_command: String,
    pub tesseract_language: String,
}

impl Default for ExtractionSettings {
    fn default() -> Self {
        Self {
            max_file_size_mb: 20,
            tesseract_command: "tesseract".to_string(),
            tesseract_language: "eng".to_string(),
        }
    }
}

impl ExtractionSettings {
    pub fn max_file_size_bytes(&self) -> usize {
        self.max_file_size_mb * 1024 * 1024
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NormalizerSettings {
    pub extra_blacklist_terms: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info,studyflow=debug,tower_http=debug".to_string(),
            json: false,
        }
    }
}

impl Settings {
    /// Layers `appsettings.<env>` (optional) under `APP_*` environment variables,
    /// e.g. `APP_ORACLE__API_TOKEN`. `HF_TOKEN` fills a missing oracle token.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let configuration = Config::builder()
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str()))
                    .required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("normalizer.extra_blacklist_terms")
                    .try_parsing(true),
            )
            .build()?;

        let mut settings: Settings = configuration.try_deserialize()?;

        if settings.oracle.api_token.as_deref().is_none_or(str::is_empty) {
            settings.oracle.api_token = std::env::var("HF_TOKEN").ok().filter(|t| !t.is_empty());
        }

        Ok(settings)
    }
}
