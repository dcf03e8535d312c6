use std::io::Write;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{OcrEngine, OcrError};

const OCR_TIMEOUT: Duration = Duration::from_secs(120);

/// Runs the `tesseract` CLI against a temporary PNG and reads text from stdout.
pub struct TesseractOcrEngine {
    command: String,
    language: String,
}

impl TesseractOcrEngine {
    pub fn new(command: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            language: language.into(),
        }
    }
}

impl Default for TesseractOcrEngine {
    fn default() -> Self {
        Self::new("tesseract", "eng")
    }
}

#[async_trait]
impl OcrEngine for TesseractOcrEngine {
    async fn recognize(&self, png_bytes: &[u8]) -> Result<String, OcrError> {
        let mut temp_file = tempfile::Builder::new()
            .suffix(".png")
            .tempfile()
            .map_err(|e| OcrError::RecognitionFailed(format!("failed to create temp file: {e}")))?;

        temp_file
            .write_all(png_bytes)
            .map_err(|e| OcrError::RecognitionFailed(format!("failed to write temp file: {e}")))?;

        let output = tokio::time::timeout(
            OCR_TIMEOUT,
            Command::new(&self.command)
                .arg(temp_file.path())
                .arg("stdout")
                .arg("-l")
                .arg(&self.language)
                .kill_on_drop(true)
                .output(),
        )
        .await
        .map_err(|_| OcrError::RecognitionFailed("tesseract timed out".to_string()))?
        .map_err(|e| OcrError::EngineUnavailable(format!("{} failed to start: {e}", self.command)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(OcrError::RecognitionFailed(format!(
                "tesseract exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
