use std::sync::Arc;

use crate::application::ports::{FileLoader, FileLoaderError, GenerationBackend};
use crate::domain::{Document, TopicExtraction, TopicSource};
use crate::infrastructure::text_processing::TextNormalizer;

use super::oracle_response::query_oracle;
use super::topic_prompt_builder::TopicPromptBuilder;
use super::topic_sanitizer::TopicSanitizer;

/// Single-shot syllabus pipeline: extract, normalize, prompt, query, sanitize.
pub struct TopicExtractionService {
    file_loader: Arc<dyn FileLoader>,
    backend: Arc<dyn GenerationBackend>,
    normalizer: TextNormalizer,
    prompt_builder: TopicPromptBuilder,
    sanitizer: TopicSanitizer,
}

impl TopicExtractionService {
    pub fn new(
        file_loader: Arc<dyn FileLoader>,
        backend: Arc<dyn GenerationBackend>,
        normalizer: TextNormalizer,
        prompt_builder: TopicPromptBuilder,
        sanitizer: TopicSanitizer,
    ) -> Self {
        Self {
            file_loader,
            backend,
            normalizer,
            prompt_builder,
            sanitizer,
        }
    }

    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    pub async fn extract(
        &self,
        data: &[u8],
        filename: String,
    ) -> Result<TopicExtraction, TopicExtractionError> {
        let document = Document::new(filename, data.len() as u64);

        let raw_text = self
            .file_loader
            .extract_text(data, &document)
            .await
            .map_err(TopicExtractionError::Extraction)?;

        let cleaned = self.normalizer.normalize(&raw_text);
        tracing::info!(
            format = %document.format,
            raw_chars = raw_text.len(),
            cleaned_lines = cleaned.len(),
            "Syllabus text normalized"
        );

        if cleaned.is_empty() {
            return Ok(TopicExtraction {
                topics: Vec::new(),
                text: String::new(),
                source: TopicSource::Nothing,
            });
        }

        let prompt = self.prompt_builder.build(&cleaned);
        let output = query_oracle(self.backend.as_ref(), &prompt).await;
        let (topics, source) = self.sanitizer.sanitize(output, &cleaned);

        tracing::info!(topic_count = topics.len(), source = %source, "Topics extracted");

        Ok(TopicExtraction {
            topics,
            text: cleaned.joined(),
            source,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TopicExtractionError {
    #[error("extraction failed: {0}")]
    Extraction(#[from] FileLoaderError),
}

impl TopicExtractionError {
    pub fn stage(&self) -> &'static str {
        match self {
            Self::Extraction(_) => "extraction",
        }
    }
}
