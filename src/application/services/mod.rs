mod oracle_response;
mod topic_extraction_service;
mod topic_prompt_builder;
mod topic_sanitizer;

pub use oracle_response::{parse_oracle_text, query_oracle};
pub use topic_extraction_service::{TopicExtractionError, TopicExtractionService};
pub use topic_prompt_builder::{DEFAULT_MAX_PROMPT_CHARS, TopicPromptBuilder};
pub use topic_sanitizer::TopicSanitizer;
