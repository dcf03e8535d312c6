mod cleaned_text;
mod document;
mod document_id;
mod keyword_blacklist;
mod oracle_output;
mod topic;
mod topic_extraction;

pub use cleaned_text::CleanedText;
pub use document::{Document, DocumentFormat};
pub use document_id::DocumentId;
pub use keyword_blacklist::{DEFAULT_BLACKLIST_TERMS, KeywordBlacklist};
pub use oracle_output::OracleOutput;
pub use topic::Topic;
pub use topic_extraction::{TopicExtraction, TopicSource};
