use std::fmt;

use super::topic::Topic;

/// Which path produced the final topic list. Not exposed over HTTP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicSource {
    Oracle,
    OracleText,
    CleanedTextFallback,
    Nothing,
}

impl TopicSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Oracle => "oracle",
            Self::OracleText => "oracle_text",
            Self::CleanedTextFallback => "cleaned_text_fallback",
            Self::Nothing => "nothing",
        }
    }
}

impl fmt::Display for TopicSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TopicExtraction {
    pub topics: Vec<Topic>,
    pub text: String,
    pub source: TopicSource,
}
