use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub topic: String,
    #[serde(default, alias = "sub_topics")]
    pub subtopics: Vec<String>,
}

impl Topic {
    pub fn new(topic: impl Into<String>, subtopics: Vec<String>) -> Self {
        Self {
            topic: topic.into(),
            subtopics,
        }
    }

    /// A topic with no sub-topics, as produced by the line-based fallback.
    pub fn flat(topic: impl Into<String>) -> Self {
        Self::new(topic, Vec::new())
    }
}
