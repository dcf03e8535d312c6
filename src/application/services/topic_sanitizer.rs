use crate::domain::{CleanedText, KeywordBlacklist, OracleOutput, Topic, TopicSource};

const MIN_ORACLE_LINE_CHARS: usize = 6;
const MIN_FALLBACK_LINE_CHARS: usize = 11;

/// Turns oracle output into the final topic list, falling back to the cleaned
/// syllabus lines whenever the oracle gives nothing usable.
#[derive(Debug, Clone, Default)]
pub struct TopicSanitizer {
    blacklist: KeywordBlacklist,
}

impl TopicSanitizer {
    pub fn new(blacklist: KeywordBlacklist) -> Self {
        Self { blacklist }
    }

    pub fn sanitize(&self, output: OracleOutput, cleaned: &CleanedText) -> (Vec<Topic>, TopicSource) {
        match output {
            OracleOutput::Structured(items) => {
                let topics = self.sanitize_structured(items);
                if !topics.is_empty() {
                    return (topics, TopicSource::Oracle);
                }
            }
            OracleOutput::Unstructured(text) => {
                let topics = self.flat_topics(
                    text.lines()
                        .map(str::trim)
                        .filter(|line| line.chars().count() >= MIN_ORACLE_LINE_CHARS),
                );
                if !topics.is_empty() {
                    return (topics, TopicSource::OracleText);
                }
            }
            OracleOutput::Empty => {}
        }

        self.fallback(cleaned)
    }

    fn sanitize_structured(&self, items: Vec<Topic>) -> Vec<Topic> {
        items
            .into_iter()
            .filter_map(|item| {
                let topic = item.topic.trim();
                if !self.is_allowed(topic) {
                    return None;
                }

                let subtopics = item
                    .subtopics
                    .iter()
                    .map(|s| s.trim())
                    .filter(|s| self.is_allowed(s))
                    .map(str::to_string)
                    .collect();

                Some(Topic::new(topic, subtopics))
            })
            .collect()
    }

    fn fallback(&self, cleaned: &CleanedText) -> (Vec<Topic>, TopicSource) {
        let long_lines = self.flat_topics(
            cleaned
                .lines()
                .iter()
                .map(|line| line.trim())
                .filter(|line| line.chars().count() >= MIN_FALLBACK_LINE_CHARS),
        );

        // Short syllabi can have no line long enough; keep every cleaned line then.
        let topics = if long_lines.is_empty() {
            self.flat_topics(cleaned.lines().iter().map(|line| line.trim()))
        } else {
            long_lines
        };

        if topics.is_empty() {
            (topics, TopicSource::Nothing)
        } else {
            tracing::info!(count = topics.len(), "Using cleaned syllabus lines as topics");
            (topics, TopicSource::CleanedTextFallback)
        }
    }

    fn flat_topics<'a>(&self, lines: impl Iterator<Item = &'a str>) -> Vec<Topic> {
        lines
            .filter(|line| self.is_allowed(line))
            .map(Topic::flat)
            .collect()
    }

    fn is_allowed(&self, text: &str) -> bool {
        !text.is_empty() && !self.blacklist.matches(text)
    }
}
