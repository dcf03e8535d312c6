use crate::domain::CleanedText;

pub const DEFAULT_MAX_PROMPT_CHARS: usize = 3000;

const INSTRUCTION: &str = "You are extracting study topics from a course syllabus.\n\
\n\
Follow these strict rules:\n\
1. Extract ONLY academic subject topics and their sub-topics.\n\
2. Ignore marks, weightage, credits, hours, exam pattern, duration and any other grading or timing information.\n\
3. Keep every topic and sub-topic to at most 8 words.\n\
4. Output ONLY a JSON array of objects shaped like {\"topic\": \"...\", \"subtopics\": [\"...\"]}. Do not add any other text.\n\
\n\
Syllabus:\n";

/// Builds the extraction instruction sent to the generation oracle.
#[derive(Debug, Clone, Copy)]
pub struct TopicPromptBuilder {
    max_input_chars: usize,
}

impl TopicPromptBuilder {
    pub fn new(max_input_chars: usize) -> Self {
        Self { max_input_chars }
    }

    pub fn max_input_chars(&self) -> usize {
        self.max_input_chars
    }

    /// Input beyond `max_input_chars` characters is dropped silently.
    pub fn build(&self, cleaned: &CleanedText) -> String {
        let joined = cleaned.joined();
        let body = truncate_chars(&joined, self.max_input_chars);

        if body.len() < joined.len() {
            tracing::debug!(
                original_chars = joined.chars().count(),
                kept_chars = self.max_input_chars,
                "Truncated syllabus text for prompt"
            );
        }

        format!("{INSTRUCTION}{body}")
    }
}

impl Default for TopicPromptBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_PROMPT_CHARS)
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
