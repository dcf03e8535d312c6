/// Ordered, noise-filtered syllabus lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanedText(Vec<String>);

impl CleanedText {
    pub fn new(lines: Vec<String>) -> Self {
        Self(lines)
    }

    pub fn lines(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn joined(&self) -> String {
        self.0.join("\n")
    }
}

impl From<Vec<String>> for CleanedText {
    fn from(lines: Vec<String>) -> Self {
        Self(lines)
    }
}
