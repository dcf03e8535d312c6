/// Administrative terms that mark a syllabus line as grading, timing or exam metadata.
pub const DEFAULT_BLACKLIST_TERMS: &[&str] = &[
    "marks",
    "score",
    "credit",
    "weightage",
    "hour",
    "exam",
    "internal",
    "external",
    "total",
    "pattern",
    "duration",
    "question paper",
    "allotment",
    "time",
    "minute",
    "mins",
    "hrs",
    "maximum",
    "minimum",
    "sec",
    "section",
];

/// Immutable, case-insensitive substring blacklist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordBlacklist {
    terms: Vec<String>,
}

impl KeywordBlacklist {
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for term in terms {
            let term = term.as_ref().trim().to_lowercase();
            if !term.is_empty() && !normalized.contains(&term) {
                normalized.push(term);
            }
        }
        Self { terms: normalized }
    }

    /// Canonical set extended with caller-supplied terms.
    pub fn with_extra_terms<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extra: Vec<String> = extra.into_iter().map(|t| t.as_ref().to_string()).collect();
        Self::new(
            DEFAULT_BLACKLIST_TERMS
                .iter()
                .map(|t| t.to_string())
                .chain(extra),
        )
    }

    pub fn matches(&self, line: &str) -> bool {
        let lowered = line.to_lowercase();
        self.terms.iter().any(|term| lowered.contains(term.as_str()))
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }
}

impl Default for KeywordBlacklist {
    fn default() -> Self {
        Self::new(DEFAULT_BLACKLIST_TERMS)
    }
}
