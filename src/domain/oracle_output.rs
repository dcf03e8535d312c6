use super::topic::Topic;

/// What could be recovered from a single oracle call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OracleOutput {
    /// A JSON array of topic objects was found in the generated text.
    Structured(Vec<Topic>),
    /// Text came back but held no decodable topic array.
    Unstructured(String),
    /// The oracle failed or returned nothing usable.
    Empty,
}

impl OracleOutput {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Structured(_) => "structured",
            Self::Unstructured(_) => "unstructured",
            Self::Empty => "empty",
        }
    }
}
