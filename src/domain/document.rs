use std::fmt;

use super::document_id::DocumentId;

/// An uploaded syllabus file. Lives only for the duration of one extraction request.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: DocumentId,
    pub filename: String,
    pub format: DocumentFormat,
    pub size_bytes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    Pdf,
    Image,
}

impl DocumentFormat {
    /// The filename suffix is the only discriminator; content is never sniffed.
    pub fn from_filename(filename: &str) -> Self {
        if filename.to_ascii_lowercase().ends_with(".pdf") {
            Self::Pdf
        } else {
            Self::Image
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Image => "image",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Document {
    pub fn new(filename: String, size_bytes: u64) -> Self {
        let format = DocumentFormat::from_filename(&filename);
        Self {
            id: DocumentId::new(),
            filename,
            format,
            size_bytes,
        }
    }
}
