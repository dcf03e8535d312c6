use std::io::Write;
use std::time::Duration;

use async_trait::async_trait;
use pdf_oxide::PdfDocument;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{Document, DocumentFormat};

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    fn extract_pages(path: &std::path::Path) -> Result<Vec<String>, FileLoaderError> {
        let doc = PdfDocument::open(path)
            .map_err(|e| FileLoaderError::Corrupt(format!("failed to parse PDF: {e}")))?;

        let page_count = doc
            .page_count()
            .map_err(|e| FileLoaderError::Corrupt(format!("failed to read page count: {e}")))?;

        let mut pages = Vec::with_capacity(page_count);

        for page_index in 0..page_count {
            // A page without a text layer contributes nothing.
            pages.push(doc.extract_text(page_index).unwrap_or_default());
        }

        Ok(pages)
    }
}

#[async_trait]
impl FileLoader for PdfAdapter {
    #[tracing::instrument(
        skip(self, data),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
        )
    )]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.format != DocumentFormat::Pdf {
            return Err(FileLoaderError::UnsupportedFormat(
                document.format.to_string(),
            ));
        }

        let mut temp_file = tempfile::NamedTempFile::new()
            .map_err(|e| FileLoaderError::Io(format!("failed to create temp file: {e}")))?;

        temp_file
            .write_all(data)
            .map_err(|e| FileLoaderError::Io(format!("failed to write temp file: {e}")))?;

        let temp_path = temp_file.path().to_path_buf();

        let pages = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_pages(&temp_path)),
        )
        .await
        .map_err(|_| FileLoaderError::Io("PDF extraction timed out".to_string()))?
        .map_err(|e| FileLoaderError::Io(format!("task join error: {e}")))??;

        let page_count = pages.len();
        let text = pages.concat();
        tracing::info!(page_count, chars = text.len(), "PDF text extraction complete");

        Ok(text)
    }
}
