use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{ExtractorError, TextExtractor};

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Extracts the page-concatenated text of an uploaded PDF. Parsing is
/// CPU-bound and runs off the async runtime; a parse failure, a panic inside
/// the parser, or the timeout all surface as `ExtractionFailed`.
#[derive(Default)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    #[tracing::instrument(skip(self, data), fields(filename = %filename, bytes = data.len()))]
    async fn extract_text(&self, data: &[u8], filename: &str) -> Result<String, ExtractorError> {
        let bytes = data.to_vec();

        let text = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes)),
        )
        .await
        .map_err(|_| ExtractorError::ExtractionFailed("PDF extraction timed out".to_string()))?
        .map_err(|e| ExtractorError::ExtractionFailed(format!("task join error: {e}")))?
        .map_err(|e| ExtractorError::ExtractionFailed(format!("failed to parse PDF: {e}")))?;

        tracing::info!(chars = text.chars().count(), "PDF text extraction complete");

        Ok(text)
    }
}
