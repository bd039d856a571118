use std::sync::Arc;

use crate::application::ports::{ExtractorError, RepositoryError, TextExtractor};
use crate::domain::Workpaper;

use super::workpaper_store::WorkpaperStore;

pub struct IngestionService<E>
where
    E: TextExtractor,
{
    text_extractor: Arc<E>,
    store: Arc<WorkpaperStore>,
}

impl<E> IngestionService<E>
where
    E: TextExtractor,
{
    pub fn new(text_extractor: Arc<E>, store: Arc<WorkpaperStore>) -> Self {
        Self {
            text_extractor,
            store,
        }
    }

    /// Extracts text from an uploaded file and appends it to the archive.
    /// Empty extracted content is archived as-is.
    pub async fn ingest(&self, filename: &str, data: &[u8]) -> Result<(), IngestionError> {
        let content = self
            .text_extractor
            .extract_text(data, filename)
            .await
            .map_err(IngestionError::Extraction)?;

        tracing::debug!(
            filename = %filename,
            chars = content.chars().count(),
            "Workpaper text extracted"
        );

        self.store
            .append(Workpaper::new(filename.to_string(), content))
            .await
            .map_err(IngestionError::Persistence)?;

        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum IngestionError {
    #[error("extraction: {0}")]
    Extraction(#[from] ExtractorError),
    #[error("persistence: {0}")]
    Persistence(#[from] RepositoryError),
}
