use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{ExtractorError, TextExtractor};
use crate::domain::SourceFormat;

/// Routes each upload to the adapter registered for its format, classified
/// from the filename extension.
pub struct CompositeTextExtractor {
    adapters: HashMap<SourceFormat, Arc<dyn TextExtractor>>,
}

impl CompositeTextExtractor {
    pub fn new(adapters: Vec<(SourceFormat, Arc<dyn TextExtractor>)>) -> Self {
        Self {
            adapters: adapters.into_iter().collect(),
        }
    }
}

#[async_trait]
impl TextExtractor for CompositeTextExtractor {
    async fn extract_text(&self, data: &[u8], filename: &str) -> Result<String, ExtractorError> {
        let format = SourceFormat::from_filename(filename);
        let adapter = self
            .adapters
            .get(&format)
            .ok_or_else(|| ExtractorError::UnsupportedFormat(format!("{format:?}")))?;

        adapter.extract_text(data, filename).await
    }
}
