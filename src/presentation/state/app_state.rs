use std::sync::Arc;

use crate::application::ports::{TextExtractor, WorkpaperRenderer};
use crate::application::services::{IngestionService, SuggestionService};
use crate::presentation::config::Settings;

pub struct AppState<E, R>
where
    E: TextExtractor,
    R: WorkpaperRenderer,
{
    pub ingestion_service: Arc<IngestionService<E>>,
    pub suggestion_service: Arc<SuggestionService>,
    pub renderer: Arc<R>,
    pub settings: Settings,
}

impl<E, R> Clone for AppState<E, R>
where
    E: TextExtractor,
    R: WorkpaperRenderer,
{
    fn clone(&self) -> Self {
        Self {
            ingestion_service: Arc::clone(&self.ingestion_service),
            suggestion_service: Arc::clone(&self.suggestion_service),
            renderer: Arc::clone(&self.renderer),
            settings: self.settings.clone(),
        }
    }
}
