mod ingestion_service;
mod similarity;
mod suggestion_service;
mod workpaper_store;

pub use ingestion_service::{IngestionError, IngestionService};
pub use similarity::{find_best_match, token_set_ratio};
pub use suggestion_service::{NO_PRIOR_DATA_MESSAGE, SuggestionOutcome, SuggestionService};
pub use workpaper_store::WorkpaperStore;
