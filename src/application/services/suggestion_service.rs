use std::sync::Arc;

use crate::application::services::find_best_match;
use crate::application::services::workpaper_store::WorkpaperStore;

/// Response returned when the archive holds nothing to draw from.
pub const NO_PRIOR_DATA_MESSAGE: &str =
    "No prior data available. Please upload historical workpapers first.";

const MAX_SUGGESTION_CHARS: usize = 1500;
const TRUNCATION_MARKER: &str = "...";

pub struct SuggestionService {
    store: Arc<WorkpaperStore>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionOutcome {
    pub suggestion: String,
    pub source_file: Option<String>,
    pub similarity_score: Option<u8>,
}

impl SuggestionService {
    pub fn new(store: Arc<WorkpaperStore>) -> Self {
        Self { store }
    }

    /// Drafts a testing procedure for the given control description from the
    /// single closest archived workpaper. The score is computed on the full
    /// content; only the returned suggestion is truncated for display.
    #[tracing::instrument(skip(self, control_description))]
    pub async fn suggest(&self, control_description: &str) -> SuggestionOutcome {
        let workpapers = self.store.all().await;

        if workpapers.is_empty() {
            tracing::info!("Suggestion requested against an empty archive");
            return SuggestionOutcome {
                suggestion: NO_PRIOR_DATA_MESSAGE.to_string(),
                source_file: None,
                similarity_score: None,
            };
        }

        match find_best_match(control_description, &workpapers) {
            Some(best) => {
                tracing::info!(
                    source_file = %best.workpaper.filename,
                    score = best.score,
                    "Best matching workpaper selected"
                );
                SuggestionOutcome {
                    suggestion: truncate_for_display(&best.workpaper.content),
                    source_file: Some(best.workpaper.filename),
                    similarity_score: Some(best.score),
                }
            }
            None => {
                tracing::info!(candidates = workpapers.len(), "No workpaper scored above zero");
                SuggestionOutcome {
                    suggestion: String::new(),
                    source_file: None,
                    similarity_score: Some(0),
                }
            }
        }
    }
}

fn truncate_for_display(content: &str) -> String {
    if content.chars().count() > MAX_SUGGESTION_CHARS {
        let truncated: String = content.chars().take(MAX_SUGGESTION_CHARS).collect();
        format!("{truncated}{TRUNCATION_MARKER}")
    } else {
        content.to_string()
    }
}
