use super::workpaper::Workpaper;

/// Best-scoring workpaper for a query. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub workpaper: Workpaper,
    pub score: u8,
}
