use async_trait::async_trait;

use crate::domain::Workpaper;

/// Persistence backend for the workpaper archive. The archive is always
/// written wholesale; there is no per-record update.
#[async_trait]
pub trait WorkpaperRepository: Send + Sync {
    /// Loads the persisted archive. Adapters absorb missing or unreadable
    /// state and return an empty sequence instead of failing.
    async fn load(&self) -> Vec<Workpaper>;

    /// Replaces the persisted archive with the given sequence.
    async fn save(&self, workpapers: &[Workpaper]) -> Result<(), RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
