use std::sync::Arc;

use tokio::sync::RwLock;

use crate::application::ports::{RepositoryError, WorkpaperRepository};
use crate::domain::Workpaper;

/// In-memory system of record for the workpaper archive, mirrored to the
/// injected repository on every append.
pub struct WorkpaperStore {
    repository: Arc<dyn WorkpaperRepository>,
    workpapers: RwLock<Vec<Workpaper>>,
}

impl WorkpaperStore {
    /// Populates the store from the repository once at startup.
    pub async fn load(repository: Arc<dyn WorkpaperRepository>) -> Self {
        let workpapers = repository.load().await;
        tracing::info!(count = workpapers.len(), "Workpaper archive loaded");
        Self {
            repository,
            workpapers: RwLock::new(workpapers),
        }
    }

    /// Appends a workpaper, then rewrites the persisted archive wholesale.
    /// The write lock is held across the persist, so concurrent appends
    /// cannot drop each other's rows. The in-memory row is kept even when
    /// persistence fails.
    pub async fn append(&self, workpaper: Workpaper) -> Result<(), RepositoryError> {
        let mut workpapers = self.workpapers.write().await;
        workpapers.push(workpaper);
        self.repository.save(&workpapers).await
    }

    /// Snapshot of the archive in append order.
    pub async fn all(&self) -> Vec<Workpaper> {
        self.workpapers.read().await.clone()
    }
}
