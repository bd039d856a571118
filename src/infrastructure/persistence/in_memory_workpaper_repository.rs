use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::application::ports::{RepositoryError, WorkpaperRepository};
use crate::domain::Workpaper;

/// Backend that keeps the "persisted" archive in memory. Used by tests to
/// exercise the store without touching the filesystem.
#[derive(Default)]
pub struct InMemoryWorkpaperRepository {
    records: Mutex<Vec<Workpaper>>,
}

impl InMemoryWorkpaperRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(records: Vec<Workpaper>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }

    /// The last saved sequence.
    pub async fn saved(&self) -> Vec<Workpaper> {
        self.records.lock().await.clone()
    }
}

#[async_trait]
impl WorkpaperRepository for InMemoryWorkpaperRepository {
    async fn load(&self) -> Vec<Workpaper> {
        self.records.lock().await.clone()
    }

    async fn save(&self, workpapers: &[Workpaper]) -> Result<(), RepositoryError> {
        *self.records.lock().await = workpapers.to_vec();
        Ok(())
    }
}
