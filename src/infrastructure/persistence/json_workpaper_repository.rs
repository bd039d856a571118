use std::io;
use std::path::PathBuf;

use async_trait::async_trait;

use crate::application::ports::{RepositoryError, WorkpaperRepository};
use crate::domain::Workpaper;

/// Flat-file archive backend: the whole sequence lives in one JSON array,
/// rewritten wholesale on every save. A missing or unreadable file loads as
/// an empty archive; that fallback is deliberate policy, not an accident.
pub struct JsonWorkpaperRepository {
    path: PathBuf,
}

impl JsonWorkpaperRepository {
    pub fn new(path: PathBuf) -> Result<Self, RepositoryError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(Self { path })
    }
}

#[async_trait]
impl WorkpaperRepository for JsonWorkpaperRepository {
    async fn load(&self) -> Vec<Workpaper> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No archive file yet, starting empty");
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Archive file unreadable, starting empty"
                );
                return Vec::new();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(workpapers) => workpapers,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Archive file malformed, starting empty"
                );
                Vec::new()
            }
        }
    }

    async fn save(&self, workpapers: &[Workpaper]) -> Result<(), RepositoryError> {
        let json = serde_json::to_vec_pretty(workpapers)?;
        tokio::fs::write(&self.path, json).await?;
        tracing::debug!(
            path = %self.path.display(),
            count = workpapers.len(),
            "Archive persisted"
        );
        Ok(())
    }
}
