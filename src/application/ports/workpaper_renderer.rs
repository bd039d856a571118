use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::WorkpaperDraft;

/// Renders a completed draft to its export target and reports the path
/// written. Each render overwrites the previous export.
#[async_trait]
pub trait WorkpaperRenderer: Send + Sync {
    async fn render(&self, draft: &WorkpaperDraft) -> Result<PathBuf, RenderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("render failed: {0}")]
    RenderFailed(String),
    #[error("write failed: {0}")]
    WriteFailed(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
