mod text_extractor;
mod workpaper_renderer;
mod workpaper_repository;

pub use text_extractor::{ExtractorError, TextExtractor};
pub use workpaper_renderer::{RenderError, WorkpaperRenderer};
pub use workpaper_repository::{RepositoryError, WorkpaperRepository};
