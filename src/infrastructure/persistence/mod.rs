mod in_memory_workpaper_repository;
mod json_workpaper_repository;

pub use in_memory_workpaper_repository::InMemoryWorkpaperRepository;
pub use json_workpaper_repository::JsonWorkpaperRepository;
