pub mod layout;
mod pdf_workpaper_renderer;

pub use pdf_workpaper_renderer::PdfWorkpaperRenderer;
