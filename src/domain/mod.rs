mod match_result;
mod source_format;
mod workpaper;
mod workpaper_draft;

pub use match_result::MatchResult;
pub use source_format::SourceFormat;
pub use workpaper::Workpaper;
pub use workpaper_draft::WorkpaperDraft;
