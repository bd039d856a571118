#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    Pdf,
    Text,
}

impl SourceFormat {
    /// Classifies an upload by its filename extension. Anything that is not
    /// a `.pdf` is treated as plain text.
    pub fn from_filename(filename: &str) -> Self {
        if filename.to_lowercase().ends_with(".pdf") {
            Self::Pdf
        } else {
            Self::Text
        }
    }
}
