use serde::{Deserialize, Serialize};

/// One archived historical workpaper: the uploaded filename plus the text
/// extracted from it. This is also the persisted record shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workpaper {
    pub filename: String,
    pub content: String,
}

impl Workpaper {
    pub fn new(filename: String, content: String) -> Self {
        Self { filename, content }
    }
}
