/// A completed draft ready for export: the control under test and the
/// suggested testing procedure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkpaperDraft {
    pub control_name: String,
    pub control_description: String,
    pub suggestion: String,
}
