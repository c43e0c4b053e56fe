use crate::{ArtifactLinks, DropHint, Toast};

/// Label shown when no file is selected.
pub const NO_FILE_PLACEHOLDER: &str = "No file selected";

/// Everything the rendering shell needs, precomputed as display strings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    /// Selected file name, or [`NO_FILE_PLACEHOLDER`].
    pub file_label: String,
    /// Pluralized line-count label; `None` until the textarea is first edited.
    pub company_count_label: Option<String>,
    pub force_update: bool,
    pub submit_enabled: bool,
    /// Loading indicator visibility.
    pub busy: bool,
    pub drop_hint: DropHint,
    /// Revealed result rows, already formatted for display.
    pub rows: Vec<String>,
    pub downloads_visible: bool,
    /// Whether the download confirmation modal should be shown.
    pub download_prompt: bool,
    pub links: Option<ArtifactLinks>,
    pub toasts: Vec<Toast>,
}

pub(crate) fn company_count_label(count: usize) -> String {
    let noun = if count == 1 { "company" } else { "companies" };
    format!("{count} {noun} entered")
}
