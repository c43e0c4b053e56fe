//! Sheetdrop core: pure upload-form state machine and view-model helpers.
mod effect;
mod msg;
mod spreadsheet;
mod state;
mod update;
mod view_model;

pub use effect::{Effect, SubmitRequest, SubmitSource};
pub use msg::{Msg, SubmitFailure};
pub use spreadsheet::{has_spreadsheet_extension, is_spreadsheet_mime, XLSX_EXTENSION, XLSX_MIME};
pub use state::{
    AppState, ArtifactLinks, CompanyStatus, DropHint, Phase, ProcessOutcome, SelectedFile,
    Timings, Toast, ToastId, ToastKind,
};
pub use update::update;
pub use view_model::{AppViewModel, NO_FILE_PLACEHOLDER};
