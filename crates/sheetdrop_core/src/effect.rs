use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Dispatch the processing request after the cosmetic pre-submit pause.
    Submit {
        request: SubmitRequest,
        delay: Duration,
    },
    /// Wake the core with `Msg::RevealTick` after the stagger delay.
    ScheduleReveal { after: Duration },
    /// Fetch both artifacts and save them to the downloads directory.
    DownloadArtifacts { links: crate::ArtifactLinks },
    /// Wake the core with `Msg::ToastExpired` once the toast has been shown.
    ExpireToast {
        toast_id: crate::ToastId,
        after: Duration,
    },
}

/// What gets posted to the processing endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRequest {
    pub source: SubmitSource,
    pub force_update: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitSource {
    /// Upload the selected spreadsheet.
    File { name: String, path: PathBuf },
    /// Send the raw textarea content; the service splits it into lines.
    Companies { raw: String },
}
