use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the company-names textarea.
    TextEdited(String),
    /// User chose a file through the picker (or a drop was accepted).
    FilePicked { name: String, path: PathBuf },
    /// User cleared the file selection.
    FileCleared,
    /// User toggled the overwrite-existing-cells checkbox.
    ForceUpdateToggled(bool),
    /// A drag is hovering the drop zone; `spreadsheet` is whether any dragged
    /// item declares the xlsx MIME type.
    DragHover { spreadsheet: bool },
    /// The drag left the drop zone without dropping.
    DragLeft,
    /// A file was dropped on the drop zone. Extension is validated here.
    FileDropped { name: String, path: PathBuf },
    /// User pressed Submit.
    SubmitPressed,
    /// Engine finished the processing request.
    SubmitFinished(Result<crate::ProcessOutcome, SubmitFailure>),
    /// Timer for revealing the next result row.
    RevealTick,
    /// User answered the download confirmation prompt.
    DownloadConfirmed(bool),
    /// Engine finished downloading the artifacts.
    DownloadFinished(Result<Vec<PathBuf>, String>),
    /// A toast's display time elapsed.
    ToastExpired(crate::ToastId),
    /// Fallback for placeholder wiring.
    NoOp,
}

/// Why a submission did not produce an outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitFailure {
    /// The endpoint answered with an application error message.
    Rejected(String),
    /// The request failed in transit or the response was unreadable.
    Transport,
}
