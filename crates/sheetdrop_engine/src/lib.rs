//! Sheetdrop engine: submission and download execution for the upload form.
mod client;
mod download;
mod engine;
mod types;

pub use client::{ClientSettings, ProcessClient, ReqwestProcessClient, XLSX_UPLOAD_MIME};
pub use download::{
    artifact_filename, ensure_download_dir, ArtifactDownloader, AtomicArtifactWriter,
    DownloadError,
};
pub use engine::{EngineConfig, EngineHandle};
pub use types::{
    CompanyStatus, EngineEvent, ProcessOutcome, ProcessResponse, SubmitError, SubmitRequest,
    SubmitSource,
};
