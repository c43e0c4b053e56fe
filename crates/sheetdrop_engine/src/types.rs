use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

use crate::download::DownloadError;

/// What gets posted to the processing endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRequest {
    pub source: SubmitSource,
    pub force_update: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitSource {
    File { name: String, path: PathBuf },
    Companies { raw: String },
}

/// Wire shape of the endpoint's JSON body. Application errors arrive as a
/// populated `error` field, possibly alongside a non-2xx status.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProcessResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub file_url: String,
    #[serde(default)]
    pub log_url: String,
    #[serde(default)]
    pub statuses: Vec<CompanyStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CompanyStatus {
    pub company: String,
    pub status: String,
}

/// A successful submission: artifact locators plus per-company statuses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutcome {
    pub file_url: String,
    pub log_url: String,
    pub statuses: Vec<CompanyStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The endpoint reported an application error.
    #[error("{0}")]
    Rejected(String),
    #[error("could not read {path}: {message}")]
    FileRead { path: String, message: String },
    #[error("request construction failed: {0}")]
    Request(String),
    #[error("request timed out")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    #[error("unreadable response: {0}")]
    InvalidResponse(String),
}

/// Events the engine reports back to the UI loop.
#[derive(Debug)]
pub enum EngineEvent {
    SubmitCompleted(Result<ProcessOutcome, SubmitError>),
    DownloadCompleted(Result<Vec<PathBuf>, DownloadError>),
}
