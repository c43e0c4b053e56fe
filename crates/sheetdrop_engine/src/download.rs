use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use app_logging::app_info;
use tempfile::NamedTempFile;
use thiserror::Error;
use url::Url;

use crate::client::ClientSettings;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DownloadError {
    #[error("downloads directory missing or not writable: {0}")]
    OutputDir(String),
    #[error("download failed for {url}: {message}")]
    Http { url: String, message: String },
    #[error("could not save {filename}: {message}")]
    Io { filename: String, message: String },
}

/// Ensure the downloads directory exists; create if missing.
pub fn ensure_download_dir(dir: &Path) -> Result<(), DownloadError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| DownloadError::OutputDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(DownloadError::OutputDir("path is not a directory".into()));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| DownloadError::OutputDir(e.to_string()))?;
    }
    // Basic writability probe: try creating a temp file.
    NamedTempFile::new_in(dir).map_err(|e| DownloadError::OutputDir(e.to_string()))?;
    Ok(())
}

/// File name for a downloaded artifact: the locator's final path segment,
/// or `fallback` when the locator has none.
pub fn artifact_filename(locator: &str, fallback: &str) -> String {
    let path = match Url::parse(locator) {
        Ok(url) => url.path().to_string(),
        // Relative locators like `/download/out.xlsx` fail to parse; use the
        // raw string minus any query.
        Err(_) => locator.split('?').next().unwrap_or(locator).to_string(),
    };
    path.rsplit('/')
        .find(|segment| !segment.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

/// Atomically write artifact bytes by writing a temp file then renaming.
pub struct AtomicArtifactWriter {
    dir: PathBuf,
}

impl AtomicArtifactWriter {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn write(&self, filename: &str, bytes: &[u8]) -> Result<PathBuf, DownloadError> {
        ensure_download_dir(&self.dir)?;

        let io_error = |e: std::io::Error| DownloadError::Io {
            filename: filename.to_string(),
            message: e.to_string(),
        };

        let target = self.dir.join(filename);
        let mut tmp = NamedTempFile::new_in(&self.dir).map_err(io_error)?;
        tmp.write_all(bytes).map_err(io_error)?;
        tmp.flush().map_err(io_error)?;
        tmp.as_file_mut().sync_all().map_err(io_error)?;

        // Replace any previous download of the same artifact.
        if target.exists() {
            fs::remove_file(&target).map_err(io_error)?;
        }
        tmp.persist(&target).map_err(|e| io_error(e.error))?;
        Ok(target)
    }
}

/// Fetches the artifacts named by the endpoint's resource locators and saves
/// them under the downloads directory.
pub struct ArtifactDownloader {
    settings: ClientSettings,
    writer: AtomicArtifactWriter,
}

impl ArtifactDownloader {
    pub fn new(settings: ClientSettings, downloads_dir: PathBuf) -> Self {
        Self {
            settings,
            writer: AtomicArtifactWriter::new(downloads_dir),
        }
    }

    /// Downloads every locator in order, failing fast on the first error.
    pub async fn download_all(&self, locators: &[String]) -> Result<Vec<PathBuf>, DownloadError> {
        let client = reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|e| DownloadError::Http {
                url: self.settings.base_url.clone(),
                message: e.to_string(),
            })?;

        let mut saved = Vec::with_capacity(locators.len());
        for (index, locator) in locators.iter().enumerate() {
            let url = self.resolve(locator)?;
            let http_error = |message: String| DownloadError::Http {
                url: locator.clone(),
                message,
            };

            let response = client
                .get(url.clone())
                .send()
                .await
                .and_then(|response| response.error_for_status())
                .map_err(|e| http_error(e.to_string()))?;
            let bytes = response.bytes().await.map_err(|e| http_error(e.to_string()))?;

            let fallback = format!("artifact-{index}");
            let filename = artifact_filename(locator, &fallback);
            let path = self.writer.write(&filename, &bytes)?;
            app_info!("saved {} ({} bytes) to {:?}", locator, bytes.len(), path);
            saved.push(path);
        }
        Ok(saved)
    }

    /// Resolves a possibly relative locator against the service base URL.
    fn resolve(&self, locator: &str) -> Result<Url, DownloadError> {
        let invalid = |message: String| DownloadError::Http {
            url: locator.to_string(),
            message,
        };
        match Url::parse(locator) {
            Ok(url) => Ok(url),
            Err(_) => {
                let base =
                    Url::parse(&self.settings.base_url).map_err(|e| invalid(e.to_string()))?;
                base.join(locator).map_err(|e| invalid(e.to_string()))
            }
        }
    }
}
