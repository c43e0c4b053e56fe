use std::path::PathBuf;

/// Base URL of the processing service.
pub const SERVER_ENV: &str = "SHEETDROP_SERVER";
/// Directory downloaded artifacts are saved into.
pub const DOWNLOADS_ENV: &str = "SHEETDROP_DOWNLOADS";

const DEFAULT_SERVER: &str = "http://127.0.0.1:5000";
const DEFAULT_DOWNLOADS: &str = "downloads";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_url: String,
    pub downloads_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server_url: read_non_empty_env_var(SERVER_ENV)
                .unwrap_or_else(|| DEFAULT_SERVER.to_string()),
            downloads_dir: read_non_empty_env_var(DOWNLOADS_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DOWNLOADS)),
        }
    }
}

fn read_non_empty_env_var(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => None,
    }
}
