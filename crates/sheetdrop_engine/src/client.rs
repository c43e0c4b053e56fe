use std::time::Duration;

use app_logging::{app_debug, app_info};
use reqwest::multipart::{Form, Part};

use crate::{ProcessOutcome, ProcessResponse, SubmitError, SubmitRequest, SubmitSource};

/// MIME type attached to the uploaded spreadsheet part.
pub const XLSX_UPLOAD_MIME: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(120),
        }
    }
}

impl ClientSettings {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait::async_trait]
pub trait ProcessClient: Send + Sync {
    async fn submit(&self, request: SubmitRequest) -> Result<ProcessOutcome, SubmitError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestProcessClient {
    settings: ClientSettings,
}

impl ReqwestProcessClient {
    pub fn new(settings: ClientSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, SubmitError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| SubmitError::Request(err.to_string()))
    }

    async fn build_form(&self, request: SubmitRequest) -> Result<Form, SubmitError> {
        let form = match request.source {
            SubmitSource::File { name, path } => {
                let bytes = tokio::fs::read(&path).await.map_err(|err| {
                    SubmitError::FileRead {
                        path: path.display().to_string(),
                        message: err.to_string(),
                    }
                })?;
                app_debug!("uploading {} ({} bytes)", name, bytes.len());
                let part = Part::bytes(bytes)
                    .file_name(name)
                    .mime_str(XLSX_UPLOAD_MIME)
                    .map_err(|err| SubmitError::Request(err.to_string()))?;
                Form::new().part("file", part)
            }
            SubmitSource::Companies { raw } => Form::new().text("company_names", raw),
        };
        // The service reads the checkbox the way browsers post it.
        Ok(if request.force_update {
            form.text("force_update", "on")
        } else {
            form
        })
    }
}

#[async_trait::async_trait]
impl ProcessClient for ReqwestProcessClient {
    async fn submit(&self, request: SubmitRequest) -> Result<ProcessOutcome, SubmitError> {
        let client = self.build_client()?;
        let form = self.build_form(request).await?;
        let endpoint = self.settings.endpoint("process");

        let response = client
            .post(&endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        // Parse JSON regardless of HTTP status; the service reports
        // application errors as a JSON body with an `error` field.
        let status = response.status();
        let body: ProcessResponse = response
            .json()
            .await
            .map_err(|err| SubmitError::InvalidResponse(format!("{status}: {err}")))?;

        if let Some(error) = body.error {
            return Err(SubmitError::Rejected(error));
        }

        app_info!(
            "processing finished: {} statuses, file={} log={}",
            body.statuses.len(),
            body.file_url,
            body.log_url
        );
        Ok(ProcessOutcome {
            file_url: body.file_url,
            log_url: body.log_url,
            statuses: body.statuses,
        })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> SubmitError {
    if err.is_timeout() {
        return SubmitError::Timeout;
    }
    SubmitError::Network(err.to_string())
}
