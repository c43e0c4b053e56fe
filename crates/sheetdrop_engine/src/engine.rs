use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use crate::client::{ClientSettings, ProcessClient, ReqwestProcessClient};
use crate::download::ArtifactDownloader;
use crate::{EngineEvent, SubmitRequest};

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub client: ClientSettings,
    pub downloads_dir: PathBuf,
}

enum EngineCommand {
    Submit {
        request: SubmitRequest,
        delay: Duration,
    },
    Download {
        locators: Vec<String>,
    },
}

/// Bridge between the synchronous UI loop and the async request code: one
/// background thread hosting a tokio runtime, commands in, events out.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(config: EngineConfig) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let client = Arc::new(ReqwestProcessClient::new(config.client.clone()));
        let downloader = Arc::new(ArtifactDownloader::new(config.client, config.downloads_dir));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let downloader = downloader.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(client.as_ref(), &downloader, command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn submit(&self, request: SubmitRequest, delay: Duration) {
        let _ = self.cmd_tx.send(EngineCommand::Submit { request, delay });
    }

    pub fn download(&self, locators: Vec<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Download { locators });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    client: &dyn ProcessClient,
    downloader: &ArtifactDownloader,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Submit { request, delay } => {
            // Cosmetic pause so the loading indicator is seen to appear.
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            let result = client.submit(request).await;
            let _ = event_tx.send(EngineEvent::SubmitCompleted(result));
        }
        EngineCommand::Download { locators } => {
            let result = downloader.download_all(&locators).await;
            let _ = event_tx.send(EngineEvent::DownloadCompleted(result));
        }
    }
}
