use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use app_logging::{app_info, app_warn};
use eframe::egui;
use sheetdrop_core::{ArtifactLinks, CompanyStatus, Effect, Msg, ProcessOutcome, SubmitFailure};
use sheetdrop_engine::{EngineConfig, EngineEvent, EngineHandle, SubmitError};

/// Executes core effects: requests go to the engine, timers run on detached
/// threads that message the core back when they elapse.
pub struct EffectRunner {
    engine: EngineHandle,
    msg_tx: mpsc::Sender<Msg>,
    ctx: egui::Context,
}

impl EffectRunner {
    pub fn new(config: EngineConfig, msg_tx: mpsc::Sender<Msg>, ctx: egui::Context) -> Self {
        Self {
            engine: EngineHandle::new(config),
            msg_tx,
            ctx,
        }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Submit { request, delay } => {
                    app_info!("dispatching submission (delay {:?})", delay);
                    self.engine.submit(map_request(request), delay);
                }
                Effect::ScheduleReveal { after } => {
                    self.send_after(Msg::RevealTick, after);
                }
                Effect::ExpireToast { toast_id, after } => {
                    self.send_after(Msg::ToastExpired(toast_id), after);
                }
                Effect::DownloadArtifacts { links } => {
                    app_info!("downloading artifacts {} and {}", links.file_url, links.log_url);
                    self.engine.download(vec![links.file_url, links.log_url]);
                }
            }
        }
    }

    /// Drains engine events into core messages. Called once per frame.
    pub fn pump(&self) {
        while let Some(event) = self.engine.try_recv() {
            let msg = match event {
                EngineEvent::SubmitCompleted(result) => Msg::SubmitFinished(map_result(result)),
                EngineEvent::DownloadCompleted(result) => {
                    Msg::DownloadFinished(result.map_err(|err| err.to_string()))
                }
            };
            let _ = self.msg_tx.send(msg);
        }
    }

    fn send_after(&self, msg: Msg, after: Duration) {
        let tx = self.msg_tx.clone();
        let ctx = self.ctx.clone();
        thread::spawn(move || {
            if !after.is_zero() {
                thread::sleep(after);
            }
            if tx.send(msg).is_ok() {
                ctx.request_repaint();
            }
        });
    }
}

fn map_request(request: sheetdrop_core::SubmitRequest) -> sheetdrop_engine::SubmitRequest {
    sheetdrop_engine::SubmitRequest {
        source: match request.source {
            sheetdrop_core::SubmitSource::File { name, path } => {
                sheetdrop_engine::SubmitSource::File { name, path }
            }
            sheetdrop_core::SubmitSource::Companies { raw } => {
                sheetdrop_engine::SubmitSource::Companies { raw }
            }
        },
        force_update: request.force_update,
    }
}

fn map_result(
    result: Result<sheetdrop_engine::ProcessOutcome, SubmitError>,
) -> Result<ProcessOutcome, SubmitFailure> {
    match result {
        Ok(outcome) => Ok(ProcessOutcome {
            links: ArtifactLinks {
                file_url: outcome.file_url,
                log_url: outcome.log_url,
            },
            statuses: outcome
                .statuses
                .into_iter()
                .map(|status| CompanyStatus {
                    company: status.company,
                    status: status.status,
                })
                .collect(),
        }),
        Err(SubmitError::Rejected(message)) => Err(SubmitFailure::Rejected(message)),
        Err(err) => {
            app_warn!("submission failed: {}", err);
            Err(SubmitFailure::Transport)
        }
    }
}
