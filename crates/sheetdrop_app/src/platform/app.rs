use std::sync::mpsc;
use std::time::Duration;

use app_logging::app_info;
use eframe::egui;
use sheetdrop_core::{update, AppState, DropHint, Msg};
use sheetdrop_engine::{ClientSettings, EngineConfig};

use super::config::AppConfig;
use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::ui;

pub fn run_app() -> eframe::Result<()> {
    logging::initialize(LogDestination::Both);
    let config = AppConfig::from_env();
    app_info!(
        "starting sheetdrop against {} (downloads in {:?})",
        config.server_url,
        config.downloads_dir
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([560.0, 760.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Sheetdrop",
        options,
        Box::new(|cc| Ok(Box::new(SheetdropApp::new(cc, config)))),
    )
}

struct SheetdropApp {
    state: AppState,
    /// Widget-owned textarea buffer; the core sees it through `TextEdited`.
    text_buffer: String,
    msg_rx: mpsc::Receiver<Msg>,
    runner: EffectRunner,
}

impl SheetdropApp {
    fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        let engine_config = EngineConfig {
            client: ClientSettings::with_base_url(config.server_url),
            downloads_dir: config.downloads_dir,
        };
        let runner = EffectRunner::new(engine_config, msg_tx, cc.egui_ctx.clone());
        Self {
            state: AppState::new(),
            text_buffer: String::new(),
            msg_rx,
            runner,
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.run(effects);
    }

    fn process_pending_messages(&mut self) {
        let mut inbox = Vec::new();
        while let Ok(msg) = self.msg_rx.try_recv() {
            inbox.push(msg);
        }
        for msg in inbox {
            self.dispatch(msg);
        }
    }

    fn handle_drag_and_drop(&mut self, ctx: &egui::Context) {
        let (hovered, dropped) = ctx.input(|input| {
            (
                input.raw.hovered_files.clone(),
                input.raw.dropped_files.clone(),
            )
        });

        if !dropped.is_empty() {
            for file in dropped {
                let name = file
                    .path
                    .as_deref()
                    .and_then(|path| path.file_name())
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| file.name.clone());
                let path = file.path.clone().unwrap_or_default();
                self.dispatch(Msg::FileDropped { name, path });
            }
        } else if !hovered.is_empty() {
            let spreadsheet = hovered.iter().any(ui::declares_spreadsheet);
            self.dispatch(Msg::DragHover { spreadsheet });
        } else if self.state.view().drop_hint != DropHint::None {
            self.dispatch(Msg::DragLeft);
        }
    }
}

impl eframe::App for SheetdropApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.runner.pump();
        self.process_pending_messages();
        self.handle_drag_and_drop(ctx);

        let view = self.state.view();
        let msgs = ui::render(ctx, &view, &mut self.text_buffer);
        for msg in msgs {
            self.dispatch(msg);
        }

        // Keep frames coming while a submission or a toast is live, so
        // timer-driven messages are drained promptly.
        let view = self.state.view();
        if view.busy || !view.toasts.is_empty() {
            ctx.request_repaint_after(Duration::from_millis(50));
        }
    }
}
