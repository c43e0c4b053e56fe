use eframe::egui::{self, Align2, Color32, RichText, Stroke};
use sheetdrop_core::{
    has_spreadsheet_extension, is_spreadsheet_mime, AppViewModel, DropHint, Msg, ToastKind,
    NO_FILE_PLACEHOLDER,
};

/// Whether a hovered drag item looks like an accepted spreadsheet. Native
/// drag sources rarely declare a MIME type, so the path extension is the
/// fallback signal.
pub fn declares_spreadsheet(file: &egui::HoveredFile) -> bool {
    if is_spreadsheet_mime(&file.mime) {
        return true;
    }
    file.path
        .as_deref()
        .map(|path| has_spreadsheet_extension(&path.to_string_lossy()))
        .unwrap_or(false)
}

/// Draws the whole form from the view model and returns the messages the
/// user's interactions produced this frame.
pub fn render(ctx: &egui::Context, view: &AppViewModel, text_buffer: &mut String) -> Vec<Msg> {
    let mut msgs = Vec::new();

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Company contact enrichment");
        ui.add_space(8.0);

        draw_drop_zone(ui, view, &mut msgs);
        ui.add_space(8.0);

        ui.label("Or paste company names, one per line:");
        let response = ui.add(
            egui::TextEdit::multiline(text_buffer)
                .desired_rows(6)
                .desired_width(f32::INFINITY)
                .hint_text("Acme Corp\nGlobex"),
        );
        if response.changed() {
            msgs.push(Msg::TextEdited(text_buffer.clone()));
        }
        if let Some(label) = &view.company_count_label {
            ui.label(label);
        }

        let mut force_update = view.force_update;
        if ui
            .checkbox(&mut force_update, "Overwrite existing contact cells")
            .changed()
        {
            msgs.push(Msg::ForceUpdateToggled(force_update));
        }

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui
                .add_enabled(view.submit_enabled, egui::Button::new("Submit"))
                .clicked()
            {
                msgs.push(Msg::SubmitPressed);
            }
            if view.busy {
                ui.spinner();
                ui.label("Processing...");
            }
        });

        if !view.rows.is_empty() {
            ui.separator();
            egui::ScrollArea::vertical()
                .max_height(220.0)
                .show(ui, |ui| {
                    for row in &view.rows {
                        ui.label(row);
                    }
                });
        }

        if view.downloads_visible {
            ui.separator();
            ui.label("Files ready to download.");
            if ui.button("Download results and log").clicked() {
                msgs.push(Msg::DownloadConfirmed(true));
            }
        }
    });

    if view.download_prompt {
        egui::Window::new("Download files")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("Do you want to download the files now?");
                ui.horizontal(|ui| {
                    if ui.button("Yes").clicked() {
                        msgs.push(Msg::DownloadConfirmed(true));
                    }
                    if ui.button("No").clicked() {
                        msgs.push(Msg::DownloadConfirmed(false));
                    }
                });
            });
    }

    draw_toasts(ctx, view);
    msgs
}

fn draw_drop_zone(ui: &mut egui::Ui, view: &AppViewModel, msgs: &mut Vec<Msg>) {
    let stroke = match view.drop_hint {
        DropHint::Valid => Stroke::new(2.0, Color32::from_rgb(0x2e, 0xcc, 0x71)),
        DropHint::Invalid => Stroke::new(2.0, Color32::from_rgb(0xe7, 0x4c, 0x3c)),
        DropHint::None => Stroke::new(1.0, Color32::GRAY),
    };

    egui::Frame::group(ui.style())
        .stroke(stroke)
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label("Drag an .xlsx roster here");
                ui.add_space(4.0);
                if ui.button("Choose file").clicked() {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("Excel workbook", &["xlsx"])
                        .pick_file()
                    {
                        let name = path
                            .file_name()
                            .map(|name| name.to_string_lossy().into_owned())
                            .unwrap_or_default();
                        msgs.push(Msg::FilePicked { name, path });
                    }
                }
                ui.horizontal(|ui| {
                    ui.label(&view.file_label);
                    if view.file_label != NO_FILE_PLACEHOLDER && ui.small_button("Clear").clicked()
                    {
                        msgs.push(Msg::FileCleared);
                    }
                });
            });
        });
}

fn draw_toasts(ctx: &egui::Context, view: &AppViewModel) {
    if view.toasts.is_empty() {
        return;
    }
    egui::Area::new(egui::Id::new("toast-stack"))
        .anchor(Align2::RIGHT_BOTTOM, [-12.0, -12.0])
        .show(ctx, |ui| {
            for toast in &view.toasts {
                let fill = match toast.kind {
                    ToastKind::Success => Color32::from_rgb(0x27, 0xae, 0x60),
                    ToastKind::Error => Color32::from_rgb(0xc0, 0x39, 0x2b),
                    ToastKind::Info => Color32::from_rgb(0x34, 0x98, 0xdb),
                };
                egui::Frame::popup(ui.style()).fill(fill).show(ui, |ui| {
                    ui.label(RichText::new(&toast.message).color(Color32::WHITE));
                });
                ui.add_space(6.0);
            }
        });
}
