use crate::spreadsheet::has_spreadsheet_extension;
use crate::{
    AppState, DropHint, Effect, Msg, Phase, SelectedFile, SubmitFailure, SubmitRequest,
    SubmitSource, ToastKind,
};

const TOAST_SUBMITTING: &str = "Submitting form...";
const TOAST_COMPLETE: &str = "Processing complete! Files ready to download.";
const TOAST_BAD_EXTENSION: &str = "Only .xlsx files are supported.";
const TOAST_GENERIC_FAILURE: &str = "Error during processing.";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::TextEdited(text) => {
            // Text entry and file selection are mutually exclusive; typing
            // drops any previously chosen file.
            state.file = None;
            state.company_count = Some(non_blank_line_count(&text));
            state.text = text;
            Vec::new()
        }
        Msg::FilePicked { name, path } => {
            state.file = Some(SelectedFile { name, path });
            Vec::new()
        }
        Msg::FileCleared => {
            state.file = None;
            Vec::new()
        }
        Msg::ForceUpdateToggled(value) => {
            state.force_update = value;
            Vec::new()
        }
        Msg::DragHover { spreadsheet } => {
            state.drop_hint = if spreadsheet {
                DropHint::Valid
            } else {
                DropHint::Invalid
            };
            Vec::new()
        }
        Msg::DragLeft => {
            state.drop_hint = DropHint::None;
            Vec::new()
        }
        Msg::FileDropped { name, path } => {
            state.drop_hint = DropHint::None;
            if has_spreadsheet_extension(&name) {
                state.file = Some(SelectedFile { name, path });
                Vec::new()
            } else {
                vec![state.push_toast(TOAST_BAD_EXTENSION, ToastKind::Error)]
            }
        }
        Msg::SubmitPressed => {
            // Also closes the original's double-submit hole: nothing happens
            // while a submission is in flight.
            if !state.can_submit() {
                return (state, Vec::new());
            }
            let source = match &state.file {
                Some(file) => SubmitSource::File {
                    name: file.name.clone(),
                    path: file.path.clone(),
                },
                None => SubmitSource::Companies {
                    raw: state.text.clone(),
                },
            };
            let request = SubmitRequest {
                source,
                force_update: state.force_update,
            };
            state.phase = Phase::Submitting;
            state.rows.clear();
            state.revealed = 0;
            state.links = None;
            state.download_prompt = false;
            vec![
                state.push_toast(TOAST_SUBMITTING, ToastKind::Info),
                Effect::Submit {
                    request,
                    delay: state.timings().submit_delay,
                },
            ]
        }
        Msg::SubmitFinished(result) => {
            if state.phase != Phase::Submitting {
                return (state, Vec::new());
            }
            match result {
                Ok(outcome) => {
                    state.links = Some(outcome.links);
                    state.rows = outcome.statuses;
                    state.revealed = 0;
                    if state.rows.is_empty() {
                        complete_submission(&mut state)
                    } else {
                        state.phase = Phase::RevealingResults;
                        vec![Effect::ScheduleReveal {
                            after: state.timings().reveal_delay,
                        }]
                    }
                }
                Err(failure) => {
                    state.phase = Phase::Idle;
                    let message = match failure {
                        SubmitFailure::Rejected(message) => message,
                        SubmitFailure::Transport => TOAST_GENERIC_FAILURE.to_string(),
                    };
                    vec![state.push_toast(message, ToastKind::Error)]
                }
            }
        }
        Msg::RevealTick => {
            if state.phase != Phase::RevealingResults {
                return (state, Vec::new());
            }
            state.revealed += 1;
            if state.revealed < state.rows.len() {
                vec![Effect::ScheduleReveal {
                    after: state.timings().reveal_delay,
                }]
            } else {
                complete_submission(&mut state)
            }
        }
        Msg::DownloadConfirmed(accepted) => {
            state.download_prompt = false;
            match (&state.links, accepted) {
                (Some(links), true) => vec![Effect::DownloadArtifacts {
                    links: links.clone(),
                }],
                _ => Vec::new(),
            }
        }
        Msg::DownloadFinished(result) => {
            let effect = match result {
                Ok(paths) => {
                    let message = format!("Saved {} downloaded file(s).", paths.len());
                    state.push_toast(message, ToastKind::Success)
                }
                Err(message) => state.push_toast(message, ToastKind::Error),
            };
            vec![effect]
        }
        Msg::ToastExpired(id) => {
            state.remove_toast(id);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn complete_submission(state: &mut AppState) -> Vec<Effect> {
    state.phase = Phase::Complete;
    state.download_prompt = state.links.is_some();
    vec![state.push_toast(TOAST_COMPLETE, ToastKind::Success)]
}

fn non_blank_line_count(raw: &str) -> usize {
    raw.lines().filter(|line| !line.trim().is_empty()).count()
}
