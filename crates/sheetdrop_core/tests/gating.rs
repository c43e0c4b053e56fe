use std::path::PathBuf;
use std::sync::Once;

use sheetdrop_core::{update, AppState, Msg, NO_FILE_PLACEHOLDER};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(app_logging::initialize_for_tests);
}

fn pick_file(state: AppState, name: &str) -> AppState {
    let (state, effects) = update(
        state,
        Msg::FilePicked {
            name: name.to_string(),
            path: PathBuf::from(name),
        },
    );
    assert!(effects.is_empty());
    state
}

fn edit_text(state: AppState, text: &str) -> AppState {
    let (state, effects) = update(state, Msg::TextEdited(text.to_string()));
    assert!(effects.is_empty());
    state
}

#[test]
fn submit_disabled_when_both_inputs_empty() {
    init_logging();
    let state = AppState::new();
    assert!(!state.view().submit_enabled);

    let state = edit_text(state, "   \n\n  ");
    assert!(!state.view().submit_enabled);
}

#[test]
fn submit_enabled_with_text_or_file() {
    init_logging();
    let state = edit_text(AppState::new(), "Acme");
    assert!(state.view().submit_enabled);

    let state = pick_file(AppState::new(), "roster.xlsx");
    assert!(state.view().submit_enabled);
}

#[test]
fn text_entry_clears_selected_file() {
    init_logging();
    let state = pick_file(AppState::new(), "roster.xlsx");
    assert_eq!(state.view().file_label, "roster.xlsx");

    let state = edit_text(state, "Acme");
    let view = state.view();
    assert_eq!(view.file_label, NO_FILE_PLACEHOLDER);
    assert!(view.submit_enabled);
}

#[test]
fn picking_a_file_keeps_text_but_shows_file_name() {
    init_logging();
    let state = edit_text(AppState::new(), "Acme\nGlobex");
    let state = pick_file(state, "roster.xlsx");
    let view = state.view();
    assert_eq!(view.file_label, "roster.xlsx");
    assert!(view.submit_enabled);
}

#[test]
fn clearing_the_file_disables_submit_again() {
    init_logging();
    let state = pick_file(AppState::new(), "roster.xlsx");
    let (state, effects) = update(state, Msg::FileCleared);
    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.file_label, NO_FILE_PLACEHOLDER);
    assert!(!view.submit_enabled);
}

#[test]
fn company_count_label_pluralizes() {
    init_logging();
    let state = AppState::new();
    assert_eq!(state.view().company_count_label, None);

    let state = edit_text(state, "A\n\nB\n");
    assert_eq!(
        state.view().company_count_label.as_deref(),
        Some("2 companies entered")
    );

    let state = edit_text(state, "OnlyOne");
    assert_eq!(
        state.view().company_count_label.as_deref(),
        Some("1 company entered")
    );

    let state = edit_text(state, "");
    assert_eq!(
        state.view().company_count_label.as_deref(),
        Some("0 companies entered")
    );
}

#[test]
fn force_update_toggle_is_reflected() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::ForceUpdateToggled(true));
    assert!(effects.is_empty());
    assert!(state.view().force_update);
}

#[test]
fn noop_changes_nothing() {
    init_logging();
    let state = AppState::new();
    let (next, effects) = update(state.clone(), Msg::NoOp);
    assert_eq!(state, next);
    assert!(effects.is_empty());
}
