//! Tests for handler module

use super::*;
use crate::artifact::ViewMode;
use crate::config::Settings;
use crate::input_key::InputKey;
use crate::state::{AppState, Focus};
use pagesmith_core::types::GeminiModel;

fn state() -> AppState {
    AppState::new(Settings::default())
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        update(state, Message::InputChar(c));
    }
}

// ─────────────────────────────────────────────────────────
// Quit / Focus
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_flag() {
    let mut state = state();
    assert!(!state.should_quit);
    update(&mut state, Message::Quit);
    assert!(state.should_quit);
}

#[test]
fn test_ctrl_c_produces_quit_from_any_focus() {
    let mut state = state();
    for focus in [Focus::Input, Focus::Chat, Focus::Artifact] {
        state.focus = focus;
        let result = handle_key(&state, InputKey::CharCtrl('c'));
        assert!(matches!(result, Some(Message::Quit)));
    }
}

#[test]
fn test_tab_cycles_focus() {
    let mut state = state();
    update(&mut state, Message::FocusNext);
    assert_eq!(state.focus, Focus::Chat);
    update(&mut state, Message::FocusNext);
    assert_eq!(state.focus, Focus::Artifact);
    update(&mut state, Message::FocusPrev);
    assert_eq!(state.focus, Focus::Chat);
}

// ─────────────────────────────────────────────────────────
// Prompt Submission
// ─────────────────────────────────────────────────────────

#[test]
fn test_submit_appends_user_message_and_returns_send_action() {
    let mut state = state();
    type_text(&mut state, "make it dark");

    let result = update(&mut state, Message::SubmitPrompt);

    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[1].content, "make it dark");
    assert!(state.is_loading);
    assert!(state.input.text.is_empty());

    match result.action {
        Some(UpdateAction::SendPrompt { prompt, history, .. }) => {
            assert_eq!(prompt, "make it dark");
            // History excludes the prompt just submitted.
            assert_eq!(history.len(), 1);
        }
        other => panic!("expected SendPrompt, got {other:?}"),
    }
}

#[test]
fn test_submit_blank_input_is_noop() {
    let mut state = state();
    type_text(&mut state, "   ");
    let result = update(&mut state, Message::SubmitPrompt);
    assert_eq!(state.messages.len(), 1);
    assert!(!state.is_loading);
    assert!(result.action.is_none());
}

#[test]
fn test_enter_refused_while_loading() {
    let mut state = state();
    state.is_loading = true;
    type_text(&mut state, "hello");
    assert!(handle_key(&state, InputKey::Enter).is_none());
}

#[test]
fn test_response_appends_model_message_and_clears_loading() {
    let mut state = state();
    state.is_loading = true;

    update(
        &mut state,
        Message::PromptResponse {
            text: "done".to_string(),
            model: GeminiModel::Flash,
        },
    );

    assert!(!state.is_loading);
    let last = state.messages.last().unwrap();
    assert_eq!(last.content, "done");
    assert_eq!(last.model_name.as_deref(), Some("Gemini Flash"));
}

// ─────────────────────────────────────────────────────────
// Model Picker
// ─────────────────────────────────────────────────────────

#[test]
fn test_picker_opens_on_selected_model() {
    let mut state = state();
    update(&mut state, Message::ToggleModelPicker);
    assert!(state.input.model_open);
    assert_eq!(GeminiModel::all()[state.input.model_cursor], state.selected_model);
}

#[test]
fn test_picker_confirm_selects_and_closes() {
    let mut state = state();
    update(&mut state, Message::ToggleModelPicker);
    update(&mut state, Message::ModelPickerDown);

    let result = update(&mut state, Message::ModelPickerConfirm);
    let follow_up = result.message.expect("confirm produces SelectModel");
    update(&mut state, follow_up);

    assert_eq!(state.selected_model, GeminiModel::Flash);
    assert!(!state.input.model_open);
}

#[test]
fn test_picker_cursor_clamped() {
    let mut state = state();
    update(&mut state, Message::ToggleModelPicker);
    for _ in 0..5 {
        update(&mut state, Message::ModelPickerDown);
    }
    assert_eq!(state.input.model_cursor, GeminiModel::all().len() - 1);
    for _ in 0..5 {
        update(&mut state, Message::ModelPickerUp);
    }
    assert_eq!(state.input.model_cursor, 0);
}

// ─────────────────────────────────────────────────────────
// Artifact Panel
// ─────────────────────────────────────────────────────────

#[test]
fn test_save_snapshots_and_schedules_feedback() {
    let mut state = state();
    let result = update(&mut state, Message::ArtifactSave);

    let view = state.active_artifact_view().unwrap();
    assert_eq!(view.versions.len(), 2);
    assert!(view.save.is_active());
    assert!(matches!(
        result.action,
        Some(UpdateAction::ScheduleFeedback { .. })
    ));
}

#[test]
fn test_save_refused_while_feedback_active() {
    let mut state = state();
    update(&mut state, Message::ArtifactSave);
    let result = update(&mut state, Message::ArtifactSave);

    assert!(result.action.is_none());
    assert_eq!(state.active_artifact_view().unwrap().versions.len(), 2);
}

#[test]
fn test_copy_returns_clipboard_action_without_flag() {
    let mut state = state();
    let result = update(&mut state, Message::ArtifactCopy);

    // The flag only activates when the clipboard write reports back.
    assert!(!state.active_artifact_view().unwrap().copy.is_active());
    assert!(matches!(result.action, Some(UpdateAction::CopyCode { .. })));

    let id = state.active_artifact.unwrap();
    update(&mut state, Message::CodeCopied { message_id: id });
    assert!(state.active_artifact_view().unwrap().copy.is_active());
}

#[test]
fn test_run_expiry_forces_preview() {
    let mut state = state();
    let id = state.active_artifact.unwrap();
    update(&mut state, Message::ArtifactSetViewMode(ViewMode::Code));

    let result = update(&mut state, Message::ArtifactRun);
    let generation = match result.action {
        Some(UpdateAction::ScheduleFeedback { generation, .. }) => generation,
        other => panic!("expected ScheduleFeedback, got {other:?}"),
    };

    update(
        &mut state,
        Message::FeedbackExpired {
            message_id: id,
            action: FeedbackAction::Run,
            generation,
        },
    );

    let view = state.active_artifact_view().unwrap();
    assert!(!view.run.is_active());
    assert_eq!(view.layout.view_mode, ViewMode::Preview);
}

#[test]
fn test_stale_feedback_expiry_ignored() {
    let mut state = state();
    let id = state.active_artifact.unwrap();
    update(&mut state, Message::ArtifactExport);

    update(
        &mut state,
        Message::FeedbackExpired {
            message_id: id,
            action: FeedbackAction::Export,
            generation: 99,
        },
    );
    assert!(state.active_artifact_view().unwrap().export.is_active());
}

#[test]
fn test_revert_from_history_dropdown() {
    let mut state = state();
    {
        let view = state.active_artifact_mut().unwrap();
        view.code = "changed".to_string();
    }
    update(&mut state, Message::ArtifactSave);
    update(&mut state, Message::ArtifactToggleHistory);
    update(&mut state, Message::ArtifactHistoryDown);

    let index = state.active_artifact_view().unwrap().history_cursor;
    update(&mut state, Message::ArtifactRevert(index));

    let view = state.active_artifact_view().unwrap();
    assert!(view.code.starts_with("import React"));
    assert!(!view.show_history);
    assert_eq!(view.versions.len(), 2);
}

#[test]
fn test_close_overlays_shuts_picker_and_history() {
    let mut state = state();
    update(&mut state, Message::ToggleModelPicker);
    update(&mut state, Message::ArtifactToggleHistory);

    update(&mut state, Message::CloseOverlays);

    assert!(!state.input.model_open);
    assert!(!state.active_artifact_view().unwrap().show_history);
}

#[test]
fn test_drag_resizes_within_bounds() {
    let mut state = state();
    update(&mut state, Message::ArtifactDragStarted);
    update(&mut state, Message::ArtifactDragMoved { delta_px: 200 });

    assert_eq!(state.active_artifact_view().unwrap().layout.height_px, 700);

    update(&mut state, Message::ArtifactDragMoved { delta_px: 500 });
    assert_eq!(state.active_artifact_view().unwrap().layout.height_px, 800);

    update(&mut state, Message::ArtifactDragEnded);
    assert!(!state.active_artifact_view().unwrap().layout.dragging);
}

// ─────────────────────────────────────────────────────────
// Full-Screen Editing Keys
// ─────────────────────────────────────────────────────────

#[test]
fn test_full_screen_routes_plain_keys_to_editor() {
    let mut state = state();
    state.focus = Focus::Artifact;
    update(&mut state, Message::ArtifactToggleFullScreen);

    let result = handle_key(&state, InputKey::Char('s'));
    assert!(matches!(result, Some(Message::EditorInput(InputKey::Char('s')))));

    let result = handle_key(&state, InputKey::Esc);
    assert!(matches!(result, Some(Message::ArtifactToggleFullScreen)));

    let result = handle_key(&state, InputKey::CharCtrl('s'));
    assert!(matches!(result, Some(Message::ArtifactSave)));
}

#[test]
fn test_artifact_keys_map_to_messages() {
    let mut state = state();
    state.focus = Focus::Artifact;

    assert!(matches!(
        handle_key(&state, InputKey::Char('p')),
        Some(Message::ArtifactSetViewMode(ViewMode::Preview))
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Char('f')),
        Some(Message::ArtifactToggleFullScreen)
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Char('v')),
        Some(Message::ArtifactToggleHistory)
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Char(']')),
        Some(Message::ArtifactNext)
    ));
}

#[test]
fn test_editor_input_mutates_code_buffer() {
    let mut state = state();
    state.focus = Focus::Artifact;
    update(&mut state, Message::ArtifactToggleFullScreen);
    {
        let view = state.active_artifact_mut().unwrap();
        view.code = String::new();
    }

    update(&mut state, Message::EditorInput(InputKey::Char('x')));
    assert_eq!(state.active_artifact_view().unwrap().code, "x");
}
