//! Key event handlers per focused pane

use crate::artifact::ViewMode;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Focus};

/// Convert key events to messages based on the focused pane
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit from anywhere
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    // Full-screen editing captures everything except its exits before
    // the pane dispatch below.
    if state.artifact_editing() {
        return handle_key_editing(key);
    }

    if let Some(msg) = handle_key_global(key) {
        return Some(msg);
    }

    match state.focus {
        Focus::Input => handle_key_input(state, key),
        Focus::Chat => handle_key_chat(key),
        Focus::Artifact => handle_key_artifact(state, key),
    }
}

fn handle_key_global(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Tab => Some(Message::FocusNext),
        InputKey::BackTab => Some(Message::FocusPrev),
        _ => None,
    }
}

/// Key events while the input bar has focus
fn handle_key_input(state: &AppState, key: InputKey) -> Option<Message> {
    // The model dropdown swallows navigation while open
    if state.input.model_open {
        return match key {
            InputKey::Esc => Some(Message::CloseModelPicker),
            InputKey::Up => Some(Message::ModelPickerUp),
            InputKey::Down => Some(Message::ModelPickerDown),
            InputKey::Enter => Some(Message::ModelPickerConfirm),
            InputKey::CharCtrl('p') => Some(Message::CloseModelPicker),
            _ => None,
        };
    }

    match key {
        // Submission is refused while a reply is pending or the buffer
        // is blank
        InputKey::Enter => {
            if !state.is_loading && !state.input.is_blank() {
                Some(Message::SubmitPrompt)
            } else {
                None
            }
        }

        InputKey::CharCtrl('p') => Some(Message::ToggleModelPicker),
        InputKey::CharCtrl('u') => Some(Message::InputClear),
        InputKey::Backspace => Some(Message::InputBackspace),
        InputKey::Char(c) => Some(Message::InputChar(c)),

        InputKey::Esc => Some(Message::Quit),
        _ => None,
    }
}

/// Key events while the transcript has focus
fn handle_key_chat(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::ScrollUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::ScrollDown),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),
        InputKey::Home | InputKey::Char('g') => Some(Message::ScrollToTop),
        InputKey::End | InputKey::Char('G') => Some(Message::ScrollToBottom),
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        _ => None,
    }
}

/// Key events while the artifact panel has focus (not full-screen editing)
fn handle_key_artifact(state: &AppState, key: InputKey) -> Option<Message> {
    // History dropdown swallows navigation while open
    let history_open = state
        .active_artifact_view()
        .is_some_and(|v| v.show_history);
    if history_open {
        return match key {
            InputKey::Esc | InputKey::Char('v') => Some(Message::ArtifactToggleHistory),
            InputKey::Up => Some(Message::ArtifactHistoryUp),
            InputKey::Down => Some(Message::ArtifactHistoryDown),
            InputKey::Enter => {
                let index = state.active_artifact_view()?.history_cursor;
                Some(Message::ArtifactRevert(index))
            }
            _ => None,
        };
    }

    match key {
        InputKey::Char('p') => Some(Message::ArtifactSetViewMode(ViewMode::Preview)),
        InputKey::Char('c') => Some(Message::ArtifactSetViewMode(ViewMode::Code)),
        InputKey::Char('f') => Some(Message::ArtifactToggleFullScreen),
        InputKey::Char('z') => Some(Message::ArtifactToggleCollapse),
        InputKey::Char('s') => Some(Message::ArtifactSave),
        InputKey::Char('y') => Some(Message::ArtifactCopy),
        InputKey::Char('e') => Some(Message::ArtifactExport),
        InputKey::Char('r') => Some(Message::ArtifactRun),
        InputKey::Char('v') => Some(Message::ArtifactToggleHistory),
        InputKey::Char('[') => Some(Message::ArtifactPrev),
        InputKey::Char(']') => Some(Message::ArtifactNext),
        InputKey::Up | InputKey::Char('k') => Some(Message::ArtifactCodeScrollUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::ArtifactCodeScrollDown),
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        _ => None,
    }
}

/// Key events while full-screen editing. Esc leaves full screen,
/// Ctrl+S saves a version; everything else goes to the editor.
fn handle_key_editing(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::ArtifactToggleFullScreen),
        InputKey::CharCtrl('s') => Some(Message::ArtifactSave),
        other => Some(Message::EditorInput(other)),
    }
}
