//! Artifact panel handlers.
//!
//! All handlers operate on the active artifact instance; messages arriving
//! with no active instance are ignored.

use pagesmith_core::prelude::*;
use pagesmith_core::types::MessageId;

use crate::artifact::{FeedbackAction, ViewMode};
use crate::input_key::InputKey;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

pub fn handle_set_view_mode(state: &mut AppState, mode: ViewMode) -> UpdateResult {
    if let Some(view) = state.active_artifact_mut() {
        view.layout.set_view_mode(mode);
    }
    UpdateResult::none()
}

pub fn handle_toggle_full_screen(state: &mut AppState) -> UpdateResult {
    if let Some(view) = state.active_artifact_mut() {
        view.layout.toggle_full_screen();
    }
    UpdateResult::none()
}

pub fn handle_toggle_collapse(state: &mut AppState) -> UpdateResult {
    if let Some(view) = state.active_artifact_mut() {
        view.layout.toggle_collapse();
    }
    UpdateResult::none()
}

/// Snapshot the live buffer; the save feedback flag covers the brief
/// "Saved" toolbar state.
pub fn handle_save(state: &mut AppState) -> UpdateResult {
    let Some(id) = state.active_artifact else {
        return UpdateResult::none();
    };
    let Some(view) = state.artifact_views.get_mut(&id) else {
        return UpdateResult::none();
    };
    // Nothing is snapshotted while the "Saved" state is still showing.
    if view.save.is_active() {
        return UpdateResult::none();
    }

    let content = view.code.clone();
    view.versions.save(&content);
    debug!(%id, versions = view.versions.len(), "Saved code version");

    begin_feedback(state, id, FeedbackAction::Save)
}

/// Kick off the clipboard write. The copy flag only activates once the
/// write succeeds, via `CodeCopied`.
pub fn handle_copy(state: &mut AppState) -> UpdateResult {
    let Some(id) = state.active_artifact else {
        return UpdateResult::none();
    };
    let Some(view) = state.artifact_views.get(&id) else {
        return UpdateResult::none();
    };
    if view.copy.is_active() {
        return UpdateResult::none();
    }

    UpdateResult::action(UpdateAction::CopyCode {
        message_id: id,
        text: view.code.clone(),
    })
}

pub fn handle_code_copied(state: &mut AppState, message_id: MessageId) -> UpdateResult {
    begin_feedback(state, message_id, FeedbackAction::Copy)
}

pub fn handle_export(state: &mut AppState) -> UpdateResult {
    let Some(id) = state.active_artifact else {
        return UpdateResult::none();
    };
    begin_feedback(state, id, FeedbackAction::Export)
}

pub fn handle_run(state: &mut AppState) -> UpdateResult {
    let Some(id) = state.active_artifact else {
        return UpdateResult::none();
    };
    begin_feedback(state, id, FeedbackAction::Run)
}

pub fn handle_feedback_expired(
    state: &mut AppState,
    message_id: MessageId,
    action: FeedbackAction,
    generation: u64,
) -> UpdateResult {
    let Some(view) = state.artifact_views.get_mut(&message_id) else {
        return UpdateResult::none();
    };
    let expired = view.feedback_mut(action).expire(generation);

    // Run completion lands the panel back on the preview.
    if expired && action == FeedbackAction::Run {
        view.layout.set_view_mode(ViewMode::Preview);
    }
    UpdateResult::none()
}

pub fn handle_toggle_history(state: &mut AppState) -> UpdateResult {
    if let Some(view) = state.active_artifact_mut() {
        view.toggle_history();
    }
    UpdateResult::none()
}

pub fn handle_history_up(state: &mut AppState) -> UpdateResult {
    if let Some(view) = state.active_artifact_mut() {
        if view.show_history && view.history_cursor > 0 {
            view.history_cursor -= 1;
        }
    }
    UpdateResult::none()
}

pub fn handle_history_down(state: &mut AppState) -> UpdateResult {
    if let Some(view) = state.active_artifact_mut() {
        if view.show_history && view.history_cursor + 1 < view.versions.len() {
            view.history_cursor += 1;
        }
    }
    UpdateResult::none()
}

pub fn handle_revert(state: &mut AppState, index: usize) -> UpdateResult {
    if let Some(view) = state.active_artifact_mut() {
        view.revert(index);
    }
    UpdateResult::none()
}

pub fn handle_code_scroll(state: &mut AppState, delta: i32) -> UpdateResult {
    if let Some(view) = state.active_artifact_mut() {
        let lines = view.code.lines().count();
        let next = (view.code_scroll as i64 + i64::from(delta)).max(0) as usize;
        view.code_scroll = next.min(lines.saturating_sub(1));
    }
    UpdateResult::none()
}

pub fn handle_drag_started(state: &mut AppState) -> UpdateResult {
    if let Some(view) = state.active_artifact_mut() {
        view.layout.start_drag();
    }
    UpdateResult::none()
}

pub fn handle_drag_moved(state: &mut AppState, delta_px: i32) -> UpdateResult {
    if let Some(view) = state.active_artifact_mut() {
        view.layout.drag_move(delta_px);
    }
    UpdateResult::none()
}

pub fn handle_drag_ended(state: &mut AppState) -> UpdateResult {
    if let Some(view) = state.active_artifact_mut() {
        view.layout.end_drag();
    }
    UpdateResult::none()
}

pub fn handle_editor_input(state: &mut AppState, key: InputKey) -> UpdateResult {
    if let Some(view) = state.active_artifact_mut() {
        if view.layout.full_screen {
            let mut buffer = std::mem::take(&mut view.code);
            view.editor.apply(key, &mut buffer);
            view.code = buffer;
        }
    }
    UpdateResult::none()
}

/// Activate the flag for `action` on instance `message_id` and schedule
/// its expiry. Refused (no-op) while the flag is already showing.
fn begin_feedback(state: &mut AppState, message_id: MessageId, action: FeedbackAction) -> UpdateResult {
    let Some(view) = state.artifact_views.get_mut(&message_id) else {
        return UpdateResult::none();
    };
    match view.feedback_mut(action).begin() {
        Some(generation) => UpdateResult::action(UpdateAction::ScheduleFeedback {
            message_id,
            action,
            generation,
            delay: action.duration(),
        }),
        None => UpdateResult::none(),
    }
}
