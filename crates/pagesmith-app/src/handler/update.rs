//! Main update function - handles state transitions (TEA pattern)

use pagesmith_core::types::GeminiModel;

use crate::message::Message;
use crate::state::AppState;

use super::{artifact, chat, keys::handle_key, UpdateResult};

const MODEL_COUNT: usize = GeminiModel::all().len();

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.should_quit = true;
            UpdateResult::none()
        }

        Message::Tick => {
            if state.is_loading {
                state.loading_frame = state.loading_frame.wrapping_add(1);
            }
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::FocusNext => {
            state.focus = state.focus.next();
            UpdateResult::none()
        }
        Message::FocusPrev => {
            state.focus = state.focus.prev();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Conversation
        // ─────────────────────────────────────────────────────────
        Message::SubmitPrompt => chat::handle_submit(state),
        Message::PromptResponse { text, model } => chat::handle_response(state, text, model),

        // ─────────────────────────────────────────────────────────
        // Input Bar
        // ─────────────────────────────────────────────────────────
        Message::InputChar(c) => {
            state.input.insert(c);
            UpdateResult::none()
        }
        Message::InputBackspace => {
            state.input.backspace();
            UpdateResult::none()
        }
        Message::InputClear => {
            state.input.clear();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Model Picker
        // ─────────────────────────────────────────────────────────
        Message::ToggleModelPicker => {
            state.input.model_open = !state.input.model_open;
            if state.input.model_open {
                state.input.model_cursor = GeminiModel::all()
                    .iter()
                    .position(|&m| m == state.selected_model)
                    .unwrap_or(0);
            }
            UpdateResult::none()
        }
        Message::CloseModelPicker => {
            state.input.model_open = false;
            UpdateResult::none()
        }
        Message::ModelPickerUp => {
            if state.input.model_open && state.input.model_cursor > 0 {
                state.input.model_cursor -= 1;
            }
            UpdateResult::none()
        }
        Message::ModelPickerDown => {
            if state.input.model_open && state.input.model_cursor + 1 < MODEL_COUNT {
                state.input.model_cursor += 1;
            }
            UpdateResult::none()
        }
        Message::ModelPickerConfirm => {
            if state.input.model_open {
                let model = GeminiModel::all()[state.input.model_cursor];
                return UpdateResult::message(Message::SelectModel(model));
            }
            UpdateResult::none()
        }
        Message::SelectModel(model) => {
            state.selected_model = model;
            state.input.model_open = false;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Transcript Scroll
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp => {
            state.transcript.follow = false;
            state.transcript.offset = state.transcript.offset.saturating_add(1);
            UpdateResult::none()
        }
        Message::ScrollDown => {
            state.transcript.offset = state.transcript.offset.saturating_sub(1);
            if state.transcript.offset == 0 {
                state.transcript.follow = true;
            }
            UpdateResult::none()
        }
        Message::PageUp => {
            state.transcript.follow = false;
            state.transcript.offset = state.transcript.offset.saturating_add(10);
            UpdateResult::none()
        }
        Message::PageDown => {
            state.transcript.offset = state.transcript.offset.saturating_sub(10);
            if state.transcript.offset == 0 {
                state.transcript.follow = true;
            }
            UpdateResult::none()
        }
        Message::ScrollToTop => {
            state.transcript.follow = false;
            // Clamped to the real row count by the renderer.
            state.transcript.offset = usize::MAX;
            UpdateResult::none()
        }
        Message::ScrollToBottom => {
            state.transcript.offset = 0;
            state.transcript.follow = true;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Artifact Panel
        // ─────────────────────────────────────────────────────────
        Message::ArtifactSetViewMode(mode) => artifact::handle_set_view_mode(state, mode),
        Message::ArtifactToggleFullScreen => artifact::handle_toggle_full_screen(state),
        Message::ArtifactToggleCollapse => artifact::handle_toggle_collapse(state),
        Message::ArtifactSave => artifact::handle_save(state),
        Message::ArtifactCopy => artifact::handle_copy(state),
        Message::CodeCopied { message_id } => artifact::handle_code_copied(state, message_id),
        Message::ArtifactExport => artifact::handle_export(state),
        Message::ArtifactRun => artifact::handle_run(state),
        Message::FeedbackExpired {
            message_id,
            action,
            generation,
        } => artifact::handle_feedback_expired(state, message_id, action, generation),
        Message::ArtifactToggleHistory => artifact::handle_toggle_history(state),
        Message::ArtifactHistoryUp => artifact::handle_history_up(state),
        Message::ArtifactHistoryDown => artifact::handle_history_down(state),
        Message::ArtifactRevert(index) => artifact::handle_revert(state, index),
        Message::ArtifactPrev => {
            state.cycle_artifact(false);
            UpdateResult::none()
        }
        Message::ArtifactNext => {
            state.cycle_artifact(true);
            UpdateResult::none()
        }
        Message::ArtifactSelect(id) => {
            if state.artifact_views.contains_key(&id) {
                state.active_artifact = Some(id);
            }
            UpdateResult::none()
        }
        Message::ArtifactCodeScrollUp => artifact::handle_code_scroll(state, -1),
        Message::ArtifactCodeScrollDown => artifact::handle_code_scroll(state, 1),

        Message::ArtifactDragStarted => artifact::handle_drag_started(state),
        Message::ArtifactDragMoved { delta_px } => artifact::handle_drag_moved(state, delta_px),
        Message::ArtifactDragEnded => artifact::handle_drag_ended(state),

        Message::EditorInput(key) => artifact::handle_editor_input(state, key),

        Message::CloseOverlays => {
            state.input.model_open = false;
            if let Some(view) = state.active_artifact_mut() {
                view.show_history = false;
            }
            UpdateResult::none()
        }
    }
}
