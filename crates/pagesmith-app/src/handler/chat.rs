//! Prompt submission and response handling

use pagesmith_core::prelude::*;
use pagesmith_core::types::{ChatMessage, GeminiModel};

use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Submit the input buffer as a prompt.
///
/// The request history is captured before the user turn is appended, so
/// the in-flight prompt travels only in the request's final turn.
pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    let prompt = state.input.take();
    if prompt.is_empty() {
        return UpdateResult::none();
    }

    let history = state.request_history();
    let model = state.selected_model;

    let id = state.next_message_id();
    state.push_message(ChatMessage::user(id, prompt.clone()));
    state.is_loading = true;
    state.loading_frame = 0;

    info!(model = model.api_name(), "Submitting prompt");
    UpdateResult::action(UpdateAction::SendPrompt {
        prompt,
        model,
        history,
    })
}

/// A reply arrived from the background Gemini task.
pub fn handle_response(state: &mut AppState, text: String, model: GeminiModel) -> UpdateResult {
    state.is_loading = false;
    let id = state.next_message_id();
    state.push_message(ChatMessage::model(id, text, model.display_name()));
    UpdateResult::none()
}
