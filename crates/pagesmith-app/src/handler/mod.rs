//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per focused pane
//! - `chat`: Prompt submission and response handling
//! - `artifact`: Artifact panel handlers

pub(crate) mod artifact;
pub(crate) mod chat;
pub(crate) mod keys;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use std::time::Duration;

use pagesmith_core::types::{GeminiModel, MessageId};
use pagesmith_gemini::HistoryTurn;

use crate::artifact::FeedbackAction;
use crate::message::Message;

pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Send a prompt to Gemini in a background task
    SendPrompt {
        prompt: String,
        model: GeminiModel,
        /// Conversation so far, excluding the prompt itself
        history: Vec<HistoryTurn>,
    },

    /// Write code to the system clipboard
    CopyCode { message_id: MessageId, text: String },

    /// Schedule the expiry of a feedback flag
    ScheduleFeedback {
        message_id: MessageId,
        action: FeedbackAction,
        generation: u64,
        delay: Duration,
    },
}

/// Result of processing one message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
