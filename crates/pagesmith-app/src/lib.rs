//! pagesmith-app - Application state and orchestration for PageSmith
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: a single [`AppState`] model, a [`Message`] enum for every
//! event, a pure-ish [`handler::update`] transition function, and
//! [`actions::handle_action`] which executes side effects ([`UpdateAction`])
//! on background tokio tasks that report back via the message channel.

pub mod actions;
pub mod artifact;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod seed;
pub mod state;

// Re-export primary types
pub use artifact::{ArtifactViewState, FeedbackAction, LayoutState, VersionStore, ViewMode};
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, Focus};
