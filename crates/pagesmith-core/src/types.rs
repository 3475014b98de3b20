//! Core domain types for the conversation and artifact model

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Who produced a conversation turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl Role {
    /// Wire name used in Gemini request history (`user` / `model`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
        }
    }
}

/// Opaque identifier for a conversation turn.
///
/// Allocated monotonically by the application state; never reused within a
/// session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MessageId(pub u64);

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "msg-{}", self.0)
    }
}

/// Initial presentation of an artifact panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    #[default]
    Preview,
    Code,
}

/// Generated page content attached to a model message.
///
/// Read-only snapshot -- the per-instance live code buffer and version history
/// are owned by the artifact view, not by the message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactData {
    /// Display title, e.g. "AstraMind Landing Page"
    pub title: String,
    /// View the artifact opens in
    pub kind: ArtifactKind,
    /// Page source content
    pub content: String,
}

/// A single conversation turn.
///
/// Immutable once appended to the transcript; the conversation controller
/// owns the list exclusively and never destroys entries within a session.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub id: MessageId,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Local>,
    /// Display name of the model that produced this turn (model turns only)
    pub model_name: Option<String>,
    /// Optional generated artifact shown alongside the turn
    pub artifact: Option<ArtifactData>,
}

impl ChatMessage {
    /// Create a user turn with the current timestamp
    pub fn user(id: MessageId, content: impl Into<String>) -> Self {
        Self {
            id,
            role: Role::User,
            content: content.into(),
            timestamp: Local::now(),
            model_name: None,
            artifact: None,
        }
    }

    /// Create a model turn with the current timestamp
    pub fn model(id: MessageId, content: impl Into<String>, model_name: impl Into<String>) -> Self {
        Self {
            id,
            role: Role::Model,
            content: content.into(),
            timestamp: Local::now(),
            model_name: Some(model_name.into()),
            artifact: None,
        }
    }

    /// Attach an artifact to this turn (builder style)
    pub fn with_artifact(mut self, artifact: ArtifactData) -> Self {
        self.artifact = Some(artifact);
        self
    }
}

/// Selectable Gemini model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeminiModel {
    Flash,
    #[default]
    Pro,
}

impl GeminiModel {
    /// Model identifier sent to the Gemini API
    pub fn api_name(&self) -> &'static str {
        match self {
            GeminiModel::Flash => "gemini-2.5-flash",
            GeminiModel::Pro => "gemini-3-pro-preview",
        }
    }

    /// Human-readable name shown in the model picker
    pub fn display_name(&self) -> &'static str {
        match self {
            GeminiModel::Flash => "Gemini Flash",
            GeminiModel::Pro => "Gemini 3 Pro",
        }
    }

    /// Short description shown under the name in the picker
    pub fn description(&self) -> &'static str {
        match self {
            GeminiModel::Flash => "Fastest response",
            GeminiModel::Pro => "Best for complex coding",
        }
    }

    /// All selectable models, picker order
    pub const fn all() -> [GeminiModel; 2] {
        [GeminiModel::Pro, GeminiModel::Flash]
    }
}

/// Identifier for a saved code version within one artifact instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VersionId(pub u64);

/// Immutable snapshot of artifact source content taken at an explicit save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeVersion {
    pub id: VersionId,
    pub timestamp: DateTime<Local>,
    pub content: String,
    /// "Initial Generation", "Version 2", "Version 3", ...
    pub label: Option<String>,
}
