//! Application state.

use std::collections::HashMap;

use pagesmith_core::types::{ArtifactData, ArtifactKind, ChatMessage, GeminiModel, MessageId};
use pagesmith_gemini::HistoryTurn;

use crate::artifact::ArtifactViewState;
use crate::config::Settings;
use crate::seed;

/// Which pane receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    Chat,
    Artifact,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Input => Focus::Chat,
            Focus::Chat => Focus::Artifact,
            Focus::Artifact => Focus::Input,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Input => Focus::Artifact,
            Focus::Chat => Focus::Input,
            Focus::Artifact => Focus::Chat,
        }
    }
}

/// Prompt input line with a cursor and the model picker overlay.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
    pub model_open: bool,
    pub model_cursor: usize,
}

impl InputState {
    pub fn insert(&mut self, c: char) {
        let at = self.text.chars().take(self.cursor).map(char::len_utf8).sum();
        self.text.insert(at, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let at: usize = self.text.chars().take(self.cursor - 1).map(char::len_utf8).sum();
        self.text.remove(at);
        self.cursor -= 1;
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Drain the input, returning the trimmed text
    pub fn take(&mut self) -> String {
        let text = self.text.trim().to_string();
        self.clear();
        text
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Transcript scroll position. While `follow` is set the view pins to the
/// newest message; any manual scroll unpins it.
#[derive(Debug, Clone)]
pub struct TranscriptScroll {
    pub offset: usize,
    pub follow: bool,
}

impl Default for TranscriptScroll {
    fn default() -> Self {
        Self { offset: 0, follow: true }
    }
}

/// Whole-session state. Mutated only by `handler::update`.
#[derive(Debug)]
pub struct AppState {
    pub messages: Vec<ChatMessage>,
    pub is_loading: bool,
    pub selected_model: GeminiModel,
    /// One view state per artifact-bearing message
    pub artifact_views: HashMap<MessageId, ArtifactViewState>,
    /// The artifact instance the panel currently shows
    pub active_artifact: Option<MessageId>,
    pub focus: Focus,
    pub input: InputState,
    pub transcript: TranscriptScroll,
    pub should_quit: bool,
    /// Spinner phase while a prompt is in flight
    pub loading_frame: usize,
    pub settings: Settings,
    next_message_id: u64,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let mut state = Self {
            messages: Vec::new(),
            is_loading: false,
            selected_model: settings.gemini.model,
            artifact_views: HashMap::new(),
            active_artifact: None,
            focus: Focus::Input,
            input: InputState::default(),
            transcript: TranscriptScroll::default(),
            should_quit: false,
            loading_frame: 0,
            settings,
            next_message_id: 1,
        };

        let seed_artifact = ArtifactData {
            title: seed::INITIAL_TITLE.to_string(),
            kind: ArtifactKind::Preview,
            content: seed::INITIAL_CODE.to_string(),
        };
        let opening = ChatMessage::model(
            state.next_message_id(),
            seed::INITIAL_MESSAGE,
            GeminiModel::Pro.display_name(),
        )
        .with_artifact(seed_artifact);
        state.push_message(opening);
        state
    }

    pub fn next_message_id(&mut self) -> MessageId {
        let id = MessageId(self.next_message_id);
        self.next_message_id += 1;
        id
    }

    /// Append a message; an attached artifact gets a view state and
    /// becomes the active instance.
    pub fn push_message(&mut self, message: ChatMessage) {
        if let Some(artifact) = &message.artifact {
            self.artifact_views
                .insert(message.id, ArtifactViewState::new(artifact));
            self.active_artifact = Some(message.id);
        }
        self.messages.push(message);
        if self.transcript.follow {
            self.transcript.offset = 0;
        }
    }

    pub fn active_artifact_mut(&mut self) -> Option<&mut ArtifactViewState> {
        let id = self.active_artifact?;
        self.artifact_views.get_mut(&id)
    }

    pub fn active_artifact_view(&self) -> Option<&ArtifactViewState> {
        let id = self.active_artifact?;
        self.artifact_views.get(&id)
    }

    /// Ids of artifact-bearing messages in transcript order
    pub fn artifact_ids(&self) -> Vec<MessageId> {
        self.messages
            .iter()
            .filter(|m| m.artifact.is_some())
            .map(|m| m.id)
            .collect()
    }

    /// Step the active artifact forward or backward through the
    /// transcript's artifact instances.
    pub fn cycle_artifact(&mut self, forward: bool) {
        let ids = self.artifact_ids();
        if ids.is_empty() {
            return;
        }
        let current = self
            .active_artifact
            .and_then(|id| ids.iter().position(|&i| i == id))
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % ids.len()
        } else {
            (current + ids.len() - 1) % ids.len()
        };
        self.active_artifact = Some(ids[next]);
    }

    /// Conversation turns for the API, oldest first. Built from the
    /// transcript as it stands, so it excludes a prompt not yet appended.
    pub fn request_history(&self) -> Vec<HistoryTurn> {
        self.messages
            .iter()
            .map(|m| HistoryTurn { role: m.role, text: m.content.clone() })
            .collect()
    }

    /// True when the artifact panel consumes plain (unmodified) keys
    pub fn artifact_editing(&self) -> bool {
        self.focus == Focus::Artifact
            && self
                .active_artifact_view()
                .is_some_and(|v| v.layout.full_screen)
    }
}
