//! Per-artifact view state: version history, layout, feedback flags, editor.
//!
//! Every message that carries an artifact gets its own [`ArtifactViewState`],
//! keyed by the owning message id. Nothing here is shared across instances.

pub mod editor;
pub mod feedback;
pub mod layout;
pub mod version_store;

pub use editor::EditorState;
pub use feedback::{FeedbackAction, TimedFlag};
pub use layout::{LayoutState, ViewMode, DEFAULT_HEIGHT_PX, MAX_HEIGHT_PX, MIN_HEIGHT_PX};
pub use version_store::VersionStore;

use pagesmith_core::types::{ArtifactData, ArtifactKind};

/// Local state of one artifact panel instance.
#[derive(Debug, Clone)]
pub struct ArtifactViewState {
    /// Display title from the artifact data
    pub title: String,
    /// Live code buffer; edited in full-screen, snapshotted by save,
    /// overwritten by revert
    pub code: String,
    /// Version history, newest first, never empty
    pub versions: VersionStore,
    /// View mode / full-screen / collapse / resize state
    pub layout: LayoutState,
    /// Transient action feedback flags
    pub copy: TimedFlag,
    pub save: TimedFlag,
    pub export: TimedFlag,
    pub run: TimedFlag,
    /// Version history dropdown
    pub show_history: bool,
    pub history_cursor: usize,
    /// Scroll offset of the read-only code view (line index at top)
    pub code_scroll: usize,
    /// Cursor/viewport for full-screen editing
    pub editor: EditorState,
}

impl ArtifactViewState {
    /// Create the state for a freshly attached artifact. The version store
    /// is seeded with one "Initial Generation" entry holding the artifact
    /// content.
    pub fn new(artifact: &ArtifactData) -> Self {
        let view_mode = match artifact.kind {
            ArtifactKind::Preview => ViewMode::Preview,
            ArtifactKind::Code => ViewMode::Code,
        };
        Self {
            title: artifact.title.clone(),
            code: artifact.content.clone(),
            versions: VersionStore::new(&artifact.content),
            layout: LayoutState::with_view_mode(view_mode),
            copy: TimedFlag::default(),
            save: TimedFlag::default(),
            export: TimedFlag::default(),
            run: TimedFlag::default(),
            show_history: false,
            history_cursor: 0,
            code_scroll: 0,
            editor: EditorState::default(),
        }
    }

    /// The feedback flag for a given action
    pub fn feedback_mut(&mut self, action: FeedbackAction) -> &mut TimedFlag {
        match action {
            FeedbackAction::Copy => &mut self.copy,
            FeedbackAction::Save => &mut self.save,
            FeedbackAction::Export => &mut self.export,
            FeedbackAction::Run => &mut self.run,
        }
    }

    /// Copy the chosen version's content into the live buffer.
    ///
    /// The store itself is untouched; the history dropdown closes. Out of
    /// range indices are ignored.
    pub fn revert(&mut self, index: usize) {
        if let Some(version) = self.versions.get(index) {
            self.code = version.content.clone();
            self.editor.clamp_to(&self.code);
        }
        self.show_history = false;
    }

    /// Toggle the history dropdown, resetting the cursor on open
    pub fn toggle_history(&mut self) {
        self.show_history = !self.show_history;
        if self.show_history {
            self.history_cursor = 0;
        }
    }
}
