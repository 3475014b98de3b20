//! Message types for the application (TEA pattern)

use crate::artifact::{FeedbackAction, ViewMode};
use crate::input_key::InputKey;
use pagesmith_core::types::{GeminiModel, MessageId};

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (spinner animation)
    Tick,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Focus
    // ─────────────────────────────────────────────────────────
    /// Move focus to the next pane (input -> chat -> artifact)
    FocusNext,
    /// Move focus to the previous pane
    FocusPrev,

    // ─────────────────────────────────────────────────────────
    // Conversation Messages
    // ─────────────────────────────────────────────────────────
    /// Submit the input buffer as a prompt
    SubmitPrompt,
    /// Model reply arrived from the Gemini task
    PromptResponse { text: String, model: GeminiModel },

    // ─────────────────────────────────────────────────────────
    // Input Bar Messages
    // ─────────────────────────────────────────────────────────
    /// Type a character into the input buffer
    InputChar(char),
    /// Delete the character before the cursor
    InputBackspace,
    /// Clear the whole input buffer (Ctrl+U)
    InputClear,

    // ─────────────────────────────────────────────────────────
    // Model Picker Messages
    // ─────────────────────────────────────────────────────────
    /// Open/close the model dropdown
    ToggleModelPicker,
    /// Close the model dropdown (Esc, click outside)
    CloseModelPicker,
    /// Move the picker cursor
    ModelPickerUp,
    ModelPickerDown,
    /// Confirm the model under the cursor
    ModelPickerConfirm,
    /// Select a model directly (mouse click on an entry)
    SelectModel(GeminiModel),

    // ─────────────────────────────────────────────────────────
    // Transcript Scroll Messages
    // ─────────────────────────────────────────────────────────
    /// Scroll transcript up one line
    ScrollUp,
    /// Scroll transcript down one line
    ScrollDown,
    /// Page up in transcript
    PageUp,
    /// Page down in transcript
    PageDown,
    /// Scroll to top of transcript
    ScrollToTop,
    /// Scroll to bottom and re-enable follow mode
    ScrollToBottom,

    // ─────────────────────────────────────────────────────────
    // Artifact Messages (operate on the active instance)
    // ─────────────────────────────────────────────────────────
    /// Switch preview/code view
    ArtifactSetViewMode(ViewMode),
    /// Toggle full-screen (entering clears collapse, forces code view)
    ArtifactToggleFullScreen,
    /// Toggle collapse (entering clears full-screen)
    ArtifactToggleCollapse,
    /// Snapshot the live code buffer into the version store
    ArtifactSave,
    /// Copy the live code buffer to the system clipboard
    ArtifactCopy,
    /// Clipboard write succeeded (sent by the copy task)
    CodeCopied { message_id: MessageId },
    /// Simulated PNG export
    ArtifactExport,
    /// Simulated run; forces preview on completion
    ArtifactRun,
    /// A transient feedback flag timed out
    FeedbackExpired {
        message_id: MessageId,
        action: FeedbackAction,
        generation: u64,
    },
    /// Open/close the version history dropdown
    ArtifactToggleHistory,
    /// Move the history cursor
    ArtifactHistoryUp,
    ArtifactHistoryDown,
    /// Revert the live buffer to the version at the given store index
    ArtifactRevert(usize),
    /// Switch the active artifact instance ([ / ])
    ArtifactPrev,
    ArtifactNext,
    /// Activate a specific artifact instance (mouse click)
    ArtifactSelect(MessageId),
    /// Scroll the (non-full-screen) code view
    ArtifactCodeScrollUp,
    ArtifactCodeScrollDown,

    // ─────────────────────────────────────────────────────────
    // Artifact Resize Messages (mouse drag on the handle)
    // ─────────────────────────────────────────────────────────
    /// Pointer pressed on the resize handle
    ArtifactDragStarted,
    /// Pointer moved while dragging; delta in layout pixels
    ArtifactDragMoved { delta_px: i32 },
    /// Pointer released
    ArtifactDragEnded,

    // ─────────────────────────────────────────────────────────
    // Full-Screen Code Editing
    // ─────────────────────────────────────────────────────────
    /// Raw key routed to the code editor while full-screen editing
    EditorInput(InputKey),

    // ─────────────────────────────────────────────────────────
    // Overlay Dismissal
    // ─────────────────────────────────────────────────────────
    /// Click landed outside every open dropdown; close them all
    CloseOverlays,
}
