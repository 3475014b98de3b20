//! Mouse hit-testing.
//!
//! The renderer records the screen rectangle of every clickable element
//! each frame; the event layer resolves raw mouse coordinates against the
//! recorded regions to produce semantic messages.

use pagesmith_app::artifact::ViewMode;
use pagesmith_core::types::{GeminiModel, MessageId};
use ratatui::layout::Rect;

/// A clickable element on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// The prompt input line
    Input,
    /// The conversation transcript
    Transcript,
    /// The model picker trigger in the input bar
    ModelButton,
    /// One entry in the open model dropdown
    ModelEntry(GeminiModel),
    /// The artifact card of a transcript message
    ArtifactCard(MessageId),
    /// Body of the artifact panel (scroll target)
    ArtifactBody,
    /// Preview/Code tab in the artifact toolbar
    ViewTab(ViewMode),
    FullScreenButton,
    CollapseButton,
    SaveButton,
    CopyButton,
    ExportButton,
    RunButton,
    HistoryButton,
    /// One entry in the open history dropdown
    HistoryEntry(usize),
    /// The horizontal resize handle under the artifact panel
    ResizeHandle,
}

/// Regions recorded during one frame, in paint order.
#[derive(Debug, Default)]
pub struct HitMap {
    regions: Vec<(Rect, Region)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn register(&mut self, rect: Rect, region: Region) {
        if rect.width > 0 && rect.height > 0 {
            self.regions.push((rect, region));
        }
    }

    /// Topmost region containing the point. Later registrations win, so
    /// overlays painted last shadow what they cover.
    pub fn hit(&self, x: u16, y: u16) -> Option<Region> {
        self.regions
            .iter()
            .rev()
            .find(|(rect, _)| rect.contains(ratatui::layout::Position { x, y }))
            .map(|(_, region)| *region)
    }
}
