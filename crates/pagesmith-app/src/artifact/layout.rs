//! Artifact panel layout: view mode, full-screen, collapse, resize.

use serde::{Deserialize, Serialize};

/// Panel height bounds in pixels. The TUI maps pixels to terminal rows
/// at render time; state keeps the pixel value so clamping matches the
/// drag deltas it receives.
pub const MIN_HEIGHT_PX: u16 = 300;
pub const MAX_HEIGHT_PX: u16 = 800;
pub const DEFAULT_HEIGHT_PX: u16 = 500;

/// Which face of the artifact panel is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewMode {
    Preview,
    Code,
}

/// Layout flags and panel height for one artifact instance.
///
/// Invariants: full-screen and collapsed are mutually exclusive, and
/// `height_px` stays within `[MIN_HEIGHT_PX, MAX_HEIGHT_PX]`.
#[derive(Debug, Clone)]
pub struct LayoutState {
    pub view_mode: ViewMode,
    pub full_screen: bool,
    pub collapsed: bool,
    pub height_px: u16,
    /// A resize drag is in progress
    pub dragging: bool,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::with_view_mode(ViewMode::Preview)
    }
}

impl LayoutState {
    pub fn with_view_mode(view_mode: ViewMode) -> Self {
        Self {
            view_mode,
            full_screen: false,
            collapsed: false,
            height_px: DEFAULT_HEIGHT_PX,
            dragging: false,
        }
    }

    /// Switch the panel face. Ignored while collapsed, where neither
    /// face is visible.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        if !self.collapsed {
            self.view_mode = mode;
        }
    }

    /// Entering full screen expands a collapsed panel and jumps to the
    /// code view for editing. Leaving restores nothing.
    pub fn toggle_full_screen(&mut self) {
        self.full_screen = !self.full_screen;
        if self.full_screen {
            self.collapsed = false;
            self.view_mode = ViewMode::Code;
        }
    }

    /// Collapsing exits full screen first; the view mode is untouched so
    /// expanding returns to the same face.
    pub fn toggle_collapse(&mut self) {
        self.collapsed = !self.collapsed;
        if self.collapsed {
            self.full_screen = false;
            self.dragging = false;
        }
    }

    /// Begin a resize drag. The handle is hidden while full screen or
    /// collapsed, so drags are refused in those states.
    pub fn start_drag(&mut self) {
        if !self.full_screen && !self.collapsed {
            self.dragging = true;
        }
    }

    /// Apply a cumulative drag delta in pixels, clamped to the bounds.
    pub fn drag_move(&mut self, delta_px: i32) {
        if !self.dragging {
            return;
        }
        let raw = i32::from(self.height_px) + delta_px;
        self.height_px = raw.clamp(i32::from(MIN_HEIGHT_PX), i32::from(MAX_HEIGHT_PX)) as u16;
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Whether the resize handle should be shown
    pub fn resizable(&self) -> bool {
        !self.full_screen && !self.collapsed
    }
}
