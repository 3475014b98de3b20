//! Screen layout definitions for the TUI

use pagesmith_app::artifact::LayoutState;
use ratatui::layout::{Constraint, Layout, Rect};

/// Layout pixels represented by one terminal row. Panel heights are kept
/// in pixels by the app state; the renderer converts at this ratio.
pub const PX_PER_ROW: u16 = 25;

/// Rows of the collapsed artifact panel (toolbar plus borders)
const COLLAPSED_ROWS: u16 = 3;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Header bar (title + model indicator)
    pub header: Rect,

    /// Conversation transcript
    pub chat: Rect,

    /// Artifact panel, zero-sized when no artifact exists
    pub artifact: Rect,

    /// Resize handle row under the artifact panel
    pub resize_handle: Rect,

    /// Prompt input bar
    pub input: Rect,
}

/// Rows the artifact panel occupies for a given layout state
pub fn artifact_rows(layout: &LayoutState) -> u16 {
    if layout.collapsed {
        COLLAPSED_ROWS
    } else {
        (layout.height_px / PX_PER_ROW).max(COLLAPSED_ROWS + 2)
    }
}

/// Create the main screen layout.
///
/// Full-screen artifacts take the entire area; every other region is
/// zero-sized for that frame.
pub fn create(area: Rect, artifact: Option<&LayoutState>) -> ScreenAreas {
    if let Some(layout) = artifact {
        if layout.full_screen {
            return ScreenAreas {
                header: Rect::default(),
                chat: Rect::default(),
                artifact: area,
                resize_handle: Rect::default(),
                input: Rect::default(),
            };
        }
    }

    let mut constraints = vec![
        Constraint::Length(3), // Header
        Constraint::Min(5),    // Transcript
    ];
    if let Some(layout) = artifact {
        constraints.push(Constraint::Length(artifact_rows(layout)));
        constraints.push(Constraint::Length(if layout.resizable() { 1 } else { 0 }));
    }
    constraints.push(Constraint::Length(3)); // Input bar

    let chunks = Layout::vertical(constraints).split(area);

    match artifact {
        Some(_) => ScreenAreas {
            header: chunks[0],
            chat: chunks[1],
            artifact: chunks[2],
            resize_handle: chunks[3],
            input: chunks[4],
        },
        None => ScreenAreas {
            header: chunks[0],
            chat: chunks[1],
            artifact: Rect::default(),
            resize_handle: Rect::default(),
            input: chunks[2],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_without_artifact() {
        let areas = create(Rect::new(0, 0, 80, 40), None);
        assert_eq!(areas.header.height, 3);
        assert_eq!(areas.input.height, 3);
        assert_eq!(areas.artifact.height, 0);
        assert_eq!(areas.chat.height, 34);
    }

    #[test]
    fn test_default_panel_height_maps_to_rows() {
        let layout = LayoutState::default();
        // 500 px at 25 px per row
        assert_eq!(artifact_rows(&layout), 20);

        let areas = create(Rect::new(0, 0, 80, 50), Some(&layout));
        assert_eq!(areas.artifact.height, 20);
        assert_eq!(areas.resize_handle.height, 1);
    }

    #[test]
    fn test_collapsed_panel_is_toolbar_only() {
        let mut layout = LayoutState::default();
        layout.toggle_collapse();
        assert_eq!(artifact_rows(&layout), 3);

        let areas = create(Rect::new(0, 0, 80, 40), Some(&layout));
        // Handle hidden while collapsed.
        assert_eq!(areas.resize_handle.height, 0);
    }

    #[test]
    fn test_full_screen_takes_everything() {
        let mut layout = LayoutState::default();
        layout.toggle_full_screen();

        let area = Rect::new(0, 0, 80, 40);
        let areas = create(area, Some(&layout));
        assert_eq!(areas.artifact, area);
        assert_eq!(areas.chat.height, 0);
        assert_eq!(areas.input.height, 0);
    }
}
