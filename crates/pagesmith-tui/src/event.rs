//! Terminal event polling

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use pagesmith_app::message::Message;
use pagesmith_app::InputKey;
use pagesmith_core::prelude::*;

use crate::hit::{HitMap, Region};
use crate::layout::PX_PER_ROW;

/// Resize drag in progress, tracked between mouse events
#[derive(Debug, Default)]
pub struct DragState {
    active: bool,
    last_y: u16,
}

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Delete => Some(InputKey::Delete),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        KeyCode::PageUp => Some(InputKey::PageUp),
        KeyCode::PageDown => Some(InputKey::PageDown),
        _ => None, // Unsupported keys ignored
    }
}

/// Resolve a mouse event against the regions the last frame painted
pub fn handle_mouse(mouse: MouseEvent, hits: &HitMap, drag: &mut DragState) -> Option<Message> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            match hits.hit(mouse.column, mouse.row) {
                Some(Region::ModelButton) => Some(Message::ToggleModelPicker),
                Some(Region::ModelEntry(model)) => Some(Message::SelectModel(model)),
                Some(Region::ArtifactCard(id)) => Some(Message::ArtifactSelect(id)),
                Some(Region::ViewTab(mode)) => Some(Message::ArtifactSetViewMode(mode)),
                Some(Region::FullScreenButton) => Some(Message::ArtifactToggleFullScreen),
                Some(Region::CollapseButton) => Some(Message::ArtifactToggleCollapse),
                Some(Region::SaveButton) => Some(Message::ArtifactSave),
                Some(Region::CopyButton) => Some(Message::ArtifactCopy),
                Some(Region::ExportButton) => Some(Message::ArtifactExport),
                Some(Region::RunButton) => Some(Message::ArtifactRun),
                Some(Region::HistoryButton) => Some(Message::ArtifactToggleHistory),
                Some(Region::HistoryEntry(index)) => Some(Message::ArtifactRevert(index)),
                Some(Region::ResizeHandle) => {
                    drag.active = true;
                    drag.last_y = mouse.row;
                    Some(Message::ArtifactDragStarted)
                }
                // A press anywhere else dismisses open dropdowns.
                Some(Region::Input | Region::Transcript | Region::ArtifactBody) | None => {
                    Some(Message::CloseOverlays)
                }
            }
        }

        MouseEventKind::Drag(MouseButton::Left) if drag.active => {
            let delta_rows = i32::from(mouse.row) - i32::from(drag.last_y);
            if delta_rows == 0 {
                return None;
            }
            drag.last_y = mouse.row;
            Some(Message::ArtifactDragMoved {
                delta_px: delta_rows * i32::from(PX_PER_ROW),
            })
        }

        MouseEventKind::Up(MouseButton::Left) if drag.active => {
            drag.active = false;
            Some(Message::ArtifactDragEnded)
        }

        MouseEventKind::ScrollUp => match hits.hit(mouse.column, mouse.row) {
            Some(Region::ArtifactBody) => Some(Message::ArtifactCodeScrollUp),
            Some(Region::Transcript) => Some(Message::ScrollUp),
            _ => None,
        },
        MouseEventKind::ScrollDown => match hits.hit(mouse.column, mouse.row) {
            Some(Region::ArtifactBody) => Some(Message::ArtifactCodeScrollDown),
            Some(Region::Transcript) => Some(Message::ScrollDown),
            _ => None,
        },

        _ => None,
    }
}

/// Poll for terminal events with timeout
pub fn poll(hits: &HitMap, drag: &mut DragState) -> Result<Option<Message>> {
    // Poll with 50ms timeout (20 FPS)
    if event::poll(Duration::from_millis(50))? {
        match event::read()? {
            Event::Key(key) if key.kind == event::KeyEventKind::Press => {
                Ok(key_event_to_input(key).map(Message::Key))
            }
            Event::Mouse(mouse) => Ok(handle_mouse(mouse, hits, drag)),
            _ => Ok(None),
        }
    } else {
        // Generate tick on timeout for animations
        Ok(Some(Message::Tick))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;
    use pagesmith_app::artifact::ViewMode;
    use ratatui::layout::Rect;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_char_conversion() {
        let key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), Some(InputKey::Char('a')));
    }

    #[test]
    fn test_char_with_ctrl_conversion() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_event_to_input(key), Some(InputKey::CharCtrl('c')));
    }

    #[test]
    fn test_backtab_with_shift() {
        let key = KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT);
        assert_eq!(key_event_to_input(key), Some(InputKey::BackTab));
    }

    #[test]
    fn test_unsupported_key_returns_none() {
        let key = KeyEvent::new(KeyCode::Insert, KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), None);
    }

    #[test]
    fn test_click_on_tab_switches_view() {
        let mut hits = HitMap::default();
        hits.register(Rect::new(10, 2, 6, 1), Region::ViewTab(ViewMode::Code));
        let mut drag = DragState::default();

        let msg = handle_mouse(
            mouse(MouseEventKind::Down(MouseButton::Left), 12, 2),
            &hits,
            &mut drag,
        );
        assert!(matches!(msg, Some(Message::ArtifactSetViewMode(ViewMode::Code))));
    }

    #[test]
    fn test_click_outside_closes_overlays() {
        let hits = HitMap::default();
        let mut drag = DragState::default();
        let msg = handle_mouse(
            mouse(MouseEventKind::Down(MouseButton::Left), 1, 1),
            &hits,
            &mut drag,
        );
        assert!(matches!(msg, Some(Message::CloseOverlays)));
    }

    #[test]
    fn test_resize_drag_sequence() {
        let mut hits = HitMap::default();
        hits.register(Rect::new(0, 30, 80, 1), Region::ResizeHandle);
        let mut drag = DragState::default();

        let down = handle_mouse(
            mouse(MouseEventKind::Down(MouseButton::Left), 40, 30),
            &hits,
            &mut drag,
        );
        assert!(matches!(down, Some(Message::ArtifactDragStarted)));

        let moved = handle_mouse(
            mouse(MouseEventKind::Drag(MouseButton::Left), 40, 32),
            &hits,
            &mut drag,
        );
        assert!(matches!(
            moved,
            Some(Message::ArtifactDragMoved { delta_px: 50 })
        ));

        let up = handle_mouse(
            mouse(MouseEventKind::Up(MouseButton::Left), 40, 32),
            &hits,
            &mut drag,
        );
        assert!(matches!(up, Some(Message::ArtifactDragEnded)));
        assert!(!drag.active);
    }

    #[test]
    fn test_scroll_over_transcript() {
        let mut hits = HitMap::default();
        hits.register(Rect::new(0, 3, 80, 20), Region::Transcript);
        let mut drag = DragState::default();

        let msg = handle_mouse(mouse(MouseEventKind::ScrollUp, 5, 10), &hits, &mut drag);
        assert!(matches!(msg, Some(Message::ScrollUp)));
    }
}
