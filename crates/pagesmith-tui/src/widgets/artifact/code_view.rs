//! Syntax highlighted code view, read-only and full-screen editing

use pagesmith_app::artifact::ArtifactViewState;
use pagesmith_core::highlight::highlight_line;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::Frame;

use crate::theme::styles;

pub fn render(frame: &mut Frame, area: Rect, view: &ArtifactViewState, focused: bool) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let editing = view.layout.full_screen && focused;
    let lines: Vec<&str> = view.code.split('\n').collect();
    let gutter_width = lines.len().to_string().len().max(2);

    let scroll = if editing {
        scroll_for_cursor(view.editor.cursor_row, view.editor.scroll, area.height as usize)
    } else {
        view.code_scroll.min(lines.len().saturating_sub(1))
    };

    for (row, line) in lines.iter().skip(scroll).take(area.height as usize).enumerate() {
        let line_index = scroll + row;
        let row_area = Rect {
            x: area.x,
            y: area.y + row as u16,
            width: area.width,
            height: 1,
        };

        let mut spans = vec![Span::styled(
            format!("{:>gutter_width$} ", line_index + 1),
            styles::text_muted(),
        )];
        for hl in highlight_line(line) {
            spans.push(Span::styled(hl.text, styles::syntax(hl.kind)));
        }
        frame.render_widget(Line::from(spans), row_area);

        if editing && line_index == view.editor.cursor_row {
            let col = view.editor.cursor_col.min(line.chars().count());
            let x = area.x + gutter_width as u16 + 1 + col as u16;
            if x < area.right() {
                frame.set_cursor_position((x, row_area.y));
            }
        }
    }
}

/// Keep the cursor row inside the viewport
fn scroll_for_cursor(cursor_row: usize, scroll: usize, viewport: usize) -> usize {
    if viewport == 0 {
        return scroll;
    }
    if cursor_row < scroll {
        cursor_row
    } else if cursor_row >= scroll + viewport {
        cursor_row + 1 - viewport
    } else {
        scroll
    }
}
