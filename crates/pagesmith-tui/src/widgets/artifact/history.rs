//! Version history dropdown

use pagesmith_app::artifact::ArtifactViewState;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

use crate::hit::{HitMap, Region};
use crate::theme::styles;

const MAX_VISIBLE: u16 = 8;

pub fn render(frame: &mut Frame, panel: Rect, view: &ArtifactViewState, hits: &mut HitMap) {
    let entries = view.versions.len() as u16;
    let height = entries.min(MAX_VISIBLE) + 2;
    let width = 34.min(panel.width);
    if panel.height < 3 || width < 10 {
        return;
    }

    // Anchored under the toolbar's right edge, like a dropdown.
    let area = Rect {
        x: panel.right().saturating_sub(width),
        y: panel.y + 1,
        width,
        height: height.min(panel.height),
    };

    frame.render_widget(Clear, area);
    let block = styles::popup_block(" Versions ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Window the list around the cursor.
    let visible = inner.height as usize;
    let start = view
        .history_cursor
        .saturating_sub(visible.saturating_sub(1));

    for (row, (index, version)) in view
        .versions
        .iter()
        .enumerate()
        .skip(start)
        .take(visible)
        .enumerate()
    {
        let row_area = Rect {
            x: inner.x,
            y: inner.y + row as u16,
            width: inner.width,
            height: 1,
        };
        hits.register(row_area, Region::HistoryEntry(index));

        let label = version.label.as_deref().unwrap_or("(unlabelled)");
        let text = format!("{label}  {}", version.timestamp.format("%H:%M:%S"));
        let style = if index == view.history_cursor {
            styles::focused_selected()
        } else {
            styles::text_secondary()
        };
        frame.render_widget(Paragraph::new(Line::from(Span::styled(text, style))), row_area);
    }
}
