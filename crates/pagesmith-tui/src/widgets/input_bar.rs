//! Prompt input bar with the model picker trigger

use pagesmith_app::state::{AppState, Focus};
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::Frame;

use crate::hit::{HitMap, Region};
use crate::theme::{icons::IconSet, styles};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, icons: IconSet, hits: &mut HitMap) {
    let focused = state.focus == Focus::Input;
    let block = styles::glass_block(focused).title(" Prompt ");
    let inner = block.inner(area);
    frame.render_widget(block, area);
    hits.register(inner, Region::Input);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    // Model button, right aligned inside the bar
    let label = format!("[{} \u{25be}]", state.selected_model.display_name());
    let button_width = label.chars().count() as u16;
    let button_area = Rect {
        x: inner.x + inner.width.saturating_sub(button_width),
        y: inner.y,
        width: button_width.min(inner.width),
        height: 1,
    };
    hits.register(button_area, Region::ModelButton);

    let text_width = inner.width.saturating_sub(button_width + 1) as usize;

    let shown: String = if state.input.text.is_empty() && !focused {
        "Describe the website you want to build...".to_string()
    } else {
        // Keep the cursor in view by trimming from the left.
        let text: Vec<char> = state.input.text.chars().collect();
        let start = state.input.cursor.saturating_sub(text_width.saturating_sub(1));
        text[start..].iter().collect()
    };

    let style = if state.input.text.is_empty() && !focused {
        styles::text_muted()
    } else {
        styles::text_primary()
    };
    frame.render_widget(
        Line::from(Span::styled(shown, style)),
        Rect {
            width: inner.width.saturating_sub(button_width + 1),
            ..inner
        },
    );

    let button_style = if state.input.model_open {
        styles::focused_selected()
    } else {
        styles::text_secondary()
    };
    frame.render_widget(Line::from(Span::styled(label, button_style)), button_area);

    if focused {
        let cursor_x = inner.x + (state.input.cursor.min(text_width) as u16);
        frame.set_cursor_position((cursor_x.min(inner.x + inner.width - 1), inner.y));
    }
}
