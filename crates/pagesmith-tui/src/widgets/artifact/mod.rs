//! Artifact panel: toolbar, preview/code body, history dropdown, resize
//! handle.

pub mod code_view;
pub mod history;
pub mod preview;
pub mod toolbar;

use pagesmith_app::artifact::{ArtifactViewState, ViewMode};
use pagesmith_app::state::{AppState, Focus};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::Frame;

use crate::hit::{HitMap, Region};
use crate::theme::{icons::IconSet, styles};

pub fn render(
    frame: &mut Frame,
    area: Rect,
    handle_area: Rect,
    state: &AppState,
    view: &ArtifactViewState,
    icons: IconSet,
    hits: &mut HitMap,
) {
    let focused = state.focus == Focus::Artifact;
    let block = styles::glass_block(focused).title(format!(" {} ", view.title));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let [toolbar_area, body_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);

    toolbar::render(frame, toolbar_area, view, icons, hits);

    if !view.layout.collapsed && body_area.height > 0 {
        hits.register(body_area, Region::ArtifactBody);
        match view.layout.view_mode {
            ViewMode::Preview => preview::render(frame, body_area),
            ViewMode::Code => code_view::render(frame, body_area, view, focused),
        }
    }

    if view.show_history {
        history::render(frame, inner, view, hits);
    }

    if handle_area.height > 0 {
        render_resize_handle(frame, handle_area, view, hits);
    }
}

fn render_resize_handle(
    frame: &mut Frame,
    area: Rect,
    view: &ArtifactViewState,
    hits: &mut HitMap,
) {
    hits.register(area, Region::ResizeHandle);
    let style = if view.layout.dragging {
        styles::accent()
    } else {
        styles::text_muted()
    };
    let bar = "\u{2550}".repeat((area.width as usize).saturating_sub(2));
    frame.render_widget(Line::from(Span::styled(format!(" {bar}"), style)), area);
}
