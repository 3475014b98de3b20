//! Artifact toolbar: view tabs and action buttons

use pagesmith_app::artifact::{ArtifactViewState, ViewMode};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::Frame;

use crate::hit::{HitMap, Region};
use crate::theme::{icons::IconSet, palette, styles};

struct Button {
    label: String,
    region: Region,
    active: bool,
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    view: &ArtifactViewState,
    icons: IconSet,
    hits: &mut HitMap,
) {
    if area.height == 0 {
        return;
    }

    // Tabs on the left
    let mut x = area.x;
    for (mode, label) in [(ViewMode::Preview, " Preview "), (ViewMode::Code, " Code ")] {
        let width = label.len() as u16;
        let rect = Rect { x, y: area.y, width, height: 1 };
        if rect.right() <= area.right() {
            hits.register(rect, Region::ViewTab(mode));
            let style = if view.layout.view_mode == mode && !view.layout.collapsed {
                styles::focused_selected()
            } else {
                styles::text_secondary()
            };
            frame.render_widget(Line::from(Span::styled(label, style)), rect);
        }
        x += width + 1;
    }

    // Action buttons on the right
    let buttons = build_buttons(view, icons);
    let total: u16 = buttons.iter().map(|b| b.label.chars().count() as u16 + 1).sum();
    let mut bx = area.right().saturating_sub(total);
    for button in buttons {
        let width = button.label.chars().count() as u16;
        let rect = Rect { x: bx, y: area.y, width, height: 1 };
        if rect.x >= area.x && rect.right() <= area.right() {
            hits.register(rect, button.region);
            let style = if button.active {
                Style::default().fg(palette::STATUS_GREEN)
            } else {
                styles::text_secondary()
            };
            frame.render_widget(Line::from(Span::styled(button.label, style)), rect);
        }
        bx += width + 1;
    }
}

fn build_buttons(view: &ArtifactViewState, icons: IconSet) -> Vec<Button> {
    let check = icons.check();
    vec![
        Button {
            label: if view.save.is_active() {
                format!("{check} Saved")
            } else {
                format!("{} Save", icons.save())
            },
            region: Region::SaveButton,
            active: view.save.is_active(),
        },
        Button {
            label: if view.copy.is_active() {
                format!("{check} Copied!")
            } else {
                format!("{} Copy", icons.copy())
            },
            region: Region::CopyButton,
            active: view.copy.is_active(),
        },
        Button {
            label: if view.export.is_active() {
                format!("{check} Exported!")
            } else {
                "PNG".to_string()
            },
            region: Region::ExportButton,
            active: view.export.is_active(),
        },
        Button {
            label: if view.run.is_active() {
                "Running...".to_string()
            } else {
                format!("{} Run", icons.run())
            },
            region: Region::RunButton,
            active: view.run.is_active(),
        },
        Button {
            label: format!("{} {}", icons.history(), view.versions.len()),
            region: Region::HistoryButton,
            active: view.show_history,
        },
        Button {
            label: icons.expand().to_string(),
            region: Region::FullScreenButton,
            active: view.layout.full_screen,
        },
        Button {
            label: icons.collapse().to_string(),
            region: Region::CollapseButton,
            active: view.layout.collapsed,
        },
    ]
}
