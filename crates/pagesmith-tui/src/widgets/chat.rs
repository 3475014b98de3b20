//! Conversation transcript rendering

use pagesmith_app::state::{AppState, Focus};
use pagesmith_core::types::{MessageId, Role};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::Frame;

use crate::hit::{HitMap, Region};
use crate::theme::{icons::IconSet, palette, styles};

use super::wrap_text;

/// One prepared transcript row, optionally clickable
struct Row<'a> {
    line: Line<'a>,
    region: Option<Region>,
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    state: &mut AppState,
    icons: IconSet,
    hits: &mut HitMap,
) {
    let focused = state.focus == Focus::Chat;
    let block = styles::glass_block(focused).title(" Conversation ");
    let inner = block.inner(area);
    frame.render_widget(block, area);
    hits.register(inner, Region::Transcript);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let rows = build_rows(state, icons, inner.width as usize);

    // Offset counts rows up from the bottom of the transcript; clamp it
    // back into state now that the real row count is known.
    let viewport = inner.height as usize;
    let max_offset = rows.len().saturating_sub(viewport);
    state.transcript.offset = state.transcript.offset.min(max_offset);
    let offset = state.transcript.offset;
    let end = rows.len() - offset;
    let start = end.saturating_sub(viewport);

    for (i, row) in rows.into_iter().skip(start).take(viewport).enumerate() {
        let row_area = Rect {
            x: inner.x,
            y: inner.y + i as u16,
            width: inner.width,
            height: 1,
        };
        if let Some(region) = row.region {
            hits.register(row_area, region);
        }
        frame.render_widget(row.line, row_area);
    }
}

fn build_rows(state: &AppState, icons: IconSet, width: usize) -> Vec<Row<'static>> {
    let mut rows = Vec::new();
    let text_width = width.saturating_sub(2).max(1);

    for message in &state.messages {
        rows.push(Row {
            line: header_line(message.role, message.model_name.as_deref(), message, icons),
            region: None,
        });

        for text in wrap_text(&message.content, text_width) {
            rows.push(Row {
                line: Line::from(Span::styled(format!("  {text}"), styles::text_primary())),
                region: None,
            });
        }

        if let Some(artifact) = &message.artifact {
            rows.push(artifact_card(message.id, &artifact.title, state, icons));
        }

        rows.push(Row {
            line: Line::default(),
            region: None,
        });
    }

    if state.is_loading {
        rows.push(Row {
            line: Line::from(vec![
                Span::styled(
                    format!("{} ", icons.spinner_frame(state.loading_frame)),
                    styles::accent(),
                ),
                Span::styled("Generating...", styles::text_muted()),
            ]),
            region: None,
        });
    }

    rows
}

fn header_line(
    role: Role,
    model_name: Option<&str>,
    message: &pagesmith_core::types::ChatMessage,
    icons: IconSet,
) -> Line<'static> {
    let (icon, name, color) = match role {
        Role::User => (icons.user(), "You".to_string(), palette::ROLE_USER),
        Role::Model => (
            icons.sparkle(),
            model_name.unwrap_or("Gemini").to_string(),
            palette::ROLE_MODEL,
        ),
    };
    Line::from(vec![
        Span::styled(format!("{icon} {name}"), Style::default().fg(color)),
        Span::styled(
            format!("  {}", message.timestamp.format("%H:%M")),
            styles::text_muted(),
        ),
    ])
}

fn artifact_card(id: MessageId, title: &str, state: &AppState, icons: IconSet) -> Row<'static> {
    let active = state.active_artifact == Some(id);
    let style = if active {
        styles::accent_bold()
    } else {
        styles::text_secondary()
    };
    Row {
        line: Line::from(Span::styled(
            format!("  {} {title}", icons.copy()),
            style,
        )),
        region: Some(Region::ArtifactCard(id)),
    }
}
