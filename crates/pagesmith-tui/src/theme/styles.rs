//! Semantic style builders.

use pagesmith_core::highlight::SpanKind;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// "Black on Cyan" - used for focused+selected items across widgets
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

pub fn popup_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_inactive())
        .style(Style::default().bg(palette::POPUP_BG))
}

/// Style for one highlighter span kind
pub fn syntax(kind: SpanKind) -> Style {
    match kind {
        SpanKind::Plain => text_primary(),
        SpanKind::Comment => Style::default()
            .fg(palette::SYN_COMMENT)
            .add_modifier(Modifier::ITALIC),
        SpanKind::Str => Style::default().fg(palette::SYN_STRING),
        SpanKind::Keyword => Style::default().fg(palette::SYN_KEYWORD),
        SpanKind::Type => Style::default().fg(palette::SYN_TYPE),
        SpanKind::Tag => Style::default().fg(palette::SYN_TAG),
        SpanKind::Attr => Style::default().fg(palette::SYN_ATTR),
        SpanKind::Brace => Style::default().fg(palette::SYN_BRACE),
    }
}
