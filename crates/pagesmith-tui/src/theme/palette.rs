//! Color palette for the builder theme.

#![allow(dead_code)]

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black;
pub const CARD_BG: Color = Color::Black;
pub const POPUP_BG: Color = Color::Rgb(28, 33, 43);

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;
pub const ACCENT_DIM: Color = Color::DarkGray;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const TEXT_BRIGHT: Color = Color::White;
pub const CONTRAST_FG: Color = Color::Black;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;

// --- Chat roles ---
pub const ROLE_USER: Color = Color::Cyan;
pub const ROLE_MODEL: Color = Color::Magenta;

// --- Syntax highlighting ---
pub const SYN_COMMENT: Color = Color::DarkGray;
pub const SYN_STRING: Color = Color::Green;
pub const SYN_KEYWORD: Color = Color::Magenta;
pub const SYN_TYPE: Color = Color::Yellow;
pub const SYN_TAG: Color = Color::Blue;
pub const SYN_ATTR: Color = Color::Cyan;
pub const SYN_BRACE: Color = Color::LightYellow;
