//! Centralized theme system for the TUI.
//!
//! This module provides:
//! - `palette` — Raw color constants
//! - `styles` — Semantic style builder functions
//! - `icons` — Icon constants with ASCII fallbacks

pub mod icons;
pub mod palette;
pub mod styles;
