//! Configuration file parsing for Page Smith
//!
//! Supports:
//! - `.pagesmith/config.toml` - Project-local settings
//! - `~/.config/pagesmith/config.toml` - User settings
//! - `GEMINI_API_KEY` environment override

pub mod settings;
pub mod types;

pub use settings::{load_settings, settings_path};
pub use types::{GeminiSettings, Settings, UiSettings};
