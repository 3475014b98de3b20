//! pagesmith-tui - Terminal UI for Page Smith
//!
//! This crate provides the ratatui-based terminal interface: rendering,
//! event polling (keyboard and mouse), and the main loop that drives the
//! update function from pagesmith-app.

pub mod event;
pub mod hit;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

// Re-export main entry point
pub use runner::run;
