//! Terminal setup and restoration

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use pagesmith_core::prelude::*;

/// Install a panic hook that restores the terminal
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = crossterm::execute!(std::io::stdout(), DisableMouseCapture);
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Enable mouse reporting for the lifetime of the TUI
pub fn enable_mouse() -> Result<()> {
    crossterm::execute!(std::io::stdout(), EnableMouseCapture)
        .map_err(|e| Error::terminal(format!("enable mouse capture: {e}")))
}

pub fn disable_mouse() -> Result<()> {
    crossterm::execute!(std::io::stdout(), DisableMouseCapture)
        .map_err(|e| Error::terminal(format!("disable mouse capture: {e}")))
}
