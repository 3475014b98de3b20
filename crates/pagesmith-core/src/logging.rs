//! File logging setup.
//!
//! The TUI owns the terminal, so log output goes to a daily-rotated file
//! under the platform data directory instead of stdout. Level filtering
//! comes from the `PAGESMITH_LOG` environment variable (`tracing`
//! directive syntax, e.g. `PAGESMITH_LOG=pagesmith_app=trace`).

use std::path::PathBuf;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Install the global tracing subscriber. Call once, before any UI setup,
/// so terminal init failures still get logged.
pub fn init() -> Result<()> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let filter = EnvFilter::try_from_env("PAGESMITH_LOG")
        .unwrap_or_else(|_| EnvFilter::new("pagesmith=info,warn"));

    let file_layer = fmt::layer()
        .with_writer(RollingFileAppender::new(
            Rotation::DAILY,
            &log_dir,
            "pagesmith.log",
        ))
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true)
        .with_timer(fmt::time::ChronoLocal::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ));

    tracing_subscriber::registry().with(filter).with(file_layer).init();

    tracing::info!(dir = %log_dir.display(), "session log opened");
    Ok(())
}

fn log_directory() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pagesmith")
        .join("logs")
}
