//! Page Smith - A terminal UI for an AI website-builder chat
//!
//! This is the binary entry point. All logic lives in the library crates.

use clap::Parser;
use pagesmith_app::config;
use pagesmith_core::prelude::*;
use pagesmith_core::types::GeminiModel;

/// Page Smith - chat with Gemini and iterate on a generated web page
#[derive(Parser, Debug)]
#[command(name = "pagesmith")]
#[command(about = "A terminal UI for an AI website-builder chat", long_about = None)]
struct Args {
    /// Model to start with (pro or flash); overrides the config file
    #[arg(long, value_name = "MODEL")]
    model: Option<String>,

    /// Force UI demo mode, ignoring any configured API key
    #[arg(long)]
    demo: bool,
}

fn parse_model(name: &str) -> Result<GeminiModel> {
    match name.to_ascii_lowercase().as_str() {
        "pro" => Ok(GeminiModel::Pro),
        "flash" => Ok(GeminiModel::Flash),
        other => Err(Error::config(format!(
            "unknown model '{other}', expected 'pro' or 'flash'"
        ))),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    pagesmith_core::logging::init()?;

    let cwd = std::env::current_dir()?;
    let mut settings = config::load_settings(&cwd);

    if let Some(model) = args.model.as_deref() {
        settings.gemini.model = parse_model(model)?;
    }
    if args.demo {
        settings.gemini.api_key = None;
    }

    info!(model = settings.gemini.model.api_name(), "Starting Page Smith");
    pagesmith_tui::run(settings).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_model_accepts_both_cases() {
        assert_eq!(parse_model("pro").unwrap(), GeminiModel::Pro);
        assert_eq!(parse_model("Flash").unwrap(), GeminiModel::Flash);
    }

    #[test]
    fn test_parse_model_rejects_unknown() {
        assert!(parse_model("ultra").is_err());
    }
}
