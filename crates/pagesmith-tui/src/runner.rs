//! Main loop: terminal lifecycle, event pump, message processing

use std::sync::Arc;

use pagesmith_app::config::Settings;
use pagesmith_app::message::Message;
use pagesmith_app::{actions, handler, AppState};
use pagesmith_core::prelude::*;
use pagesmith_gemini::GeminiClient;
use ratatui::DefaultTerminal;
use tokio::sync::mpsc;

use crate::event::{self, DragState};
use crate::hit::HitMap;
use crate::{render, terminal};

/// Run the TUI until the user quits
pub async fn run(settings: Settings) -> Result<()> {
    terminal::install_panic_hook();
    let mut term = ratatui::init();
    terminal::enable_mouse()?;

    let result = run_loop(&mut term, settings).await;

    let _ = terminal::disable_mouse();
    ratatui::restore();
    result
}

async fn run_loop(terminal: &mut DefaultTerminal, settings: Settings) -> Result<()> {
    let (msg_tx, mut msg_rx) = mpsc::channel::<Message>(256);
    let client = Arc::new(GeminiClient::new(settings.gemini.api_key.clone()));
    let demo_mode = client.is_demo();
    if demo_mode {
        info!("No API key configured, running in UI demo mode");
    }

    let mut state = AppState::new(settings);
    let mut hits = HitMap::default();
    let mut drag = DragState::default();

    loop {
        terminal
            .draw(|frame| render::view(frame, &mut state, demo_mode, &mut hits))
            .map_err(|e| Error::terminal(format!("draw failed: {e}")))?;

        // One terminal event (or a tick), then everything the background
        // tasks delivered since the last frame.
        if let Some(message) = event::poll(&hits, &mut drag)? {
            process_message(&mut state, message, &msg_tx, &client);
        }
        while let Ok(message) = msg_rx.try_recv() {
            process_message(&mut state, message, &msg_tx, &client);
        }

        if state.should_quit {
            info!("Quit requested, leaving main loop");
            break;
        }
    }
    Ok(())
}

/// Run one message through update, chasing follow-up messages and
/// dispatching any side-effect actions.
fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    client: &Arc<GeminiClient>,
) {
    let mut next = Some(message);
    while let Some(message) = next.take() {
        let result = handler::update(state, message);
        if let Some(action) = result.action {
            actions::handle_action(action, msg_tx.clone(), client.clone());
        }
        next = result.message;
    }
}
