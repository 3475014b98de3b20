//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, error};

use crate::handler::UpdateAction;
use crate::message::Message;
use pagesmith_core::Error;
use pagesmith_gemini::GeminiClient;

/// Execute an action by spawning a background task
pub fn handle_action(action: UpdateAction, msg_tx: mpsc::Sender<Message>, client: Arc<GeminiClient>) {
    match action {
        UpdateAction::SendPrompt {
            prompt,
            model,
            history,
        } => {
            tokio::spawn(async move {
                let text = client.send_prompt(&prompt, model, &history).await;
                if msg_tx
                    .send(Message::PromptResponse { text, model })
                    .await
                    .is_err()
                {
                    debug!("Message channel closed before prompt response delivery");
                }
            });
        }

        UpdateAction::CopyCode { message_id, text } => {
            tokio::spawn(async move {
                // arboard is blocking; keep it off the async runtime.
                let written = tokio::task::spawn_blocking(move || {
                    arboard::Clipboard::new()
                        .and_then(|mut cb| cb.set_text(text))
                        .map_err(|e| Error::clipboard(e.to_string()))
                })
                .await;

                match written {
                    Ok(Ok(())) => {
                        let _ = msg_tx.send(Message::CodeCopied { message_id }).await;
                    }
                    Ok(Err(err)) => {
                        // Feedback stays off; the failure is log-only.
                        error!("{err}");
                    }
                    Err(e) => {
                        error!("Clipboard task panicked: {}", e);
                    }
                }
            });
        }

        UpdateAction::ScheduleFeedback {
            message_id,
            action,
            generation,
            delay,
        } => {
            tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                let _ = msg_tx
                    .send(Message::FeedbackExpired {
                        message_id,
                        action,
                        generation,
                    })
                    .await;
            });
        }
    }
}
