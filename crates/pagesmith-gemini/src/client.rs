//! Gemini client with demo mode and swallow-to-fallback error handling

use std::time::Duration;

use pagesmith_core::prelude::*;
use pagesmith_core::types::GeminiModel;

use crate::protocol::{GenerateContentRequest, GenerateContentResponse, HistoryTurn};

/// Fixed delay before the canned demo reply, mimicking a round trip
pub const DEMO_DELAY_MS: u64 = 1500;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

const FALLBACK_REPLY: &str = "Sorry, I encountered an error connecting to the AI service.";
const EMPTY_REPLY: &str = "I couldn't generate a response.";

/// Client for the Gemini `generateContent` endpoint.
///
/// Constructed once at startup and shared by reference; `reqwest::Client`
/// pools connections internally.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: Option<String>,
}

impl GeminiClient {
    /// Create a client. `api_key = None` puts the client in demo mode:
    /// every prompt gets a canned reply after a fixed delay, no network.
    pub fn new(api_key: Option<String>) -> Self {
        let api_key = api_key.filter(|k| !k.trim().is_empty());
        Self {
            http: reqwest::Client::new(),
            api_key,
        }
    }

    /// Whether the client will answer from the canned simulation
    pub fn is_demo(&self) -> bool {
        self.api_key.is_none()
    }

    /// Send a prompt with prior conversation history.
    ///
    /// Never fails: transport and API errors are logged and collapsed to a
    /// fixed fallback string so the conversation always gets a reply.
    pub async fn send_prompt(
        &self,
        prompt: &str,
        model: GeminiModel,
        history: &[HistoryTurn],
    ) -> String {
        let Some(api_key) = self.api_key.as_deref() else {
            return Self::demo_reply(prompt).await;
        };

        match self.generate(api_key, prompt, model, history).await {
            Ok(text) => text,
            Err(err) => {
                error!("Gemini request failed: {err}");
                FALLBACK_REPLY.to_string()
            }
        }
    }

    /// Canned reply used when no credential is configured
    async fn demo_reply(prompt: &str) -> String {
        tokio::time::sleep(Duration::from_millis(DEMO_DELAY_MS)).await;
        format!(
            "I'm in UI Demo mode because no API key was found. I would normally \
             process your request: \"{prompt}\". The UI is fully interactive!"
        )
    }

    /// Typed request path; collapsed to the fallback string by the caller.
    async fn generate(
        &self,
        api_key: &str,
        prompt: &str,
        model: GeminiModel,
        history: &[HistoryTurn],
    ) -> Result<String> {
        let url = format!("{API_BASE}/{}:generateContent", model.api_name());
        let body = GenerateContentRequest::from_history(history, prompt);

        debug!(
            model = model.api_name(),
            turns = body.contents.len(),
            "sending generateContent request"
        );

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::http(e.to_string()))?;

        let status = response.status();
        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| Error::http(format!("decode failed: {e}")))?;

        if let Some(api_error) = parsed.error {
            return Err(Error::gemini(format!(
                "{} ({}, http {})",
                api_error.message, api_error.code, status
            )));
        }
        if !status.is_success() {
            return Err(Error::gemini(format!("http status {status}")));
        }

        // An empty candidate is not an error; the UI still shows a reply.
        Ok(parsed.first_text().unwrap_or_else(|| EMPTY_REPLY.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[test]
    fn test_blank_key_means_demo() {
        assert!(GeminiClient::new(None).is_demo());
        assert!(GeminiClient::new(Some("".to_string())).is_demo());
        assert!(GeminiClient::new(Some("   ".to_string())).is_demo());
        assert!(!GeminiClient::new(Some("key".to_string())).is_demo());
    }

    #[tokio::test(start_paused = true)]
    async fn test_demo_reply_embeds_prompt_after_delay() {
        let client = GeminiClient::new(None);
        let started = Instant::now();

        let reply = client
            .send_prompt("make it blue", GeminiModel::Flash, &[])
            .await;

        // Paused-clock runtime auto-advances through the sleep; the virtual
        // elapsed time still reflects the fixed non-zero delay.
        assert!(started.elapsed() >= Duration::from_millis(DEMO_DELAY_MS));
        assert!(reply.contains("make it blue"));
        assert!(reply.contains("Demo mode"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_demo_reply_ignores_history() {
        use pagesmith_core::types::Role;

        let client = GeminiClient::new(None);
        let history = vec![HistoryTurn::new(Role::User, "earlier turn")];
        let reply = client
            .send_prompt("second prompt", GeminiModel::Pro, &history)
            .await;
        assert!(reply.contains("second prompt"));
    }
}
