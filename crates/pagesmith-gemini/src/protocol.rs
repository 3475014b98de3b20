//! Wire types for the Gemini `generateContent` REST API

use serde::{Deserialize, Serialize};

use pagesmith_core::types::Role;

/// One text part of a content turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

impl Part {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// One conversation turn as the API expects it: `{role, parts: [{text}]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

impl Content {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role: role.as_str().to_string(),
            parts: vec![Part::new(text)],
        }
    }
}

/// Prior conversation turn supplied by the caller (role + content only)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryTurn {
    pub role: Role,
    pub text: String,
}

impl HistoryTurn {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }
}

/// Request body for `models/{model}:generateContent`
#[derive(Debug, Clone, Serialize)]
pub(crate) struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// Build the ordered request: full history first, then the new user turn.
    pub fn from_history(history: &[HistoryTurn], prompt: &str) -> Self {
        let mut contents: Vec<Content> = history
            .iter()
            .map(|turn| Content::new(turn.role, turn.text.clone()))
            .collect();
        contents.push(Content::new(Role::User, prompt));
        Self { contents }
    }
}

/// Response body (only the fields we read)
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub error: Option<ApiError>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// Error object the API returns in place of candidates
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiError {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, if any
    pub fn first_text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        if content.parts.is_empty() {
            return None;
        }
        let text: String = content
            .parts
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("");
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_orders_history_before_prompt() {
        let history = vec![
            HistoryTurn::new(Role::Model, "Here is the initial page."),
            HistoryTurn::new(Role::User, "make it blue"),
        ];
        let req = GenerateContentRequest::from_history(&history, "now make it red");

        assert_eq!(req.contents.len(), 3);
        assert_eq!(req.contents[0].role, "model");
        assert_eq!(req.contents[1].role, "user");
        assert_eq!(req.contents[2].role, "user");
        assert_eq!(req.contents[2].parts[0].text, "now make it red");
    }

    #[test]
    fn test_request_serializes_to_expected_shape() {
        let req = GenerateContentRequest::from_history(&[], "hello");
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "contents": [
                    { "role": "user", "parts": [{ "text": "hello" }] }
                ]
            })
        );
    }

    #[test]
    fn test_response_first_text() {
        let json = r#"{
            "candidates": [
                { "content": { "parts": [{ "text": "Hello " }, { "text": "world" }] } }
            ]
        }"#;
        let resp: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.first_text().as_deref(), Some("Hello world"));
    }

    #[test]
    fn test_response_without_candidates() {
        let resp: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.first_text().is_none());
        assert!(resp.error.is_none());
    }

    #[test]
    fn test_response_api_error() {
        let json = r#"{ "error": { "code": 429, "message": "quota" } }"#;
        let resp: GenerateContentResponse = serde_json::from_str(json).unwrap();
        let err = resp.error.unwrap();
        assert_eq!(err.code, 429);
        assert_eq!(err.message, "quota");
    }
}
