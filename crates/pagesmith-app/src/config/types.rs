//! Configuration types for Page Smith

use pagesmith_core::types::GeminiModel;
use serde::{Deserialize, Serialize};

/// Global application settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Settings {
    #[serde(default)]
    pub gemini: GeminiSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Gemini API settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct GeminiSettings {
    /// API key; absent means demo mode. `GEMINI_API_KEY` overrides.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model selected at startup
    #[serde(default)]
    pub model: GeminiModel,
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct UiSettings {
    /// Draw unicode icons in the header and toolbar
    #[serde(default = "default_icons")]
    pub icons: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { icons: default_icons() }
    }
}

fn default_icons() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.gemini.api_key.is_none());
        assert_eq!(settings.gemini.model, GeminiModel::Pro);
        assert!(settings.ui.icons);
    }

    #[test]
    fn test_parse_partial_toml() {
        let settings: Settings = toml::from_str(
            r#"
            [gemini]
            model = "flash"
            "#,
        )
        .unwrap();
        assert_eq!(settings.gemini.model, GeminiModel::Flash);
        assert!(settings.gemini.api_key.is_none());
        assert!(settings.ui.icons);
    }

    #[test]
    fn test_parse_full_toml() {
        let settings: Settings = toml::from_str(
            r#"
            [gemini]
            api_key = "abc123"
            model = "pro"

            [ui]
            icons = false
            "#,
        )
        .unwrap();
        assert_eq!(settings.gemini.api_key.as_deref(), Some("abc123"));
        assert!(!settings.ui.icons);
    }
}
