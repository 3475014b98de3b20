//! Settings loader for config.toml

use std::path::{Path, PathBuf};

use pagesmith_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const PAGESMITH_DIR: &str = ".pagesmith";

/// Path the settings were (or would be) loaded from: a project-local
/// `.pagesmith/config.toml` wins over the user config directory.
pub fn settings_path(project_path: &Path) -> PathBuf {
    let local = project_path.join(PAGESMITH_DIR).join(CONFIG_FILENAME);
    if local.exists() {
        return local;
    }
    dirs::config_dir()
        .map(|d| d.join("pagesmith").join(CONFIG_FILENAME))
        .unwrap_or(local)
}

/// Load settings, falling back to defaults on any problem.
///
/// A missing file is normal (demo mode); a malformed file is logged and
/// ignored. `GEMINI_API_KEY` in the environment overrides the file.
pub fn load_settings(project_path: &Path) -> Settings {
    let config_path = settings_path(project_path);

    let mut settings = if config_path.exists() {
        match std::fs::read_to_string(&config_path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(settings) => {
                    debug!("Loaded settings from {:?}", config_path);
                    settings
                }
                Err(e) => {
                    warn!("Failed to parse {:?}: {}", config_path, e);
                    Settings::default()
                }
            },
            Err(e) => {
                warn!("Failed to read {:?}: {}", config_path, e);
                Settings::default()
            }
        }
    } else {
        debug!("No config file at {:?}, using defaults", config_path);
        Settings::default()
    };

    if let Ok(key) = std::env::var("GEMINI_API_KEY") {
        if !key.trim().is_empty() {
            settings.gemini.api_key = Some(key);
        }
    }

    settings
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagesmith_core::types::GeminiModel;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = load_settings(dir.path());
        assert_eq!(settings.gemini.model, GeminiModel::Pro);
    }

    #[test]
    fn test_local_config_loaded() {
        let dir = TempDir::new().unwrap();
        let config_dir = dir.path().join(PAGESMITH_DIR);
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(
            config_dir.join(CONFIG_FILENAME),
            "[gemini]\nmodel = \"flash\"\n",
        )
        .unwrap();

        let settings = load_settings(dir.path());
        assert_eq!(settings.gemini.model, GeminiModel::Flash);
    }

    #[test]
    fn test_malformed_config_falls_back() {
        let dir = TempDir::new().unwrap();
        let config_dir = dir.path().join(PAGESMITH_DIR);
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(config_dir.join(CONFIG_FILENAME), "not valid toml [[").unwrap();

        let settings = load_settings(dir.path());
        assert_eq!(settings.gemini.model, GeminiModel::Pro);
    }
}
