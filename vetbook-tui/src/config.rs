//! TUI configuration: TOML file with environment overrides.

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::TuiError;

/// Color scheme selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TuiConfig {
    /// Base URL of the playbook API.
    pub api_base_url: String,

    /// Per-request timeout for API calls. There is no retry; a timeout
    /// simply hands the call to the local fallback.
    pub request_timeout_ms: u64,

    /// Root directory of the local fallback mirror.
    pub fallback_dir: PathBuf,

    pub theme: ThemeMode,
}

/// Optional on-disk settings; anything absent keeps its default.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    api_base_url: Option<String>,
    request_timeout_ms: Option<u64>,
    fallback_dir: Option<PathBuf>,
    theme: Option<ThemeMode>,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:3000".to_string(),
            request_timeout_ms: 5000,
            fallback_dir: PathBuf::from(".vetbook"),
            theme: ThemeMode::Dark,
        }
    }
}

impl TuiConfig {
    /// Load configuration.
    ///
    /// Reads the TOML file named by `VETBOOK_TUI_CONFIG` (default
    /// `vetbook-tui.toml`, missing file is fine), then applies
    /// `VETBOOK_API_URL` and `VETBOOK_FALLBACK_DIR` overrides.
    pub fn load() -> Result<Self, TuiError> {
        let path = std::env::var("VETBOOK_TUI_CONFIG")
            .unwrap_or_else(|_| "vetbook-tui.toml".to_string());

        let mut config = Self::default();

        if let Ok(contents) = std::fs::read_to_string(&path) {
            let file: FileConfig = toml::from_str(&contents)
                .map_err(|err| TuiError::Config(format!("{path}: {err}")))?;
            if let Some(url) = file.api_base_url {
                config.api_base_url = url;
            }
            if let Some(timeout) = file.request_timeout_ms {
                config.request_timeout_ms = timeout;
            }
            if let Some(dir) = file.fallback_dir {
                config.fallback_dir = dir;
            }
            if let Some(theme) = file.theme {
                config.theme = theme;
            }
        }

        if let Ok(url) = std::env::var("VETBOOK_API_URL") {
            config.api_base_url = url;
        }
        if let Ok(dir) = std::env::var("VETBOOK_FALLBACK_DIR") {
            config.fallback_dir = PathBuf::from(dir);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TuiConfig::default();
        assert_eq!(config.api_base_url, "http://127.0.0.1:3000");
        assert_eq!(config.theme, ThemeMode::Dark);
    }

    #[test]
    fn test_file_config_parses_partial_toml() {
        let file: FileConfig =
            toml::from_str("api_base_url = \"http://10.0.0.2:9000\"\ntheme = \"light\"").unwrap();
        assert_eq!(file.api_base_url.as_deref(), Some("http://10.0.0.2:9000"));
        assert_eq!(file.theme, Some(ThemeMode::Light));
        assert!(file.fallback_dir.is_none());
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
    }
}
