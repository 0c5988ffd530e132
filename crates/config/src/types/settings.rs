//! Persisted user settings.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::theme::ColorTheme;

/// User preferences read from the settings file and environment.
///
/// Missing fields fall back to defaults so older files keep loading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Colour theme for the TUI.
    pub theme: ColorTheme,
    /// Directory for TUI log files (`None` = `logs` under the working directory).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_settings_parse_theme() {
        let settings: Settings = serde_json::from_str(r#"{"theme":"high_contrast"}"#).unwrap();
        assert_eq!(settings.theme, ColorTheme::HighContrast);
        assert!(settings.log_dir.is_none());
    }

    #[test]
    fn test_settings_skip_empty_log_dir() {
        let json = serde_json::to_string(&Settings::default()).unwrap();
        assert_eq!(json, r#"{"theme":"default"}"#);
    }
}
