//! Application configuration model.
//!
//! Stored as TOML at `<config_dir>/casedesk/config.toml`. Every field has a
//! default so a partial or empty file is valid.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::preference::Theme;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DeskConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset
    pub log_level: String,
    /// Overrides the platform data directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    /// Theme reported until the user picks one
    pub default_theme: Theme,
    /// Rows per page in the case table
    pub page_size: usize,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            data_dir: None,
            default_theme: Theme::Light,
            page_size: 10,
        }
    }
}

impl DeskConfig {
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(DeskConfig::from_toml("").unwrap(), DeskConfig::default());
    }

    #[test]
    fn test_partial_file() {
        let config = DeskConfig::from_toml("default_theme = \"dark\"\npage_size = 3\n").unwrap();
        assert_eq!(config.default_theme, Theme::Dark);
        assert_eq!(config.page_size, 3);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_invalid_theme_is_serialization_error() {
        let err = DeskConfig::from_toml("default_theme = \"sepia\"").unwrap_err();
        assert!(err.is_serialization());
    }

    #[test]
    fn test_to_toml_reads_back() {
        let config = DeskConfig {
            data_dir: Some(PathBuf::from("/tmp/casedesk")),
            ..DeskConfig::default()
        };
        let text = config.to_toml().unwrap();
        assert!(text.contains("log_level = \"info\""));
        assert_eq!(DeskConfig::from_toml(&text).unwrap(), config);
    }
}
