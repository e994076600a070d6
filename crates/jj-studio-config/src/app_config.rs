//! Application configuration
//!
//! Configuration loaded from `.jj-studio.toml`. Every field is optional in the
//! file and falls back to its default.

use serde::{Deserialize, Serialize};

/// Application configuration loaded from .jj-studio.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Executable used for all repository operations
    #[serde(default = "default_jj_command")]
    pub jj_command: String,

    /// Maximum number of changes fetched from `jj log`
    #[serde(default = "default_change_limit")]
    pub change_limit: usize,

    /// Title of the directory picker popup
    #[serde(default = "default_picker_title")]
    pub picker_title: String,

    /// chrono format string used to render change timestamps in local time
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,

    /// Drop results of a selection or load that was superseded by a newer one.
    /// Off by default: the most recently completed request wins.
    #[serde(default)]
    pub discard_stale_results: bool,
}

fn default_jj_command() -> String {
    "jj".to_string()
}

fn default_change_limit() -> usize {
    100
}

fn default_picker_title() -> String {
    "Select JJ Repository Directory".to_string()
}

fn default_timestamp_format() -> String {
    "%Y-%m-%d %H:%M:%S".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            jj_command: default_jj_command(),
            change_limit: default_change_limit(),
            picker_title: default_picker_title(),
            timestamp_format: default_timestamp_format(),
            discard_stale_results: false,
        }
    }
}

impl AppConfig {
    /// Load config from the first config file found, or use defaults
    pub fn load() -> Self {
        match crate::load_config_file() {
            Some(content) => Self::parse(&content),
            None => {
                log::debug!("Using default app config");
                Self::default()
            }
        }
    }

    /// Parse config file content, falling back to defaults on invalid TOML
    pub fn parse(content: &str) -> Self {
        match toml::from_str(content) {
            Ok(config) => {
                log::info!("Loaded app config from file");
                config
            }
            Err(e) => {
                log::warn!("Failed to parse config file: {}", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.jj_command, "jj");
        assert_eq!(config.change_limit, 100);
        assert_eq!(config.picker_title, "Select JJ Repository Directory");
        assert!(!config.timestamp_format.is_empty());
        assert!(!config.discard_stale_results);
    }

    #[test]
    fn test_config_deserialize_partial() {
        let toml = r#"
            jj_command = "/opt/jj/bin/jj"
            change_limit = 25
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.jj_command, "/opt/jj/bin/jj");
        assert_eq!(config.change_limit, 25);
        // Other fields should use defaults
        assert_eq!(config.picker_title, "Select JJ Repository Directory");
        assert!(!config.discard_stale_results);
    }

    #[test]
    fn test_stale_result_policy() {
        let config = AppConfig::parse("discard_stale_results = true");
        assert!(config.discard_stale_results);
    }

    #[test]
    fn test_invalid_toml_falls_back_to_defaults() {
        let config = AppConfig::parse("change_limit = \"many\"");
        assert_eq!(config, AppConfig::default());
    }
}
