//! Application configuration
//!
//! Configuration loaded from .wallet-store.toml, looked up in the current
//! directory first and then in the home directory.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

const CONFIG_FILE: &str = ".wallet-store.toml";

/// Application configuration loaded from .wallet-store.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Explicit location of the preference file (defaults to the config directory)
    #[serde(default)]
    pub preferences_file: Option<String>,

    /// Forward telemetry events to the log
    #[serde(default = "default_telemetry_enabled")]
    pub telemetry_enabled: bool,

    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_telemetry_enabled() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            preferences_file: None,
            telemetry_enabled: default_telemetry_enabled(),
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Load config from the first readable candidate file, or use defaults
    ///
    /// A file that exists but fails to parse is reported and skipped.
    pub fn load() -> Self {
        for path in config_candidates() {
            let Ok(content) = std::fs::read_to_string(&path) else {
                continue;
            };
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from {}", path.display());
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file {}: {}", path.display(), e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Resolve where preferences are persisted
    pub fn preferences_path(&self) -> anyhow::Result<PathBuf> {
        match &self.preferences_file {
            Some(path) => Ok(PathBuf::from(path)),
            None => crate::paths::default_preferences_path(),
        }
    }
}

fn config_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(CONFIG_FILE)];
    if let Some(home) = env::var_os("HOME") {
        candidates.push(PathBuf::from(home).join(CONFIG_FILE));
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.preferences_file.is_none());
        assert!(config.telemetry_enabled);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            preferences_file = "/tmp/wallet-prefs.toml"
            telemetry_enabled = false
            log_level = "debug"
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(
            config.preferences_file.as_deref(),
            Some("/tmp/wallet-prefs.toml")
        );
        assert!(!config.telemetry_enabled);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_config_deserialize_partial() {
        let toml = r#"
            log_level = "trace"
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.log_level, "trace");
        // Other fields should use defaults
        assert!(config.telemetry_enabled);
        assert!(config.preferences_file.is_none());
    }

    #[test]
    fn test_local_file_is_searched_first() {
        let candidates = config_candidates();
        assert_eq!(candidates[0], PathBuf::from(CONFIG_FILE));
    }

    #[test]
    fn test_explicit_preferences_path() {
        let config = AppConfig {
            preferences_file: Some("/var/lib/wallet/prefs.toml".to_string()),
            ..AppConfig::default()
        };
        assert_eq!(
            config.preferences_path().unwrap(),
            PathBuf::from("/var/lib/wallet/prefs.toml")
        );
    }
}
