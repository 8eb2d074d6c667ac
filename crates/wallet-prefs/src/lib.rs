//! Preference storage and configuration for wallet-store
//!
//! This crate provides:
//! - Config and data directory paths
//! - Application configuration (AppConfig) loaded from TOML
//! - Key/value preference storage (in-memory and file-backed)
//! - The typed subset of preferences the initial wallet state is built from

pub mod app_config;
pub mod error;
pub mod keys;
pub mod paths;
pub mod preferences;
pub mod state_preferences;

pub use app_config::AppConfig;
pub use error::PreferenceError;
pub use paths::{config_dir, default_preferences_path};
pub use preferences::{FilePreferences, MemoryPreferences, PreferenceStore, PreferenceValue};
pub use state_preferences::StatePreferences;
