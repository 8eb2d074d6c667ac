//! Preference store errors

use thiserror::Error;

/// Errors raised by a [`crate::PreferenceStore`]
#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("failed to access preference file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse preference file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize preferences: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("preference `{key}` holds a {found} value, expected {expected}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },
}
