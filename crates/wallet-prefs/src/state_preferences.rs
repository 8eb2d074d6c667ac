//! Persisted subset of the wallet state
//!
//! The initial wallet state takes these values from durable storage; the
//! rest of the state always starts from fixed defaults.

use crate::keys;
use crate::{PreferenceError, PreferenceStore};

pub const DEFAULT_MAX_DISPLAY_DIGITS: i64 = 2;
pub const DEFAULT_CURRENCY_CODE: &str = "USD";

/// Typed view over the preferences that seed the initial state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatePreferences {
    pub alt_currency_displayed: bool,
    pub touch_id_enabled: bool,
    pub max_display_digits: i64,
    pub push_notifications_enabled: bool,
    pub default_currency_code: String,
}

impl Default for StatePreferences {
    fn default() -> Self {
        Self {
            alt_currency_displayed: false,
            touch_id_enabled: false,
            max_display_digits: DEFAULT_MAX_DISPLAY_DIGITS,
            push_notifications_enabled: false,
            default_currency_code: DEFAULT_CURRENCY_CODE.to_string(),
        }
    }
}

impl StatePreferences {
    /// Read every persisted value
    ///
    /// Keys are read independently: a missing or unreadable key takes its
    /// default without affecting the others.
    pub fn load(store: &dyn PreferenceStore) -> Self {
        let defaults = Self::default();
        Self {
            alt_currency_displayed: or_default(
                keys::ALT_CURRENCY_DISPLAYED,
                store.get_bool(keys::ALT_CURRENCY_DISPLAYED),
                defaults.alt_currency_displayed,
            ),
            touch_id_enabled: or_default(
                keys::TOUCH_ID_ENABLED,
                store.get_bool(keys::TOUCH_ID_ENABLED),
                defaults.touch_id_enabled,
            ),
            max_display_digits: or_default(
                keys::MAX_DISPLAY_DIGITS,
                store.get_int(keys::MAX_DISPLAY_DIGITS),
                defaults.max_display_digits,
            ),
            push_notifications_enabled: or_default(
                keys::PUSH_TOKEN,
                store.get_string(keys::PUSH_TOKEN).map(|token| token.map(|_| true)),
                defaults.push_notifications_enabled,
            ),
            default_currency_code: or_default(
                keys::DEFAULT_CURRENCY,
                store.get_string(keys::DEFAULT_CURRENCY),
                defaults.default_currency_code,
            ),
        }
    }
}

fn or_default<T>(key: &str, value: Result<Option<T>, PreferenceError>, default: T) -> T {
    match value {
        Ok(value) => value.unwrap_or(default),
        Err(e) => {
            log::warn!("Ignoring unreadable preference {}: {}", key, e);
            default
        }
    }
}
