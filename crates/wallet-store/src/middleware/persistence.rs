//! Persistence Middleware
//!
//! Writes user preferences to durable storage before the matching reducer
//! runs. Writes are best effort: a failure is logged and the action still
//! reaches the reducer.

use wallet_prefs::{keys, PreferenceStore, PreferenceValue};

use crate::actions::{Action, CurrencyAction, SettingsAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

pub struct PersistenceMiddleware {
    preferences: Box<dyn PreferenceStore>,
}

impl PersistenceMiddleware {
    pub fn new(preferences: Box<dyn PreferenceStore>) -> Self {
        Self { preferences }
    }

    fn write(&mut self, key: &str, value: PreferenceValue) {
        match self.preferences.set(key, value) {
            Ok(()) => log::debug!("PersistenceMiddleware: saved {}", key),
            Err(e) => log::warn!("PersistenceMiddleware: failed to save {}: {}", key, e),
        }
    }
}

impl Middleware for PersistenceMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, _dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Currency(CurrencyAction::ToggleDisplay) => {
                // The reducer has not flipped the flag yet
                self.write(
                    keys::ALT_CURRENCY_DISPLAYED,
                    PreferenceValue::Bool(!state.alt_currency_displayed),
                );
            }
            Action::Currency(CurrencyAction::SetDefault(code)) => {
                self.write(keys::DEFAULT_CURRENCY, PreferenceValue::Text(code.clone()));
            }
            Action::Settings(SettingsAction::SetTouchIdEnabled(enabled)) => {
                self.write(keys::TOUCH_ID_ENABLED, PreferenceValue::Bool(*enabled));
            }
            Action::Settings(SettingsAction::SetMaxDisplayDigits(digits)) => {
                self.write(
                    keys::MAX_DISPLAY_DIGITS,
                    PreferenceValue::Int(i64::from(*digits)),
                );
            }
            _ => {}
        }
        true
    }
}
