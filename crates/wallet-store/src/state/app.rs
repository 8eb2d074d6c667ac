//! Application State

use serde::Serialize;
use wallet_prefs::StatePreferences;

use super::{AlertKind, Fees, Rate, RootModal, WalletState};

pub const DEFAULT_PIN_LENGTH: usize = 6;

/// One immutable snapshot of everything the UI can observe
///
/// The store replaces the whole snapshot on every action; nothing outside a
/// reducer ever mutates one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppState {
    pub start_flow_visible: bool,
    pub login_required: bool,
    pub root_modal: RootModal,
    pub wallet: WalletState,
    /// Show amounts in the local currency first
    pub alt_currency_displayed: bool,
    pub alert: Option<AlertKind>,
    pub touch_id_enabled: bool,
    pub prompting_touch_id: bool,
    pub push_notifications_enabled: bool,
    pub recommend_rescan: bool,
    pub loading_transactions: bool,
    pub max_display_digits: u32,
    pub pin_length: usize,
    pub fees: Fees,
    pub default_currency_code: String,
    pub current_rate: Option<Rate>,
    pub rates: Vec<Rate>,
}

impl AppState {
    /// Build the process-start snapshot from persisted preferences
    pub fn initial(prefs: &StatePreferences) -> Self {
        let max_display_digits = u32::try_from(prefs.max_display_digits).unwrap_or_else(|_| {
            log::warn!(
                "Ignoring out of range max display digits: {}",
                prefs.max_display_digits
            );
            wallet_prefs::state_preferences::DEFAULT_MAX_DISPLAY_DIGITS as u32
        });

        Self {
            start_flow_visible: false,
            login_required: true,
            root_modal: RootModal::None,
            wallet: WalletState::default(),
            alt_currency_displayed: prefs.alt_currency_displayed,
            alert: None,
            touch_id_enabled: prefs.touch_id_enabled,
            prompting_touch_id: false,
            push_notifications_enabled: prefs.push_notifications_enabled,
            recommend_rescan: false,
            loading_transactions: false,
            max_display_digits,
            pin_length: DEFAULT_PIN_LENGTH,
            fees: Fees::default(),
            default_currency_code: prefs.default_currency_code.clone(),
            current_rate: None,
            rates: Vec::new(),
        }
    }

    /// The persisted subset of this snapshot
    ///
    /// Every action that writes a preference also writes the matching field,
    /// so this mirrors durable storage.
    pub fn preferences(&self) -> StatePreferences {
        StatePreferences {
            alt_currency_displayed: self.alt_currency_displayed,
            touch_id_enabled: self.touch_id_enabled,
            max_display_digits: i64::from(self.max_display_digits),
            push_notifications_enabled: self.push_notifications_enabled,
            default_currency_code: self.default_currency_code.clone(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::initial(&StatePreferences::default())
    }
}
