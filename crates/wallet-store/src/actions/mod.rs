//! Actions module
//!
//! Every state transition the store accepts, tagged by the part of the app
//! it affects. Each variant is plain data; the matching reducer in
//! `crate::reducers` turns it into the next snapshot.

pub mod alert;
pub mod currency;
pub mod modal;
pub mod settings;
pub mod startup;
pub mod wallet;

pub use alert::AlertAction;
pub use currency::CurrencyAction;
pub use modal::ModalAction;
pub use settings::SettingsAction;
pub use startup::StartupAction;
pub use wallet::WalletAction;

use crate::state::AppState;

/// Root action enum - tagged by domain
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Onboarding and login gates
    Startup(StartupAction),
    /// Root modal presentation
    Modal(ModalAction),
    /// Wallet data reported by the sync engine
    Wallet(WalletAction),
    /// Display currency and exchange rates
    Currency(CurrencyAction),
    /// Transient alerts
    Alert(AlertAction),
    /// Feature toggles and display settings
    Settings(SettingsAction),

    /// No-op action
    None,
}

impl Action {
    /// Produce the snapshot that follows `state` under this action
    pub fn reduce(&self, state: AppState) -> AppState {
        crate::reducers::reduce(state, self)
    }
}

impl From<StartupAction> for Action {
    fn from(action: StartupAction) -> Self {
        Action::Startup(action)
    }
}

impl From<ModalAction> for Action {
    fn from(action: ModalAction) -> Self {
        Action::Modal(action)
    }
}

impl From<WalletAction> for Action {
    fn from(action: WalletAction) -> Self {
        Action::Wallet(action)
    }
}

impl From<CurrencyAction> for Action {
    fn from(action: CurrencyAction) -> Self {
        Action::Currency(action)
    }
}

impl From<AlertAction> for Action {
    fn from(action: AlertAction) -> Self {
        Action::Alert(action)
    }
}

impl From<SettingsAction> for Action {
    fn from(action: SettingsAction) -> Self {
        Action::Settings(action)
    }
}
