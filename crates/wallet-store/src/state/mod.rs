//! Application State Module
//!
//! Contains all state types held by the store, organized by feature.

mod alert;
mod app;
mod currency;
mod fees;
mod modal;
mod wallet;

pub use alert::AlertKind;
pub use app::AppState;
pub use currency::Rate;
pub use fees::Fees;
pub use modal::RootModal;
pub use wallet::{SyncState, Transaction, TransactionDirection, WalletState};
