//! Reducers
//!
//! Pure functions from `(snapshot, action)` to the next snapshot. Each
//! reducer receives an owned copy of the state, overwrites only the fields
//! its action targets and hands the rest through untouched.

pub mod alert_reducer;
pub mod app_reducer;
pub mod currency_reducer;
pub mod settings_reducer;
pub mod startup_reducer;
pub mod wallet_reducer;

pub use app_reducer::reduce;
