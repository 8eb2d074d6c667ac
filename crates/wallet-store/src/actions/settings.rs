//! Settings actions
//!
//! Feature toggles and display settings. Some of these are persisted or
//! reported to telemetry by middleware before the reducer runs.

use crate::state::Fees;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsAction {
    /// Persisted, reported to telemetry
    SetTouchIdEnabled(bool),
    SetPromptingTouchId(bool),
    SetPushNotificationsEnabled(bool),
    SetPinLength(usize),
    /// Persisted, reported to telemetry
    SetMaxDisplayDigits(u32),
    /// Reported to telemetry
    SetRecommendRescan(bool),
    SetLoadingTransactions(bool),
    /// Replaces the fee schedule wholesale
    SetFees(Fees),
}
