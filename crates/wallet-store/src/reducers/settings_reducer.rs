use crate::actions::SettingsAction;
use crate::state::AppState;

/// Reducer for feature toggles and display settings
pub fn reduce_settings(mut state: AppState, action: &SettingsAction) -> AppState {
    match action {
        SettingsAction::SetTouchIdEnabled(enabled) => {
            state.touch_id_enabled = *enabled;
        }
        SettingsAction::SetPromptingTouchId(prompting) => {
            state.prompting_touch_id = *prompting;
        }
        SettingsAction::SetPushNotificationsEnabled(enabled) => {
            state.push_notifications_enabled = *enabled;
        }
        SettingsAction::SetPinLength(length) => {
            state.pin_length = *length;
        }
        SettingsAction::SetMaxDisplayDigits(digits) => {
            state.max_display_digits = *digits;
        }
        SettingsAction::SetRecommendRescan(recommend) => {
            state.recommend_rescan = *recommend;
        }
        SettingsAction::SetLoadingTransactions(loading) => {
            state.loading_transactions = *loading;
        }
        SettingsAction::SetFees(fees) => {
            state.fees = *fees;
        }
    }
    state
}
