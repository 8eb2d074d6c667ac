use crate::actions::{Action, ModalAction};
use crate::reducers::{
    alert_reducer, currency_reducer, settings_reducer, startup_reducer, wallet_reducer,
};
use crate::state::AppState;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that routes each action to its domain reducer
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Startup(action) => startup_reducer::reduce_startup(state, action),
        Action::Modal(ModalAction::Present(modal)) => {
            // Presenting any modal ends the start flow
            state.start_flow_visible = false;
            state.root_modal = *modal;
            state
        }
        Action::Wallet(action) => {
            state.wallet = wallet_reducer::reduce_wallet(state.wallet, action);
            state
        }
        Action::Currency(action) => currency_reducer::reduce_currency(state, action),
        Action::Alert(action) => {
            state.alert = alert_reducer::reduce_alert(state.alert, action);
            state
        }
        Action::Settings(action) => settings_reducer::reduce_settings(state, action),
        Action::None => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{
        AlertAction, CurrencyAction, SettingsAction, StartupAction, WalletAction,
    };
    use crate::state::{
        AlertKind, Fees, Rate, RootModal, SyncState, Transaction, TransactionDirection,
        WalletState,
    };
    use chrono::{DateTime, Utc};
    use strum::IntoEnumIterator;

    fn tx(hash: &str) -> Transaction {
        Transaction {
            hash: hash.to_string(),
            direction: TransactionDirection::Received,
            amount: 1_000,
            fee: 10,
            timestamp: 1_600_000_000,
            block_height: Some(100),
        }
    }

    /// A snapshot where most fields differ from their defaults
    fn busy_state() -> AppState {
        AppState {
            start_flow_visible: false,
            login_required: true,
            root_modal: RootModal::Menu,
            wallet: WalletState {
                connected: true,
                sync_progress: 0.25,
                sync_state: SyncState::Syncing,
                balance: Some(5),
                transactions: vec![tx("a")],
                last_block_timestamp: 10,
                name: "Savings".to_string(),
                creation_date: DateTime::<Utc>::from_timestamp(1_500_000_000, 0).unwrap(),
                rescanning: false,
            },
            alert: Some(AlertKind::PinSet),
            current_rate: Some(Rate::new("USD", "US Dollar", 50.0)),
            rates: vec![Rate::new("USD", "US Dollar", 50.0)],
            ..AppState::default()
        }
    }

    fn changed_fields(old: &AppState, new: &AppState) -> Vec<&'static str> {
        let mut changed = Vec::new();
        macro_rules! check {
            ($($name:literal => $($field:ident).+),* $(,)?) => {
                $(if old.$($field).+ != new.$($field).+ { changed.push($name); })*
            };
        }
        check!(
            "start_flow_visible" => start_flow_visible,
            "login_required" => login_required,
            "root_modal" => root_modal,
            "wallet.connected" => wallet.connected,
            "wallet.sync_progress" => wallet.sync_progress,
            "wallet.sync_state" => wallet.sync_state,
            "wallet.balance" => wallet.balance,
            "wallet.transactions" => wallet.transactions,
            "wallet.last_block_timestamp" => wallet.last_block_timestamp,
            "wallet.name" => wallet.name,
            "wallet.creation_date" => wallet.creation_date,
            "wallet.rescanning" => wallet.rescanning,
            "alt_currency_displayed" => alt_currency_displayed,
            "alert" => alert,
            "touch_id_enabled" => touch_id_enabled,
            "prompting_touch_id" => prompting_touch_id,
            "push_notifications_enabled" => push_notifications_enabled,
            "recommend_rescan" => recommend_rescan,
            "loading_transactions" => loading_transactions,
            "max_display_digits" => max_display_digits,
            "pin_length" => pin_length,
            "fees" => fees,
            "default_currency_code" => default_currency_code,
            "current_rate" => current_rate,
            "rates" => rates,
        );
        changed
    }

    #[test]
    fn test_actions_only_touch_their_fields() {
        let euro = Rate::new("EUR", "Euro", 45.0);
        let cases: Vec<(Action, Vec<&str>)> = vec![
            (StartupAction::ShowStartFlow.into(), vec!["start_flow_visible"]),
            (
                StartupAction::HideStartFlow.into(),
                vec!["start_flow_visible", "root_modal"],
            ),
            (StartupAction::RequireLogin.into(), vec!["login_required"]),
            (StartupAction::LoginSuccess.into(), vec!["login_required"]),
            (
                ModalAction::Present(RootModal::Send).into(),
                vec!["start_flow_visible", "root_modal"],
            ),
            (
                WalletAction::SetSyncProgress {
                    progress: 0.5,
                    timestamp: 99,
                }
                .into(),
                vec!["wallet.sync_progress", "wallet.last_block_timestamp"],
            ),
            (
                WalletAction::SetSyncState(SyncState::Connecting).into(),
                vec!["wallet.sync_state"],
            ),
            (WalletAction::SetBalance(42).into(), vec!["wallet.balance"]),
            (
                WalletAction::SetTransactions(vec![tx("b"), tx("c")]).into(),
                vec!["wallet.transactions"],
            ),
            (
                WalletAction::SetName("Spending".to_string()).into(),
                vec!["wallet.name"],
            ),
            (
                WalletAction::SetCreationDate(DateTime::<Utc>::from_timestamp(7, 0).unwrap())
                    .into(),
                vec!["wallet.creation_date"],
            ),
            (
                WalletAction::SetIsRescanning(true).into(),
                vec!["wallet.rescanning"],
            ),
            (
                WalletAction::SetIsConnected(false).into(),
                vec!["wallet.connected"],
            ),
            (
                CurrencyAction::ToggleDisplay.into(),
                vec!["alt_currency_displayed"],
            ),
            (
                CurrencyAction::SetDefault("EUR".to_string()).into(),
                vec!["default_currency_code"],
            ),
            (
                CurrencyAction::SetExchangeRates {
                    current: euro.clone(),
                    rates: vec![euro.clone()],
                }
                .into(),
                vec!["current_rate", "rates"],
            ),
            (
                CurrencyAction::SetCurrentRate(euro.clone()).into(),
                vec!["current_rate"],
            ),
            (
                AlertAction::Show(AlertKind::SendSuccess).into(),
                vec!["alert"],
            ),
            (AlertAction::Hide.into(), vec!["alert"]),
            (
                SettingsAction::SetTouchIdEnabled(true).into(),
                vec!["touch_id_enabled"],
            ),
            (
                SettingsAction::SetPromptingTouchId(true).into(),
                vec!["prompting_touch_id"],
            ),
            (
                SettingsAction::SetPushNotificationsEnabled(true).into(),
                vec!["push_notifications_enabled"],
            ),
            (SettingsAction::SetPinLength(4).into(), vec!["pin_length"]),
            (
                SettingsAction::SetMaxDisplayDigits(8).into(),
                vec!["max_display_digits"],
            ),
            (
                SettingsAction::SetRecommendRescan(true).into(),
                vec!["recommend_rescan"],
            ),
            (
                SettingsAction::SetLoadingTransactions(true).into(),
                vec!["loading_transactions"],
            ),
            (
                SettingsAction::SetFees(Fees {
                    regular: 1,
                    economy: 1,
                })
                .into(),
                vec!["fees"],
            ),
            (Action::None, vec![]),
        ];

        for (action, targeted) in cases {
            let old = busy_state();
            let new = reduce(old.clone(), &action);
            let changed = changed_fields(&old, &new);
            for field in &changed {
                assert!(
                    targeted.contains(field),
                    "{:?} changed untargeted field {}",
                    action,
                    field
                );
            }
            // These either start from their target value or may leave one of
            // two targeted fields unchanged
            let partial = matches!(
                action,
                Action::Startup(StartupAction::HideStartFlow | StartupAction::RequireLogin)
                    | Action::Modal(_)
            );
            if !partial {
                assert_eq!(changed, targeted, "{:?}", action);
            }
        }
    }

    #[test]
    fn test_reduce_is_deterministic() {
        let action: Action = WalletAction::SetBalance(77).into();
        let a = reduce(busy_state(), &action);
        let b = reduce(busy_state(), &action);
        assert_eq!(a, b);
    }

    #[test]
    fn test_present_modal_ends_start_flow() {
        for modal in RootModal::iter() {
            let state = reduce(AppState::default(), &StartupAction::ShowStartFlow.into());
            assert!(state.start_flow_visible);

            let state = reduce(state, &ModalAction::Present(modal).into());
            assert!(!state.start_flow_visible, "{}", modal.as_ref());
            assert_eq!(state.root_modal, modal);
        }
    }

    #[test]
    fn test_modal_and_alert_are_independent() {
        let state = reduce(
            AppState::default(),
            &AlertAction::Show(AlertKind::AddressesCopied).into(),
        );
        let state = reduce(state, &ModalAction::Present(RootModal::Receive).into());
        assert_eq!(state.alert, Some(AlertKind::AddressesCopied));

        let state = reduce(state, &AlertAction::Hide.into());
        assert_eq!(state.root_modal, RootModal::Receive);
    }

    #[test]
    fn test_sync_progress_last_write_wins() {
        let state = reduce(
            AppState::default(),
            &WalletAction::SetSyncProgress {
                progress: 0.5,
                timestamp: 1,
            }
            .into(),
        );
        let state = reduce(
            state,
            &WalletAction::SetSyncProgress {
                progress: 0.9,
                timestamp: 2,
            }
            .into(),
        );
        assert_eq!(state.wallet.sync_progress, 0.9);
        assert_eq!(state.wallet.last_block_timestamp, 2);
    }

    #[test]
    fn test_action_reduce_delegates_to_root_reducer() {
        let action: Action = SettingsAction::SetPinLength(4).into();
        assert_eq!(
            action.reduce(AppState::default()),
            reduce(AppState::default(), &action)
        );
    }
}
