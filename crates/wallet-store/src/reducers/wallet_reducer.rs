//! Wallet Reducer

use crate::actions::WalletAction;
use crate::state::WalletState;

/// Reduce wallet actions
pub fn reduce_wallet(mut state: WalletState, action: &WalletAction) -> WalletState {
    match action {
        WalletAction::SetSyncProgress {
            progress,
            timestamp,
        } => {
            state.sync_progress = *progress;
            state.last_block_timestamp = *timestamp;
        }
        WalletAction::SetSyncState(sync_state) => {
            state.sync_state = *sync_state;
        }
        WalletAction::SetBalance(balance) => {
            state.balance = Some(*balance);
        }
        WalletAction::SetTransactions(transactions) => {
            state.transactions = transactions.clone();
        }
        WalletAction::SetName(name) => {
            state.name = name.clone();
        }
        WalletAction::SetCreationDate(date) => {
            state.creation_date = *date;
        }
        WalletAction::SetIsRescanning(rescanning) => {
            state.rescanning = *rescanning;
        }
        WalletAction::SetIsConnected(connected) => {
            state.connected = *connected;
        }
    }
    state
}
