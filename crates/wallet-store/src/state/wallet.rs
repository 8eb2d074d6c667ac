//! Wallet State
//!
//! Everything the sync engine reports about the wallet. Equality is
//! structural so subscribers can detect no-op updates.

use chrono::{DateTime, Utc};
use serde::Serialize;

pub const DEFAULT_WALLET_NAME: &str = "My Wallet";

/// Phase of the peer-to-peer sync
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SyncState {
    Syncing,
    Connecting,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TransactionDirection {
    Sent,
    Received,
    Moved,
}

/// A wallet transaction as delivered by the sync engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    pub hash: String,
    pub direction: TransactionDirection,
    /// Amount in satoshis
    pub amount: u64,
    pub fee: u64,
    pub timestamp: u32,
    /// `None` while unconfirmed
    pub block_height: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WalletState {
    pub connected: bool,
    /// Fraction of the chain downloaded, in `0.0..=1.0`
    pub sync_progress: f64,
    pub sync_state: SyncState,
    /// `None` until the first balance arrives from sync
    pub balance: Option<u64>,
    pub transactions: Vec<Transaction>,
    pub last_block_timestamp: u32,
    pub name: String,
    pub creation_date: DateTime<Utc>,
    pub rescanning: bool,
}

impl Default for WalletState {
    fn default() -> Self {
        Self {
            connected: false,
            sync_progress: 0.0,
            sync_state: SyncState::Success,
            balance: None,
            transactions: Vec::new(),
            last_block_timestamp: 0,
            name: DEFAULT_WALLET_NAME.to_string(),
            creation_date: DateTime::<Utc>::UNIX_EPOCH,
            rescanning: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_wallet() {
        let wallet = WalletState::default();
        assert!(!wallet.connected);
        assert_eq!(wallet.sync_state, SyncState::Success);
        assert!(wallet.balance.is_none());
        assert!(wallet.transactions.is_empty());
        assert_eq!(wallet.creation_date.timestamp(), 0);
        assert_eq!(wallet.name, DEFAULT_WALLET_NAME);
    }

    #[test]
    fn test_equality_covers_timestamp() {
        let a = WalletState::default();
        let b = WalletState {
            last_block_timestamp: 42,
            ..WalletState::default()
        };
        assert_ne!(a, b);
    }
}
