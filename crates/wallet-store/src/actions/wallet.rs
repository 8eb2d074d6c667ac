//! Wallet actions
//!
//! Dispatched by the sync engine once it has results; each one overwrites the
//! matching wallet field.

use chrono::{DateTime, Utc};

use crate::state::{SyncState, Transaction};

#[derive(Debug, Clone, PartialEq)]
pub enum WalletAction {
    /// Sync progress together with the timestamp of the last block seen
    SetSyncProgress { progress: f64, timestamp: u32 },
    SetSyncState(SyncState),
    SetBalance(u64),
    /// Replaces the whole transaction list
    SetTransactions(Vec<Transaction>),
    SetName(String),
    SetCreationDate(DateTime<Utc>),
    SetIsRescanning(bool),
    SetIsConnected(bool),
}
