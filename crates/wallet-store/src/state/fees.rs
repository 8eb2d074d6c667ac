//! Fee schedule

use serde::{Deserialize, Serialize};

/// Network fee rates in satoshis per kB
///
/// The store never interprets these; they are replaced wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fees {
    pub regular: u64,
    pub economy: u64,
}

impl Default for Fees {
    fn default() -> Self {
        Self {
            regular: 10_000,
            economy: 5_000,
        }
    }
}
