//! Exchange rates

use serde::{Deserialize, Serialize};

/// Price of one coin in a fiat currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rate {
    /// ISO 4217 code, e.g. "USD"
    pub code: String,
    pub name: String,
    pub rate: f64,
}

impl Rate {
    pub fn new(code: impl Into<String>, name: impl Into<String>, rate: f64) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            rate,
        }
    }
}
