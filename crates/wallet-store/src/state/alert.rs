//! Alert State

use serde::Serialize;

/// Transient confirmation shown on top of the current screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AlertKind {
    PinSet,
    PaperKeySet,
    SendSuccess,
    ResolvedSuccess,
    AddressesCopied,
    SweepSuccess,
}
