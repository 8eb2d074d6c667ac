//! Triggers
//!
//! Named one-shot events that never become part of the state, such as
//! "lock the wallet now" or "start a rescan".

use std::mem;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerName {
    Lock,
    Rescan,
    RetrySync,
    BlockModalDismissal,
    UnblockModalDismissal,
    /// Open the help article with the given id
    PresentFaq(String),
    ShowStatusBar,
    HideStatusBar,
}

impl TriggerName {
    /// Whether `self` and `other` are the same kind of trigger, ignoring payloads
    pub fn matches(&self, other: &TriggerName) -> bool {
        mem::discriminant(self) == mem::discriminant(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_ignores_payload() {
        let a = TriggerName::PresentFaq("rescan".to_string());
        let b = TriggerName::PresentFaq("backup".to_string());
        assert!(a.matches(&b));
        assert_ne!(a, b);
        assert!(!TriggerName::Lock.matches(&TriggerName::Rescan));
    }
}
