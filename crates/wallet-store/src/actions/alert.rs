//! Alert actions

use crate::state::AlertKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertAction {
    Show(AlertKind),
    Hide,
}

impl AlertAction {
    /// `None` hides the current alert
    pub fn set(alert: Option<AlertKind>) -> Self {
        match alert {
            Some(kind) => Self::Show(kind),
            None => Self::Hide,
        }
    }
}
