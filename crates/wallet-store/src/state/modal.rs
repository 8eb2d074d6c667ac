//! Root modal

use serde::Serialize;
use strum::{AsRefStr, EnumIter};

/// The full-screen modal currently presented; at most one at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, AsRefStr, EnumIter)]
pub enum RootModal {
    #[default]
    None,
    Send,
    Receive,
    Menu,
    LoginAddress,
    LoginScan,
    ManageWallet,
    RequestAmount,
}

impl RootModal {
    pub fn is_presented(self) -> bool {
        self != Self::None
    }
}
