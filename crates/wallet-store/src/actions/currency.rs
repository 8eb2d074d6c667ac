//! Currency actions

use crate::state::Rate;

#[derive(Debug, Clone, PartialEq)]
pub enum CurrencyAction {
    /// Swap primary and alternate display currency (persisted)
    ToggleDisplay,
    /// Change the local fiat currency (persisted)
    SetDefault(String),
    SetExchangeRates { current: Rate, rates: Vec<Rate> },
    SetCurrentRate(Rate),
}
