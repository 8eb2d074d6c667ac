//! Currency Reducer
//!
//! Display currency toggle, the local fiat currency and exchange rates.

use crate::actions::CurrencyAction;
use crate::state::AppState;

/// Reduce currency actions
pub fn reduce_currency(mut state: AppState, action: &CurrencyAction) -> AppState {
    match action {
        CurrencyAction::ToggleDisplay => {
            state.alt_currency_displayed = !state.alt_currency_displayed;
        }
        CurrencyAction::SetDefault(code) => {
            state.default_currency_code = code.clone();
        }
        CurrencyAction::SetExchangeRates { current, rates } => {
            state.current_rate = Some(current.clone());
            state.rates = rates.clone();
        }
        CurrencyAction::SetCurrentRate(rate) => {
            state.current_rate = Some(rate.clone());
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Rate;

    #[test]
    fn test_toggle_flips_back_and_forth() {
        let state = reduce_currency(AppState::default(), &CurrencyAction::ToggleDisplay);
        assert!(state.alt_currency_displayed);
        let state = reduce_currency(state, &CurrencyAction::ToggleDisplay);
        assert!(!state.alt_currency_displayed);
    }

    #[test]
    fn test_current_rate_keeps_rate_list() {
        let usd = Rate::new("USD", "US Dollar", 60.0);
        let eur = Rate::new("EUR", "Euro", 55.0);
        let state = reduce_currency(
            AppState::default(),
            &CurrencyAction::SetExchangeRates {
                current: usd.clone(),
                rates: vec![usd, eur.clone()],
            },
        );
        let state = reduce_currency(state, &CurrencyAction::SetCurrentRate(eur.clone()));
        assert_eq!(state.current_rate, Some(eur));
        assert_eq!(state.rates.len(), 2);
    }
}
