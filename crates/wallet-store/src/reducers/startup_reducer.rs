//! Startup Reducer
//!
//! Handles the onboarding flow, the login gate and full resets.

use crate::actions::StartupAction;
use crate::state::{AppState, RootModal};

/// Reduce startup actions
pub fn reduce_startup(mut state: AppState, action: &StartupAction) -> AppState {
    match action {
        StartupAction::ShowStartFlow => {
            state.start_flow_visible = true;
        }
        StartupAction::HideStartFlow => {
            state.start_flow_visible = false;
            state.root_modal = RootModal::None;
        }
        StartupAction::Reset => {
            // Persisted fields are taken from the current snapshot, not re-read
            // from storage; a preference write that failed earlier is not seen here
            let mut reset = AppState::initial(&state.preferences());
            reset.login_required = false;
            log::info!("State reset to initial values");
            return reset;
        }
        StartupAction::RequireLogin => {
            state.login_required = true;
        }
        StartupAction::LoginSuccess => {
            state.login_required = false;
        }
    }
    state
}
