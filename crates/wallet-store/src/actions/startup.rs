//! Startup actions
//!
//! Onboarding visibility and the login gate.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartupAction {
    /// Show the onboarding flow
    ShowStartFlow,
    /// Dismiss the onboarding flow and any root modal
    HideStartFlow,
    /// Rebuild the initial state from the persisted fields of the current
    /// snapshot, leaving the user logged in
    Reset,
    RequireLogin,
    LoginSuccess,
}
