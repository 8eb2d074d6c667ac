//! Middleware system for the Redux loop
//!
//! Middleware sits between action dispatch and reducer execution. It is
//! where side effects live, so reducers can stay pure.
//!
//! ```text
//! Action → Middleware Chain → Reducer → State
//! ```
//!
//! Each middleware can:
//! - Inspect actions and the current state
//! - Dispatch new actions
//! - Perform fire-and-forget side effects (logging, persistence, telemetry)
//! - Block actions from reaching the reducer

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod logging;
pub mod persistence;
pub mod telemetry;

pub use logging::LoggingMiddleware;
pub use persistence::PersistenceMiddleware;
pub use telemetry::TelemetryMiddleware;

/// Middleware trait - intercepts actions before they reach the reducer
pub trait Middleware: Send {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current application state (the snapshot before this action)
    /// - `dispatcher`: Use to queue follow-up actions
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}
