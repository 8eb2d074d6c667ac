//! Unidirectional state store for the wallet UI
//!
//! A single immutable [`AppState`] snapshot is owned by the [`Store`].
//! Callers submit [`Action`]s; the store runs them through its middleware
//! chain, applies the pure reducer, and notifies every subscriber whose
//! selector reports a relevant change.

pub mod actions;
pub mod dispatcher;
pub mod middleware;
pub mod reducers;
pub mod state;
pub mod store;
pub mod subscription;
pub mod telemetry;
pub mod trigger;

pub use actions::Action;
pub use dispatcher::Dispatcher;
pub use middleware::Middleware;
pub use state::AppState;
pub use store::Store;
pub use subscription::{SubscriberId, Subscription};
pub use trigger::TriggerName;
