//! Subscriptions
//!
//! A subscriber is an identity that owns any number of subscriptions. State
//! subscriptions are gated by a selector over `(previous, next)` snapshots;
//! trigger subscriptions fire on a matching trigger.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::dispatcher::Dispatcher;
use crate::state::AppState;
use crate::trigger::TriggerName;

static NEXT_SUBSCRIBER_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

impl SubscriberId {
    pub fn new() -> Self {
        Self(NEXT_SUBSCRIBER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for SubscriberId {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns true when the callback should see the new snapshot
pub type Selector = Box<dyn Fn(&AppState, &AppState) -> bool>;
pub type StateCallback = Box<dyn FnMut(&AppState, &Dispatcher)>;
pub type TriggerCallback = Box<dyn FnMut(&TriggerName, &Dispatcher)>;

pub(crate) struct StateSubscription {
    pub(crate) id: SubscriberId,
    pub(crate) selector: Selector,
    pub(crate) callback: StateCallback,
    pub(crate) active: bool,
}

pub(crate) struct TriggerSubscription {
    pub(crate) id: SubscriberId,
    pub(crate) name: TriggerName,
    pub(crate) callback: TriggerCallback,
    pub(crate) active: bool,
}

/// Unsubscribes its subscriber when dropped
///
/// Keep one of these in the object that owns the subscriptions; tearing the
/// object down then removes them, even from inside a running callback.
#[derive(Debug)]
pub struct Subscription {
    id: SubscriberId,
    dispatcher: Dispatcher,
}

impl Subscription {
    pub fn new(id: SubscriberId, dispatcher: Dispatcher) -> Self {
        Self { id, dispatcher }
    }

    pub fn id(&self) -> SubscriberId {
        self.id
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.dispatcher.unsubscribe(self.id);
    }
}
