//! Dispatcher for re-entering the store
//!
//! Subscriber callbacks, middleware and background threads never touch the
//! store directly. They hold a Dispatcher, and everything sent through it is
//! queued and processed in FIFO order once the store's in-flight work is done.
//!
//! This enables patterns like:
//! - a balance subscriber dispatching `SetRecommendRescan` in response
//! - a sync thread reporting progress while the UI thread owns the store
//! - an owning object unsubscribing itself while being torn down

use crate::actions::Action;
use crate::subscription::SubscriberId;
use crate::trigger::TriggerName;
use std::sync::mpsc::Sender;

/// Work queued for the store
#[derive(Debug)]
pub(crate) enum Command {
    Dispatch(Action),
    Trigger(TriggerName),
    Unsubscribe(SubscriberId),
}

/// Cloneable, thread-safe handle that queues work for the store
#[derive(Clone, Debug)]
pub struct Dispatcher {
    tx: Sender<Command>,
}

impl Dispatcher {
    pub(crate) fn new(tx: Sender<Command>) -> Self {
        Self { tx }
    }

    /// Queue an action
    ///
    /// From inside a callback or middleware the action is applied right after
    /// the current dispatch finishes notifying. From another thread it is
    /// applied on the next `Store::process_pending`.
    pub fn dispatch(&self, action: impl Into<Action>) {
        if let Err(e) = self.tx.send(Command::Dispatch(action.into())) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }

    /// Queue a trigger
    pub fn trigger(&self, name: TriggerName) {
        if let Err(e) = self.tx.send(Command::Trigger(name)) {
            log::error!("Dispatcher: failed to send trigger: {}", e);
        }
    }

    /// Remove every subscription held by `id`
    ///
    /// Takes effect before the next callback of a running notification pass.
    /// Unsubscribing an unknown id is a no-op.
    pub fn unsubscribe(&self, id: SubscriberId) {
        if self.tx.send(Command::Unsubscribe(id)).is_err() {
            // The store is gone, so there is nothing left to unsubscribe from
            log::debug!("Dispatcher: store dropped before unsubscribing {:?}", id);
        }
    }
}
