use std::collections::VecDeque;
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;

use crate::actions::Action;
use crate::dispatcher::{Command, Dispatcher};
use crate::middleware::Middleware;
use crate::state::AppState;
use crate::subscription::{StateSubscription, SubscriberId, TriggerSubscription};
use crate::trigger::TriggerName;

/// Work waiting for the current dispatch to finish
enum Pending {
    Action(Action),
    Trigger(TriggerName),
}

/// Store - holds the live snapshot and runs the Redux loop
///
/// ```text
/// Action → Middleware Chain → Reducer → new snapshot → selector-gated subscribers
/// ```
///
/// All mutation happens through `&mut self` on the thread that owns the
/// store. Re-entrant work (a callback dispatching, a middleware dispatching,
/// another thread reporting in) goes through the [`Dispatcher`] and is
/// applied strictly after the in-flight action has notified every subscriber.
pub struct Store {
    state: Arc<AppState>,
    middleware: Vec<Box<dyn Middleware>>,
    subscriptions: Vec<StateSubscription>,
    trigger_subscriptions: Vec<TriggerSubscription>,
    dispatcher: Dispatcher,
    commands: Receiver<Command>,
    pending: VecDeque<Pending>,
}

impl Store {
    pub fn new(initial_state: AppState) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            state: Arc::new(initial_state),
            middleware: Vec::new(),
            subscriptions: Vec::new(),
            trigger_subscriptions: Vec::new(),
            dispatcher: Dispatcher::new(tx),
            commands: rx,
            pending: VecDeque::new(),
        }
    }

    /// Add middleware to the store
    ///
    /// Middleware runs in the order it was added, before the reducer.
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    /// Get the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Shared handle to the current snapshot
    ///
    /// The snapshot never changes; later dispatches replace the store's
    /// handle instead.
    pub fn current_state(&self) -> Arc<AppState> {
        Arc::clone(&self.state)
    }

    /// Get the dispatcher
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Register a selector-gated callback for `id`
    ///
    /// The callback runs once right away with the current snapshot, then after
    /// every dispatch for which `selector(previous, next)` returns true.
    pub fn subscribe<S, C>(&mut self, id: SubscriberId, selector: S, callback: C)
    where
        S: Fn(&AppState, &AppState) -> bool + 'static,
        C: FnMut(&AppState, &Dispatcher) + 'static,
    {
        // Unsubscribes queued before this call must not reach the new entry
        self.collect_commands();

        let mut subscription = StateSubscription {
            id,
            selector: Box::new(selector),
            callback: Box::new(callback),
            active: true,
        };
        (subscription.callback)(&*self.state, &self.dispatcher);
        self.subscriptions.push(subscription);
        log::debug!("Subscribed {:?}", id);

        self.run();
    }

    /// Register a callback for every trigger of the same kind as `name`
    pub fn subscribe_trigger<C>(&mut self, id: SubscriberId, name: TriggerName, callback: C)
    where
        C: FnMut(&TriggerName, &Dispatcher) + 'static,
    {
        self.collect_commands();
        self.compact();
        self.trigger_subscriptions.push(TriggerSubscription {
            id,
            name,
            callback: Box::new(callback),
            active: true,
        });
    }

    /// Remove every subscription held by `id`; unknown ids are ignored
    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.deactivate(id);
        self.compact();
    }

    pub fn is_subscribed(&self, id: SubscriberId) -> bool {
        self.subscriptions.iter().any(|s| s.id == id && s.active)
            || self.trigger_subscriptions.iter().any(|s| s.id == id && s.active)
    }

    /// Process an action through middleware chain and reducer
    pub fn dispatch(&mut self, action: impl Into<Action>) {
        self.pending.push_back(Pending::Action(action.into()));
        self.run();
    }

    /// Fire a trigger at every matching trigger subscription
    pub fn trigger(&mut self, name: TriggerName) {
        self.pending.push_back(Pending::Trigger(name));
        self.run();
    }

    /// Apply everything other threads sent through the dispatcher
    pub fn process_pending(&mut self) {
        self.run();
    }

    fn run(&mut self) {
        self.collect_commands();
        while let Some(work) = self.pending.pop_front() {
            match work {
                Pending::Action(action) => self.apply(action),
                Pending::Trigger(name) => self.fire_trigger(&name),
            }
            self.collect_commands();
            self.compact();
        }
        self.compact();
    }

    /// Move dispatcher commands into the pending queue
    ///
    /// Unsubscribes are applied on the spot so a subscriber removed mid-pass
    /// is never called again.
    fn collect_commands(&mut self) {
        while let Ok(command) = self.commands.try_recv() {
            match command {
                Command::Dispatch(action) => self.pending.push_back(Pending::Action(action)),
                Command::Trigger(name) => self.pending.push_back(Pending::Trigger(name)),
                Command::Unsubscribe(id) => self.deactivate(id),
            }
        }
    }

    /// Inactive subscriptions stay in place until `compact` so indices held by
    /// a running pass stay valid
    fn deactivate(&mut self, id: SubscriberId) {
        let mut found = false;
        for subscription in self.subscriptions.iter_mut().filter(|s| s.id == id) {
            subscription.active = false;
            found = true;
        }
        for subscription in self.trigger_subscriptions.iter_mut().filter(|s| s.id == id) {
            subscription.active = false;
            found = true;
        }
        if found {
            log::debug!("Unsubscribed {:?}", id);
        }
    }

    fn compact(&mut self) {
        self.subscriptions.retain(|s| s.active);
        self.trigger_subscriptions.retain(|s| s.active);
    }

    fn apply(&mut self, action: Action) {
        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                log::debug!("Action consumed by middleware: {:?}", action);
                return;
            }
        }

        let previous = Arc::clone(&self.state);
        self.state = Arc::new(action.reduce(AppState::clone(&previous)));
        self.notify(&previous);
    }

    fn notify(&mut self, previous: &AppState) {
        for index in 0..self.subscriptions.len() {
            // The previous callback may have unsubscribed this one
            self.collect_commands();
            let subscription = &mut self.subscriptions[index];
            if subscription.active && (subscription.selector)(previous, &*self.state) {
                (subscription.callback)(&*self.state, &self.dispatcher);
            }
        }
    }

    fn fire_trigger(&mut self, name: &TriggerName) {
        log::debug!("Trigger: {:?}", name);
        for index in 0..self.trigger_subscriptions.len() {
            self.collect_commands();
            let subscription = &mut self.trigger_subscriptions[index];
            if subscription.active && subscription.name.matches(name) {
                (subscription.callback)(name, &self.dispatcher);
            }
        }
    }
}
