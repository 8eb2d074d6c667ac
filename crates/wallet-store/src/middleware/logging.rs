use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// LoggingMiddleware - logs every action with a running sequence number
#[derive(Debug, Default)]
pub struct LoggingMiddleware {
    sequence: u64,
}

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, _dispatcher: &Dispatcher) -> bool {
        if matches!(action, Action::None) {
            return true;
        }

        self.sequence += 1;
        log::debug!("Action #{}: {:?}", self.sequence, action);
        log::trace!("Action #{} applies to: {:?}", self.sequence, state);

        true // Always pass action through
    }
}
