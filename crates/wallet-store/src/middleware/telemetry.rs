//! Telemetry Middleware
//!
//! Reports a handful of settings changes to the analytics sink.

use crate::actions::{Action, SettingsAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use crate::telemetry::{Attributes, Telemetry};

pub const EVENT_ENABLE_TOUCH_ID: &str = "event.enableTouchId";
pub const EVENT_RECOMMEND_RESCAN: &str = "event.recommendRescan";
pub const EVENT_MAX_DIGITS_SET: &str = "maxDigits.set";

pub struct TelemetryMiddleware {
    sink: Box<dyn Telemetry>,
}

impl TelemetryMiddleware {
    pub fn new(sink: impl Telemetry + 'static) -> Self {
        Self {
            sink: Box::new(sink),
        }
    }

    fn record(&self, event: &str, attributes: Attributes) {
        if let Err(e) = self.sink.record(event, &attributes) {
            log::warn!("TelemetryMiddleware: dropped {}: {}", event, e);
        }
    }
}

impl Middleware for TelemetryMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Settings(SettingsAction::SetTouchIdEnabled(enabled)) => {
                self.record(
                    EVENT_ENABLE_TOUCH_ID,
                    Attributes::from([("isEnabled".to_string(), enabled.to_string())]),
                );
            }
            Action::Settings(SettingsAction::SetRecommendRescan(_)) => {
                self.record(EVENT_RECOMMEND_RESCAN, Attributes::new());
            }
            Action::Settings(SettingsAction::SetMaxDisplayDigits(digits)) => {
                self.record(
                    EVENT_MAX_DIGITS_SET,
                    Attributes::from([("maxDigits".to_string(), digits.to_string())]),
                );
            }
            _ => {}
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Store;
    use crate::telemetry::RecordingTelemetry;

    struct BrokenTelemetry;

    impl Telemetry for BrokenTelemetry {
        fn record(&self, _event: &str, _attributes: &Attributes) -> anyhow::Result<()> {
            anyhow::bail!("analytics endpoint unreachable")
        }
    }

    #[test]
    fn test_tracked_settings_emit_events() {
        let telemetry = RecordingTelemetry::new();
        let mut store = Store::new(AppState::default());
        store.add_middleware(Box::new(TelemetryMiddleware::new(telemetry.clone())));

        store.dispatch(SettingsAction::SetTouchIdEnabled(true));
        store.dispatch(SettingsAction::SetRecommendRescan(true));
        store.dispatch(SettingsAction::SetMaxDisplayDigits(8));
        store.dispatch(SettingsAction::SetPinLength(4));

        let events = telemetry.events();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].name, EVENT_ENABLE_TOUCH_ID);
        assert_eq!(events[0].attributes["isEnabled"], "true");
        assert_eq!(events[1].name, EVENT_RECOMMEND_RESCAN);
        assert!(events[1].attributes.is_empty());
        assert_eq!(events[2].name, EVENT_MAX_DIGITS_SET);
        assert_eq!(events[2].attributes["maxDigits"], "8");
    }

    #[test]
    fn test_sink_failure_is_ignored() {
        let mut store = Store::new(AppState::default());
        store.add_middleware(Box::new(TelemetryMiddleware::new(BrokenTelemetry)));

        store.dispatch(SettingsAction::SetRecommendRescan(true));
        assert!(store.state().recommend_rescan);
    }
}
