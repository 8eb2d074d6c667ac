//! Telemetry sinks
//!
//! Fire-and-forget analytics events. A sink may fail; callers log the error
//! and move on.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

pub type Attributes = BTreeMap<String, String>;

/// Destination for analytics events
pub trait Telemetry: Send {
    fn record(&self, event: &str, attributes: &Attributes) -> anyhow::Result<()>;
}

/// Writes events to the log
#[derive(Debug, Default)]
pub struct LogTelemetry;

impl Telemetry for LogTelemetry {
    fn record(&self, event: &str, attributes: &Attributes) -> anyhow::Result<()> {
        log::info!(target: "telemetry", "{} {:?}", event, attributes);
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryEvent {
    pub name: String,
    pub attributes: Attributes,
}

/// Keeps every event in memory; clones share the same list
#[derive(Debug, Clone, Default)]
pub struct RecordingTelemetry {
    events: Arc<Mutex<Vec<TelemetryEvent>>>,
}

impl RecordingTelemetry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<TelemetryEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

impl Telemetry for RecordingTelemetry {
    fn record(&self, event: &str, attributes: &Attributes) -> anyhow::Result<()> {
        let mut events = self
            .events
            .lock()
            .map_err(|_| anyhow::anyhow!("telemetry recorder poisoned"))?;
        events.push(TelemetryEvent {
            name: event.to_string(),
            attributes: attributes.clone(),
        });
        Ok(())
    }
}
