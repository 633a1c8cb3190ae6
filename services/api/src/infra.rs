use chrono::{DateTime, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::Value;
use std::fmt;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) usage: Arc<dyn UsageRecorder>,
}

/// One tool invocation, recorded fire-and-forget for analytics. Stands in
/// for the remote usage-event document store.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct UsageEvent {
    pub(crate) tool: &'static str,
    pub(crate) recorded_at: DateTime<Utc>,
    pub(crate) detail: Value,
}

#[derive(Debug)]
pub(crate) struct UsageError(pub(crate) String);

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "usage transport unavailable: {}", self.0)
    }
}

impl std::error::Error for UsageError {}

pub(crate) trait UsageRecorder: Send + Sync {
    fn record(&self, event: UsageEvent) -> Result<(), UsageError>;
}

#[derive(Default)]
pub(crate) struct InMemoryUsageRecorder {
    events: Mutex<Vec<UsageEvent>>,
}

impl UsageRecorder for InMemoryUsageRecorder {
    fn record(&self, event: UsageEvent) -> Result<(), UsageError> {
        let mut guard = self.events.lock().expect("usage mutex poisoned");
        guard.push(event);
        Ok(())
    }
}

impl InMemoryUsageRecorder {
    #[cfg(test)]
    pub(crate) fn events(&self) -> Vec<UsageEvent> {
        self.events.lock().expect("usage mutex poisoned").clone()
    }
}
