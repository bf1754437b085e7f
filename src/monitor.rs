//! Dependency-injected metrics accumulation.
//!
//! Components that emit counters receive a `MetricsSink` explicitly; there
//! is no global instance. `NullMetrics` is the default for callers that do
//! not configure monitoring.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tracing::info;

/// Counter sink. Implementations must be cheap: `incr` is called on every
/// tool call, resource read, and prompt render.
pub trait MetricsSink: Send + Sync {
    fn incr(&self, counter: &str);
}

/// No-op sink for callers that do not configure monitoring.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullMetrics;

impl MetricsSink for NullMetrics {
    fn incr(&self, _counter: &str) {}
}

/// In-memory counter map, flushed periodically to the log.
///
/// The mutex guards a plain map; contention is negligible at one increment
/// per MCP event.
#[derive(Debug, Default)]
pub struct MemoryMetrics {
    counters: Mutex<HashMap<String, u64>>,
}

impl MemoryMetrics {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Current counter values.
    pub fn snapshot(&self) -> HashMap<String, u64> {
        self.counters.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// Drain and return the counters, resetting them to zero.
    pub fn drain(&self) -> HashMap<String, u64> {
        self.counters
            .lock()
            .map(|mut c| std::mem::take(&mut *c))
            .unwrap_or_default()
    }

    /// Spawn a background task that logs and resets the counters on an
    /// interval. The handle can be aborted at shutdown.
    pub fn spawn_flusher(self: &Arc<Self>, interval: Duration) -> tokio::task::JoinHandle<()> {
        let metrics = Arc::clone(self);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.tick().await; // first tick is immediate
            loop {
                ticker.tick().await;
                let counters = metrics.drain();
                if !counters.is_empty() {
                    info!(?counters, "metrics flush");
                }
            }
        })
    }
}

impl MetricsSink for MemoryMetrics {
    fn incr(&self, counter: &str) {
        if let Ok(mut counters) = self.counters.lock() {
            *counters.entry(counter.to_string()).or_insert(0) += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_metrics_accumulates() {
        let metrics = MemoryMetrics::new();
        metrics.incr("tools.create_task");
        metrics.incr("tools.create_task");
        metrics.incr("resources.read");

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.get("tools.create_task"), Some(&2));
        assert_eq!(snapshot.get("resources.read"), Some(&1));
    }

    #[test]
    fn drain_resets_counters() {
        let metrics = MemoryMetrics::new();
        metrics.incr("errors");
        let drained = metrics.drain();
        assert_eq!(drained.get("errors"), Some(&1));
        assert!(metrics.snapshot().is_empty());
    }

    #[test]
    fn null_metrics_is_a_no_op() {
        NullMetrics.incr("anything");
    }
}
