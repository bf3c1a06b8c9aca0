use std::time::Duration;

use metrics::{counter, gauge, histogram};

/// Metrics collector for bridge operations
#[derive(Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            prefix: "ab_channel",
        }
    }

    pub fn call_received(&self, method: &str) {
        counter!(format!("{}.calls.received", self.prefix)).increment(1);
        counter!(format!("{}.calls.received.{}", self.prefix, method)).increment(1);
    }

    pub fn response_sent(&self, status: &str) {
        counter!(format!("{}.responses.{}", self.prefix, status)).increment(1);
    }

    pub fn provider_failure(&self, method: &str) {
        counter!(format!("{}.provider.failures", self.prefix)).increment(1);
        counter!(format!("{}.provider.failures.{}", self.prefix, method)).increment(1);
    }

    pub fn subscription_started(&self) {
        counter!(format!("{}.subscriptions.started", self.prefix)).increment(1);
        gauge!(format!("{}.subscriptions.active", self.prefix)).increment(1.0);
    }

    pub fn subscription_stopped(&self) {
        counter!(format!("{}.subscriptions.stopped", self.prefix)).increment(1);
        gauge!(format!("{}.subscriptions.active", self.prefix)).decrement(1.0);
    }

    pub fn event_emitted(&self) {
        counter!(format!("{}.events.emitted", self.prefix)).increment(1);
    }

    pub fn call_latency(&self, duration: Duration) {
        histogram!(format!("{}.calls.latency_ms", self.prefix)).record(duration.as_millis() as f64);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
