use std::time::Duration;

use metrics::{counter, gauge, histogram};

/// Metrics collector for channel connections
#[derive(Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            prefix: "ab_server",
        }
    }

    pub fn connection_established(&self) {
        counter!(format!("{}.connections.established", self.prefix)).increment(1);
        gauge!(format!("{}.connections.active", self.prefix)).increment(1.0);
    }

    /// `reason` is "normal" or "error"
    pub fn connection_closed(&self, reason: &str) {
        counter!(format!("{}.connections.closed.{}", self.prefix, reason)).increment(1);
        gauge!(format!("{}.connections.active", self.prefix)).decrement(1.0);
    }

    pub fn connection_rejected(&self) {
        counter!(format!("{}.connections.rejected", self.prefix)).increment(1);
    }

    pub fn frame_received(&self, kind: &str) {
        counter!(format!("{}.frames.received.{}", self.prefix, kind)).increment(1);
    }

    pub fn frame_sent(&self, kind: &str) {
        counter!(format!("{}.frames.sent.{}", self.prefix, kind)).increment(1);
    }

    pub fn error_occurred(&self, error_type: &str) {
        counter!(format!("{}.errors.{}", self.prefix, error_type)).increment(1);
    }

    pub fn connection_duration(&self, duration: Duration) {
        histogram!(format!("{}.connections.duration_ms", self.prefix))
            .record(duration.as_millis() as f64);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
