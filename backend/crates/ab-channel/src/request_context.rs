use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use uuid::Uuid;

static REQUEST_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Request context for correlation and tracing
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Unique correlation ID for this request
    pub correlation_id: String,
    /// Sequence number within this process
    pub request_seq: u64,
    /// Bridge instance that received the request
    pub bridge_id: String,
    /// Start time for latency tracking
    pub started_at: Instant,
}

impl RequestContext {
    pub fn new<S: Into<String>>(bridge_id: S) -> Self {
        let request_seq = REQUEST_COUNTER.fetch_add(1, Ordering::SeqCst);

        Self {
            correlation_id: Uuid::new_v4().as_simple().to_string(),
            request_seq,
            bridge_id: bridge_id.into(),
            started_at: Instant::now(),
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.started_at.elapsed().as_millis() as u64
    }

    /// Create a log prefix for structured logging
    pub fn log_prefix(&self) -> String {
        format!(
            "[req={} seq={} bridge={}]",
            &self.correlation_id[..8.min(self.correlation_id.len())],
            self.request_seq,
            &self.bridge_id[..8.min(self.bridge_id.len())]
        )
    }
}
