use crate::{Metrics, RequestContext, SubscriptionRegistry};

use ab_core::AuthProvider;

use std::sync::Arc;

/// Context passed to the dispatch table for one request.
#[derive(Clone)]
pub struct HandlerContext {
    /// Provider whose session the request acts on
    pub provider: Arc<dyn AuthProvider>,
    /// Subscriptions of the bridge that received the request
    pub registry: SubscriptionRegistry,
    /// Request context for tracing
    pub request_ctx: RequestContext,
    pub metrics: Metrics,
}

impl HandlerContext {
    pub fn new(
        provider: Arc<dyn AuthProvider>,
        registry: SubscriptionRegistry,
        bridge_id: &str,
        metrics: Metrics,
    ) -> Self {
        Self {
            provider,
            registry,
            request_ctx: RequestContext::new(bridge_id),
            metrics,
        }
    }
}
