use crate::handlers::dispatcher;
use crate::handlers::result_adapter::ResultAdapter;
use crate::{
    AuthRequest, BridgeEvent, BridgeResponse, EventSink, HandlerContext, MethodCall, Metrics,
    PendingResponse, Responder, SubscriptionRegistry,
};

use ab_core::AuthProvider;

use std::sync::Arc;

use log::info;
use tokio::sync::mpsc;
use uuid::Uuid;

/// Bridge between boundary requests and an authentication provider.
///
/// One instance serves one caller. It owns the caller's subscription
/// registry; [`AuthBridge::dispose`] tears it down.
pub struct AuthBridge {
    id: String,
    provider: Arc<dyn AuthProvider>,
    registry: SubscriptionRegistry,
    metrics: Metrics,
}

impl AuthBridge {
    /// Create a bridge that pushes subscription events into `events`.
    pub fn new(provider: Arc<dyn AuthProvider>, events: EventSink) -> Self {
        let metrics = Metrics::new();
        let registry = SubscriptionRegistry::new(Arc::clone(&provider), events, metrics.clone());
        let id = Uuid::new_v4().to_string();

        info!("Created auth bridge {id}");

        Self {
            id,
            provider,
            registry,
            metrics,
        }
    }

    /// Create a bridge together with the receiving end of its events.
    pub fn channel(
        provider: Arc<dyn AuthProvider>,
    ) -> (Self, mpsc::UnboundedReceiver<BridgeEvent>) {
        let (events, receiver) = mpsc::unbounded_channel();
        (Self::new(provider, events), receiver)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn registry(&self) -> &SubscriptionRegistry {
        &self.registry
    }

    /// Issue `call` and return its pending response without waiting.
    ///
    /// Argument errors and unknown methods are answered immediately; every
    /// other request runs on its own task. Must be called within a Tokio
    /// runtime.
    pub fn dispatch(&self, call: MethodCall) -> PendingResponse {
        let ctx = HandlerContext::new(
            Arc::clone(&self.provider),
            self.registry.clone(),
            &self.id,
            self.metrics.clone(),
        );
        let (responder, pending) = Responder::channel(call.method.clone());

        match AuthRequest::parse(&call) {
            Ok(Some(request)) => {
                self.metrics.call_received(request.method_name());
                tokio::spawn(dispatcher::dispatch(request, ctx, responder));
            }
            Ok(None) => {
                self.metrics.call_received("unknown");
                ResultAdapter::new(&ctx, responder).not_implemented();
            }
            Err(error) => {
                self.metrics.call_received("rejected");
                ResultAdapter::new(&ctx, responder).deliver(Err(error));
            }
        }

        pending
    }

    /// Dispatch `call` and wait for its response.
    pub async fn call(&self, call: MethodCall) -> BridgeResponse {
        self.dispatch(call).await
    }

    /// Stop every live subscription of this bridge.
    pub async fn dispose(&self) -> usize {
        let stopped = self.registry.dispose().await;
        info!("Disposed auth bridge {} ({stopped} subscriptions stopped)", self.id);
        stopped
    }
}
