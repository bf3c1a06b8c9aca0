pub mod arguments;
pub mod auth_request;
pub mod bridge;
pub mod bridge_event;
pub mod bridge_response;
pub mod error;
pub mod frames;
pub mod handlers;
pub mod method_call;
pub mod method_names;
pub mod metrics;
pub mod request_context;
pub mod request_logging;
pub mod responder;
pub mod subscription_handle;
pub mod subscription_registry;

pub use arguments::Arguments;
pub use auth_request::AuthRequest;
pub use bridge::AuthBridge;
pub use bridge_event::BridgeEvent;
pub use bridge_response::BridgeResponse;
pub use error::{BridgeError, Result};
pub use frames::{InboundFrame, OutboundFrame};
pub use handlers::context::HandlerContext;
pub use handlers::error_codes::{
    INTERNAL_ERROR, INVALID_ARGUMENT, INVALID_FRAME, LISTENER_NOT_FOUND, MISSING_ARGUMENT,
    PROVIDER_OPERATION_FAILED,
};
pub use method_call::MethodCall;
pub use metrics::Metrics;
pub use request_context::RequestContext;
pub use responder::{PendingResponse, Responder};
pub use subscription_handle::SubscriptionHandle;
pub use subscription_registry::{EventSink, SubscriptionRegistry};

#[cfg(test)]
mod tests;
