//! Turns the completion of one provider operation into its single
//! boundary response.

use crate::{
    BridgeError, BridgeResponse, HandlerContext, Metrics, RequestContext, Responder, Result,
    SubscriptionHandle, log_handler_exit,
};

use ab_core::{AuthResult, TokenResult, UserRecord, serialize_user};

use log::{error, warn};
use serde_json::Value;

/// Payload a successful operation contributes to its `success` response.
pub trait IntoResult {
    fn into_result(self) -> Result<Value>;
}

/// User-producing operations deliver the serialized session user.
impl IntoResult for AuthResult {
    fn into_result(self) -> Result<Value> {
        serialize_user(Some(self.user.as_ref())).into_result()
    }
}

/// Token retrieval delivers the raw token string.
impl IntoResult for TokenResult {
    fn into_result(self) -> Result<Value> {
        Ok(Value::String(self.token))
    }
}

impl IntoResult for Option<UserRecord> {
    fn into_result(self) -> Result<Value> {
        serde_json::to_value(self)
            .map_err(|e| BridgeError::internal(format!("User serialization failed: {e}")))
    }
}

impl IntoResult for SubscriptionHandle {
    fn into_result(self) -> Result<Value> {
        Ok(Value::from(self.0))
    }
}

/// Void operations deliver an explicit "no value" success.
impl IntoResult for () {
    fn into_result(self) -> Result<Value> {
        Ok(Value::Null)
    }
}

/// Owns the responder of one request and fulfills it once.
pub struct ResultAdapter {
    request_ctx: RequestContext,
    metrics: Metrics,
    responder: Responder,
}

impl ResultAdapter {
    pub fn new(ctx: &HandlerContext, responder: Responder) -> Self {
        Self {
            request_ctx: ctx.request_ctx.clone(),
            metrics: ctx.metrics.clone(),
            responder,
        }
    }

    /// Await `operation` and deliver its outcome. Failures are mapped once;
    /// nothing is retried.
    pub async fn complete<T, E, F>(self, operation: F)
    where
        F: Future<Output = std::result::Result<T, E>>,
        T: IntoResult,
        E: Into<BridgeError>,
    {
        let outcome = operation
            .await
            .map_err(Into::<BridgeError>::into)
            .and_then(IntoResult::into_result);
        self.deliver(outcome);
    }

    pub fn deliver(self, outcome: Result<Value>) {
        let response = match outcome {
            Ok(result) => BridgeResponse::Success { result },
            Err(error) => {
                self.record_failure(&error);
                error.to_response()
            }
        };
        self.finish(response);
    }

    pub fn not_implemented(self) {
        self.finish(BridgeResponse::NotImplemented);
    }

    fn record_failure(&self, error: &BridgeError) {
        match error {
            BridgeError::ProviderOperationFailed { message, .. } => {
                warn!(
                    "{} Provider rejected {}: {}",
                    self.request_ctx.log_prefix(),
                    self.responder.method(),
                    message
                );
                self.metrics.provider_failure(self.responder.method());
            }
            BridgeError::Internal { .. } => {
                error!("{} {}", self.request_ctx.log_prefix(), error);
            }
            _ => {}
        }
    }

    fn finish(self, response: BridgeResponse) {
        log_handler_exit!(self.request_ctx, self.responder.method(), response);
        self.metrics.response_sent(response.status());
        self.metrics.call_latency(self.request_ctx.started_at.elapsed());
        self.responder.respond(response);
    }
}
