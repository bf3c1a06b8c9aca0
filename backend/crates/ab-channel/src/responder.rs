use crate::{BridgeResponse, INTERNAL_ERROR};

use std::pin::Pin;
use std::task::{Context, Poll};

use log::warn;
use tokio::sync::oneshot;

const ABANDONED_MESSAGE: &str = "Operation abandoned before completion.";

/// The single response slot of one in-flight request.
///
/// Every completing method consumes the responder, so a slot cannot be
/// fulfilled twice. Dropping an unfulfilled responder delivers an
/// `INTERNAL_ERROR`, so it cannot be left empty either.
pub struct Responder {
    sender: Option<oneshot::Sender<BridgeResponse>>,
    method: String,
}

impl Responder {
    /// Create a responder and the pending response it fulfills.
    pub fn channel<S: Into<String>>(method: S) -> (Responder, PendingResponse) {
        let (sender, receiver) = oneshot::channel();
        let responder = Responder {
            sender: Some(sender),
            method: method.into(),
        };
        (responder, PendingResponse { receiver })
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn respond(mut self, response: BridgeResponse) {
        self.deliver(response);
    }

    fn deliver(&mut self, response: BridgeResponse) {
        if let Some(sender) = self.sender.take() {
            // The caller may have stopped waiting; nothing else to notify.
            let _ = sender.send(response);
        }
    }
}

impl Drop for Responder {
    fn drop(&mut self) {
        if self.sender.is_some() {
            warn!("Responder for {} dropped without a response", self.method);
            self.deliver(abandoned());
        }
    }
}

/// Receiving half of a [`Responder`]; resolves to exactly one response.
pub struct PendingResponse {
    receiver: oneshot::Receiver<BridgeResponse>,
}

impl Future for PendingResponse {
    type Output = BridgeResponse;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.receiver)
            .poll(cx)
            .map(|received| received.unwrap_or_else(|_| abandoned()))
    }
}

fn abandoned() -> BridgeResponse {
    BridgeResponse::Error {
        code: INTERNAL_ERROR.to_string(),
        message: ABANDONED_MESSAGE.to_string(),
        details: None,
    }
}
