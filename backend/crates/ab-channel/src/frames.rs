//! Transport framing used by the host to carry calls, responses and events.

use crate::{Arguments, BridgeError, BridgeEvent, BridgeResponse, MethodCall, Result};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InboundFrame {
    Call {
        /// Caller-chosen id echoed on the matching response frame
        id: u64,
        method: String,
        #[serde(default)]
        arguments: Option<Arguments>,
    },
}

impl InboundFrame {
    pub fn parse(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Split into the correlation id and the boundary request.
    pub fn into_call(self) -> (u64, MethodCall) {
        match self {
            Self::Call {
                id,
                method,
                arguments,
            } => (id, MethodCall::new(method, arguments.unwrap_or_default())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutboundFrame {
    Response { id: u64, response: BridgeResponse },
    Event { event: BridgeEvent },
    InvalidFrame { message: String },
}

impl OutboundFrame {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| BridgeError::internal(format!("Frame encoding failed: {e}")))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Response { .. } => "response",
            Self::Event { .. } => "event",
            Self::InvalidFrame { .. } => "invalid_frame",
        }
    }
}
