use crate::{
    BridgeResponse, INTERNAL_ERROR, INVALID_ARGUMENT, INVALID_FRAME, LISTENER_NOT_FOUND,
    MISSING_ARGUMENT, PROVIDER_OPERATION_FAILED, SubscriptionHandle,
};

use ab_core::ProviderError;

use std::panic::Location;

use error_location::ErrorLocation;
use serde_json::{Value, json};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Missing argument '{key}' {location}")]
    MissingArgument {
        key: String,
        location: ErrorLocation,
    },

    #[error("Argument '{key}' must be a {expected} {location}")]
    InvalidArgument {
        key: String,
        expected: &'static str,
        location: ErrorLocation,
    },

    #[error("Provider operation failed: {message} {location}")]
    ProviderOperationFailed {
        message: String,
        cause: Option<String>,
        location: ErrorLocation,
    },

    #[error("Listener with identifier '{handle}' not found. {location}")]
    ListenerNotFound {
        handle: SubscriptionHandle,
        location: ErrorLocation,
    },

    #[error("Invalid frame: {source} {location}")]
    InvalidFrame {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl BridgeError {
    #[track_caller]
    pub fn missing_argument<S: Into<String>>(key: S) -> Self {
        Self::MissingArgument {
            key: key.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_argument<S: Into<String>>(key: S, expected: &'static str) -> Self {
        Self::InvalidArgument {
            key: key.into(),
            expected,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn listener_not_found(handle: SubscriptionHandle) -> Self {
        Self::ListenerNotFound {
            handle,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Convert to the `error` response delivered across the boundary.
    pub fn to_response(&self) -> BridgeResponse {
        BridgeResponse::Error {
            code: self.error_code().to_string(),
            message: self.boundary_message(),
            details: self.details(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingArgument { .. } => MISSING_ARGUMENT,
            Self::InvalidArgument { .. } => INVALID_ARGUMENT,
            Self::ProviderOperationFailed { .. } => PROVIDER_OPERATION_FAILED,
            Self::ListenerNotFound { .. } => LISTENER_NOT_FOUND,
            Self::InvalidFrame { .. } => INVALID_FRAME,
            Self::Internal { .. } => INTERNAL_ERROR,
        }
    }

    /// Message without the source location; provider messages pass through raw.
    pub fn boundary_message(&self) -> String {
        match self {
            Self::MissingArgument { key, .. } => format!("Missing required argument '{key}'."),
            Self::InvalidArgument { key, expected, .. } => {
                format!("Argument '{key}' must be a {expected}.")
            }
            Self::ProviderOperationFailed { message, .. } => message.clone(),
            Self::ListenerNotFound { handle, .. } => {
                format!("Listener with identifier '{handle}' not found.")
            }
            Self::InvalidFrame { source, .. } => source.to_string(),
            Self::Internal { message, .. } => message.clone(),
        }
    }

    fn details(&self) -> Option<Value> {
        match self {
            Self::MissingArgument { key, .. } => Some(json!({ "key": key })),
            Self::InvalidArgument { key, expected, .. } => {
                Some(json!({ "key": key, "expected": expected }))
            }
            Self::ProviderOperationFailed { cause, .. } => {
                cause.as_ref().map(|cause| json!({ "cause": cause }))
            }
            Self::ListenerNotFound { handle, .. } => Some(json!({ "id": handle })),
            Self::InvalidFrame { .. } | Self::Internal { .. } => None,
        }
    }
}

impl From<ProviderError> for BridgeError {
    #[track_caller]
    fn from(error: ProviderError) -> Self {
        Self::ProviderOperationFailed {
            message: error.message().to_string(),
            cause: error.cause().map(|cause| cause.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for BridgeError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::InvalidFrame {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, BridgeError>;
