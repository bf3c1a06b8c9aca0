use crate::ErrorLocation;

use std::error::Error as StdError;
use std::panic::Location;
use std::result::Result as StdResult;

use thiserror::Error;

/// Failure reported by an authentication provider operation.
///
/// `message` is the provider's own diagnostic text and is carried to the
/// boundary untouched.
#[derive(Error, Debug)]
#[error("{message} {location}")]
pub struct ProviderError {
    message: String,
    #[source]
    cause: Option<Box<dyn StdError + Send + Sync + 'static>>,
    location: ErrorLocation,
}

impl ProviderError {
    #[track_caller]
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
            cause: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn with_cause<S, E>(message: S, cause: E) -> Self
    where
        S: Into<String>,
        E: StdError + Send + Sync + 'static,
    {
        Self {
            message: message.into(),
            cause: Some(Box::new(cause)),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The provider's raw diagnostic message.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    pub fn location(&self) -> &ErrorLocation {
        &self.location
    }
}

pub type ProviderResult<T> = StdResult<T, ProviderError>;
