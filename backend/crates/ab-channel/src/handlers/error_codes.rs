//! Stable error codes carried by `error` responses.

/// The wrapped provider call completed with a failure
pub const PROVIDER_OPERATION_FAILED: &str = "PROVIDER_OPERATION_FAILED";

/// Stop requested for a handle the registry does not hold
pub const LISTENER_NOT_FOUND: &str = "LISTENER_NOT_FOUND";

/// Required argument absent or null
pub const MISSING_ARGUMENT: &str = "MISSING_ARGUMENT";

/// Argument present with the wrong type
pub const INVALID_ARGUMENT: &str = "INVALID_ARGUMENT";

/// Transport frame could not be parsed
pub const INVALID_FRAME: &str = "INVALID_FRAME";

/// Bridge-side failure (serialization, abandoned operation, disposed bridge)
pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
