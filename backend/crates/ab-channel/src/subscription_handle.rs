use std::fmt;

use serde::{Deserialize, Serialize};

/// Integer identifying one auth-state subscription of a bridge.
///
/// Issued from 0 upward and never reused, even after the subscription stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubscriptionHandle(pub i64);

impl fmt::Display for SubscriptionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for SubscriptionHandle {
    fn from(value: i64) -> Self {
        Self(value)
    }
}
