use crate::SubscriptionHandle;

use ab_core::UserRecord;

use serde::{Deserialize, Serialize};

/// Asynchronous event pushed across the boundary outside of any response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", content = "arguments")]
pub enum BridgeEvent {
    /// Auth state changed for subscription `id`; `user` is absent when
    /// nobody is signed in.
    #[serde(rename = "onAuthStateChanged")]
    AuthStateChanged {
        id: SubscriptionHandle,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        user: Option<UserRecord>,
    },
}

impl BridgeEvent {
    pub fn handle(&self) -> SubscriptionHandle {
        match self {
            Self::AuthStateChanged { id, .. } => *id,
        }
    }
}
