//! Serialized shape of the signed-in user.

use crate::ProviderProfile;

use serde::{Deserialize, Serialize};

/// Transfer-safe snapshot of a session user.
///
/// Built fresh from the provider's live session object for every response or
/// event that carries it; never cached. Field order is the wire key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub provider_id: String,
    /// Account identifier, always present
    pub uid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Linked profiles in provider enumeration order
    pub provider_data: Vec<ProviderProfile>,
    pub is_anonymous: bool,
    pub is_email_verified: bool,
    pub is_phone_verified: bool,
}

