//! Serialized shape of one identity method linked to an account.

use serde::{Deserialize, Serialize};

/// One linked identity-provider profile.
///
/// Optional fields are omitted from the wire form when unset, never sent as
/// `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderProfile {
    /// Which identity method issued this profile (e.g. "password", "phone")
    pub provider_id: String,
    /// Account identifier under that provider
    pub uid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}
