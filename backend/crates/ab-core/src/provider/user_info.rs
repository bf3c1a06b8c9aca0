use std::sync::Arc;

/// Identity fields shared by a session user and each of its linked profiles.
pub trait UserInfo: Send + Sync {
    fn provider_id(&self) -> &str;
    fn uid(&self) -> &str;
    fn display_name(&self) -> Option<&str>;
    fn photo_url(&self) -> Option<&str>;
    fn email(&self) -> Option<&str>;
    fn phone(&self) -> Option<&str>;
}

/// The provider's live session user.
pub trait User: UserInfo {
    fn is_anonymous(&self) -> bool;
    fn is_email_verified(&self) -> bool;
    fn is_phone_verified(&self) -> bool;

    /// Linked identity profiles, in the provider's enumeration order.
    fn provider_data(&self) -> Vec<&dyn UserInfo>;
}

/// Shared handle to a session user as returned by the provider.
pub type SessionUser = Arc<dyn User>;
