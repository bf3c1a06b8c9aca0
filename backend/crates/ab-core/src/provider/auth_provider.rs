use crate::{AuthCredential, ProfileChange, ProviderResult, SessionUser};

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

/// Callback invoked with the current session user (or `None` when signed
/// out) on registration, sign-in, sign-out, user change and token change.
///
/// Providers may invoke it from any thread.
pub type AuthStateListener = Arc<dyn Fn(Option<SessionUser>) + Send + Sync>;

/// Provider-side identity of a registered [`AuthStateListener`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome of an operation that establishes or changes the session.
#[derive(Clone)]
pub struct AuthResult {
    pub user: SessionUser,
}

impl AuthResult {
    pub fn new(user: SessionUser) -> Self {
        Self { user }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenResult {
    pub token: String,
}

/// Operations of an authentication provider SDK.
///
/// User-scoped operations act on the provider's current session and fail
/// with a provider error when nobody is signed in.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn current_user(&self) -> Option<SessionUser>;

    async fn sign_in_anonymously(&self) -> ProviderResult<AuthResult>;

    async fn create_user_with_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> ProviderResult<AuthResult>;

    async fn sign_in_with_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> ProviderResult<AuthResult>;

    async fn create_user_with_phone_and_password(
        &self,
        phone: &str,
        password: &str,
    ) -> ProviderResult<AuthResult>;

    async fn sign_in_with_phone_and_password(
        &self,
        phone: &str,
        password: &str,
    ) -> ProviderResult<AuthResult>;

    async fn link_with_credential(&self, credential: AuthCredential)
    -> ProviderResult<AuthResult>;

    async fn reauthenticate(&self, credential: AuthCredential) -> ProviderResult<()>;

    async fn update_profile(&self, change: ProfileChange) -> ProviderResult<()>;

    async fn update_password(&self, password: &str) -> ProviderResult<()>;

    async fn update_email(&self, email: &str) -> ProviderResult<()>;

    async fn update_phone(&self, phone: &str) -> ProviderResult<()>;

    async fn send_email_verification(&self) -> ProviderResult<()>;

    async fn send_phone_verification(&self) -> ProviderResult<()>;

    async fn verify_phone(&self, sms_code: &str) -> ProviderResult<()>;

    async fn send_password_reset_email(&self, email: &str) -> ProviderResult<()>;

    async fn send_password_reset_sms(&self, phone: &str) -> ProviderResult<()>;

    async fn confirm_password_reset_sms(
        &self,
        phone: &str,
        sms_code: &str,
        new_password: &str,
    ) -> ProviderResult<()>;

    async fn delete_user(&self) -> ProviderResult<()>;

    async fn get_token(&self, force_refresh: bool) -> ProviderResult<TokenResult>;

    /// Ends the session. Never fails.
    async fn sign_out(&self);

    /// Registers `listener`; the provider fires it once right away.
    async fn add_auth_state_listener(&self, listener: AuthStateListener) -> ListenerId;

    /// Returns `false` when `id` was not registered.
    async fn remove_auth_state_listener(&self, id: ListenerId) -> bool;
}
