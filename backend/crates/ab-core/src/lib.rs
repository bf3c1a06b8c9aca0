pub mod error;
pub mod models;
pub mod provider;
pub mod serializer;

pub use error::{ProviderError, ProviderResult};
pub use models::auth_credential::AuthCredential;
pub use models::profile_change::ProfileChange;
pub use models::provider_profile::ProviderProfile;
pub use models::user_record::UserRecord;
pub use provider::auth_provider::{
    AuthProvider, AuthResult, AuthStateListener, ListenerId, TokenResult,
};
pub use provider::memory::{MemoryProvider, MemoryProviderOptions};
pub use provider::user_info::{SessionUser, User, UserInfo};
pub use serializer::{serialize_provider_profile, serialize_user};

pub use error_location::ErrorLocation;

/// Provider id of email/password credentials and profiles.
pub const PASSWORD_PROVIDER_ID: &str = "password";
/// Provider id of phone/password credentials and profiles.
pub const PHONE_PROVIDER_ID: &str = "phone";
/// Provider id of the profile created by an anonymous sign-in.
pub const ANONYMOUS_PROVIDER_ID: &str = "anonymous";

#[cfg(test)]
mod tests;
