pub mod auth_credential;
pub mod profile_change;
pub mod provider_profile;
pub mod user_record;
