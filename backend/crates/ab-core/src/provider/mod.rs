//! Seam to the authentication provider SDK.

pub mod auth_provider;
pub mod memory;
pub mod user_info;
