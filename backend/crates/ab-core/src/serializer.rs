//! Flattens provider user objects into [`UserRecord`] / [`ProviderProfile`].

use crate::{ProviderProfile, User, UserInfo, UserRecord};

/// Serialize the session user; `None` means no authenticated session.
pub fn serialize_user(user: Option<&dyn User>) -> Option<UserRecord> {
    let user = user?;

    let provider_data = user
        .provider_data()
        .into_iter()
        .map(serialize_provider_profile)
        .collect();

    Some(UserRecord {
        provider_id: user.provider_id().to_owned(),
        uid: user.uid().to_owned(),
        display_name: user.display_name().map(str::to_owned),
        photo_url: user.photo_url().map(str::to_owned),
        email: user.email().map(str::to_owned),
        phone: user.phone().map(str::to_owned),
        provider_data,
        is_anonymous: user.is_anonymous(),
        is_email_verified: user.is_email_verified(),
        is_phone_verified: user.is_phone_verified(),
    })
}

pub fn serialize_provider_profile(profile: &dyn UserInfo) -> ProviderProfile {
    ProviderProfile {
        provider_id: profile.provider_id().to_owned(),
        uid: profile.uid().to_owned(),
        display_name: profile.display_name().map(str::to_owned),
        photo_url: profile.photo_url().map(str::to_owned),
        email: profile.email().map(str::to_owned),
        phone: profile.phone().map(str::to_owned),
    }
}
