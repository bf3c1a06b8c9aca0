use crate::{PASSWORD_PROVIDER_ID, PHONE_PROVIDER_ID};

use std::fmt;

/// Credential handed to the provider for linking or re-authentication.
#[derive(Clone, PartialEq, Eq)]
pub enum AuthCredential {
    EmailPassword { email: String, password: String },
    PhonePassword { phone: String, password: String },
}

impl AuthCredential {
    pub fn email<E: Into<String>, P: Into<String>>(email: E, password: P) -> Self {
        Self::EmailPassword {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn phone<N: Into<String>, P: Into<String>>(phone: N, password: P) -> Self {
        Self::PhonePassword {
            phone: phone.into(),
            password: password.into(),
        }
    }

    /// Provider id of the profile this credential links to.
    pub fn provider_id(&self) -> &'static str {
        match self {
            Self::EmailPassword { .. } => PASSWORD_PROVIDER_ID,
            Self::PhonePassword { .. } => PHONE_PROVIDER_ID,
        }
    }

    pub fn password(&self) -> &str {
        match self {
            Self::EmailPassword { password, .. } | Self::PhonePassword { password, .. } => password,
        }
    }
}

// Passwords never reach the logs.
impl fmt::Debug for AuthCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmailPassword { email, .. } => f
                .debug_struct("EmailPassword")
                .field("email", email)
                .field("password", &"<redacted>")
                .finish(),
            Self::PhonePassword { phone, .. } => f
                .debug_struct("PhonePassword")
                .field("phone", phone)
                .field("password", &"<redacted>")
                .finish(),
        }
    }
}
