use crate::{
    ANONYMOUS_PROVIDER_ID, PASSWORD_PROVIDER_ID, PHONE_PROVIDER_ID, User, UserInfo,
};

/// Provider id reported by session users of the in-process provider.
pub(crate) const MEMORY_PROVIDER_ID: &str = "memory";

/// Stored account.
#[derive(Debug, Clone)]
pub(crate) struct Account {
    pub uid: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
    pub anonymous: bool,
    pub email_verified: bool,
    pub phone_verified: bool,
    /// Linked provider ids in link order
    pub linked: Vec<&'static str>,
}

impl Account {
    pub fn anonymous(uid: String) -> Self {
        Self {
            uid,
            email: None,
            phone: None,
            password: None,
            display_name: None,
            photo_url: None,
            anonymous: true,
            email_verified: false,
            phone_verified: false,
            linked: vec![ANONYMOUS_PROVIDER_ID],
        }
    }

    pub fn with_email(uid: String, email: &str, password: &str) -> Self {
        Self {
            email: Some(email.to_owned()),
            password: Some(password.to_owned()),
            anonymous: false,
            linked: vec![PASSWORD_PROVIDER_ID],
            ..Self::anonymous(uid)
        }
    }

    pub fn with_phone(uid: String, phone: &str, password: &str) -> Self {
        Self {
            phone: Some(phone.to_owned()),
            password: Some(password.to_owned()),
            anonymous: false,
            linked: vec![PHONE_PROVIDER_ID],
            ..Self::anonymous(uid)
        }
    }

    pub fn link(&mut self, provider_id: &'static str) {
        if !self.linked.contains(&provider_id) {
            self.linked.push(provider_id);
        }
    }

    /// Snapshot of the account as the provider hands it out.
    pub fn snapshot(&self) -> MemoryUser {
        let profiles = self
            .linked
            .iter()
            .map(|provider_id| self.profile(provider_id))
            .collect();

        MemoryUser {
            info: MemoryProfile {
                provider_id: MEMORY_PROVIDER_ID.to_owned(),
                uid: self.uid.clone(),
                display_name: self.display_name.clone(),
                photo_url: self.photo_url.clone(),
                email: self.email.clone(),
                phone: self.phone.clone(),
            },
            anonymous: self.anonymous,
            email_verified: self.email_verified,
            phone_verified: self.phone_verified,
            profiles,
        }
    }

    fn profile(&self, provider_id: &str) -> MemoryProfile {
        let uid = match provider_id {
            PASSWORD_PROVIDER_ID => self.email.clone(),
            PHONE_PROVIDER_ID => self.phone.clone(),
            _ => None,
        }
        .unwrap_or_else(|| self.uid.clone());

        MemoryProfile {
            provider_id: provider_id.to_owned(),
            uid,
            display_name: self.display_name.clone(),
            photo_url: self.photo_url.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }
}

/// Linked profile of a [`MemoryUser`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryProfile {
    pub provider_id: String,
    pub uid: String,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl UserInfo for MemoryProfile {
    fn provider_id(&self) -> &str {
        &self.provider_id
    }

    fn uid(&self) -> &str {
        &self.uid
    }

    fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    fn photo_url(&self) -> Option<&str> {
        self.photo_url.as_deref()
    }

    fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }
}

/// Session user handed out by the in-process provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryUser {
    pub info: MemoryProfile,
    pub anonymous: bool,
    pub email_verified: bool,
    pub phone_verified: bool,
    pub profiles: Vec<MemoryProfile>,
}

impl UserInfo for MemoryUser {
    fn provider_id(&self) -> &str {
        self.info.provider_id()
    }

    fn uid(&self) -> &str {
        self.info.uid()
    }

    fn display_name(&self) -> Option<&str> {
        self.info.display_name()
    }

    fn photo_url(&self) -> Option<&str> {
        self.info.photo_url()
    }

    fn email(&self) -> Option<&str> {
        self.info.email()
    }

    fn phone(&self) -> Option<&str> {
        self.info.phone()
    }
}

impl User for MemoryUser {
    fn is_anonymous(&self) -> bool {
        self.anonymous
    }

    fn is_email_verified(&self) -> bool {
        self.email_verified
    }

    fn is_phone_verified(&self) -> bool {
        self.phone_verified
    }

    fn provider_data(&self) -> Vec<&dyn UserInfo> {
        self.profiles
            .iter()
            .map(|profile| profile as &dyn UserInfo)
            .collect()
    }
}
