//! Provider fake with a fixed session user and scripted outcomes.

use ab_core::{
    AuthCredential, AuthProvider, AuthResult, AuthStateListener, ListenerId, ProfileChange,
    ProviderError, ProviderResult, SessionUser, TokenResult, User, UserInfo,
};

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

pub const NO_SESSION_MESSAGE: &str = "No user is currently signed in.";

#[derive(Debug, Clone)]
pub struct ScriptedProfile {
    pub provider_id: String,
    pub uid: String,
    pub email: Option<String>,
}

impl ScriptedProfile {
    pub fn new(provider_id: &str, uid: &str) -> Self {
        Self {
            provider_id: provider_id.to_string(),
            uid: uid.to_string(),
            email: None,
        }
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.email = Some(email.to_string());
        self
    }
}

impl UserInfo for ScriptedProfile {
    fn provider_id(&self) -> &str {
        &self.provider_id
    }
    fn uid(&self) -> &str {
        &self.uid
    }
    fn display_name(&self) -> Option<&str> {
        None
    }
    fn photo_url(&self) -> Option<&str> {
        None
    }
    fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
    fn phone(&self) -> Option<&str> {
        None
    }
}

#[derive(Debug, Clone)]
pub struct ScriptedUser {
    pub uid: String,
    pub email: Option<String>,
    pub anonymous: bool,
    pub profiles: Vec<ScriptedProfile>,
}

impl ScriptedUser {
    /// "u1" signed in by email, upgraded from an anonymous account.
    pub fn upgraded_email_user() -> Self {
        Self {
            uid: "u1".to_string(),
            email: Some("a@b.com".to_string()),
            anonymous: false,
            profiles: vec![
                ScriptedProfile::new("password", "a@b.com").with_email("a@b.com"),
                ScriptedProfile::new("anonymous", "u1"),
            ],
        }
    }
}

impl UserInfo for ScriptedUser {
    fn provider_id(&self) -> &str {
        "scripted"
    }
    fn uid(&self) -> &str {
        &self.uid
    }
    fn display_name(&self) -> Option<&str> {
        None
    }
    fn photo_url(&self) -> Option<&str> {
        None
    }
    fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
    fn phone(&self) -> Option<&str> {
        None
    }
}

impl User for ScriptedUser {
    fn is_anonymous(&self) -> bool {
        self.anonymous
    }
    fn is_email_verified(&self) -> bool {
        false
    }
    fn is_phone_verified(&self) -> bool {
        false
    }
    fn provider_data(&self) -> Vec<&dyn UserInfo> {
        self.profiles
            .iter()
            .map(|profile| profile as &dyn UserInfo)
            .collect()
    }
}

/// Records every provider operation it receives and answers each one
/// after `delay`, with the scripted user or the scripted failure.
pub struct ScriptedProvider {
    user: Mutex<Option<SessionUser>>,
    failure: Mutex<Option<String>>,
    delay: Duration,
    calls: Mutex<Vec<String>>,
    listeners: Mutex<HashMap<u64, AuthStateListener>>,
    next_listener_id: AtomicU64,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self {
            user: Mutex::new(None),
            failure: Mutex::new(None),
            delay: Duration::ZERO,
            calls: Mutex::new(Vec::new()),
            listeners: Mutex::new(HashMap::new()),
            next_listener_id: AtomicU64::new(0),
        }
    }

    pub fn with_user(self, user: ScriptedUser) -> Self {
        *self.user.lock().unwrap() = Some(Arc::new(user));
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Every operation fails with `message`.
    pub fn failing(self, message: &str) -> Self {
        *self.failure.lock().unwrap() = Some(message.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.lock().unwrap().len()
    }

    async fn record(&self, call: String) -> ProviderResult<()> {
        self.calls.lock().unwrap().push(call);

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let failure = self.failure.lock().unwrap().clone();
        match failure {
            Some(message) => Err(ProviderError::new(message)),
            None => Ok(()),
        }
    }

    async fn user_result(&self, call: String) -> ProviderResult<AuthResult> {
        self.record(call).await?;
        self.user
            .lock()
            .unwrap()
            .clone()
            .map(AuthResult::new)
            .ok_or_else(|| ProviderError::new(NO_SESSION_MESSAGE))
    }

    fn notify(&self) {
        let user = self.user.lock().unwrap().clone();
        let listeners: Vec<AuthStateListener> =
            self.listeners.lock().unwrap().values().cloned().collect();
        for listener in listeners {
            listener(user.clone());
        }
    }
}

#[async_trait]
impl AuthProvider for ScriptedProvider {
    async fn current_user(&self) -> Option<SessionUser> {
        self.user.lock().unwrap().clone()
    }

    async fn sign_in_anonymously(&self) -> ProviderResult<AuthResult> {
        self.user_result("sign_in_anonymously".to_string()).await
    }

    async fn create_user_with_email_and_password(
        &self,
        email: &str,
        _password: &str,
    ) -> ProviderResult<AuthResult> {
        self.user_result(format!("create_user_with_email_and_password({email})"))
            .await
    }

    async fn sign_in_with_email_and_password(
        &self,
        email: &str,
        _password: &str,
    ) -> ProviderResult<AuthResult> {
        self.user_result(format!("sign_in_with_email_and_password({email})"))
            .await
    }

    async fn create_user_with_phone_and_password(
        &self,
        phone: &str,
        _password: &str,
    ) -> ProviderResult<AuthResult> {
        self.user_result(format!("create_user_with_phone_and_password({phone})"))
            .await
    }

    async fn sign_in_with_phone_and_password(
        &self,
        phone: &str,
        _password: &str,
    ) -> ProviderResult<AuthResult> {
        self.user_result(format!("sign_in_with_phone_and_password({phone})"))
            .await
    }

    async fn link_with_credential(
        &self,
        credential: AuthCredential,
    ) -> ProviderResult<AuthResult> {
        self.user_result(format!("link_with_credential({})", credential.provider_id()))
            .await
    }

    async fn reauthenticate(&self, credential: AuthCredential) -> ProviderResult<()> {
        self.record(format!("reauthenticate({})", credential.provider_id()))
            .await
    }

    async fn update_profile(&self, change: ProfileChange) -> ProviderResult<()> {
        self.record(format!(
            "update_profile({}, {})",
            change.display_name.unwrap_or_default(),
            change.photo_url.unwrap_or_default()
        ))
        .await
    }

    async fn update_password(&self, _password: &str) -> ProviderResult<()> {
        self.record("update_password".to_string()).await
    }

    async fn update_email(&self, email: &str) -> ProviderResult<()> {
        self.record(format!("update_email({email})")).await
    }

    async fn update_phone(&self, phone: &str) -> ProviderResult<()> {
        self.record(format!("update_phone({phone})")).await
    }

    async fn send_email_verification(&self) -> ProviderResult<()> {
        self.record("send_email_verification".to_string()).await
    }

    async fn send_phone_verification(&self) -> ProviderResult<()> {
        self.record("send_phone_verification".to_string()).await
    }

    async fn verify_phone(&self, sms_code: &str) -> ProviderResult<()> {
        self.record(format!("verify_phone({sms_code})")).await
    }

    async fn send_password_reset_email(&self, email: &str) -> ProviderResult<()> {
        self.record(format!("send_password_reset_email({email})"))
            .await
    }

    async fn send_password_reset_sms(&self, phone: &str) -> ProviderResult<()> {
        self.record(format!("send_password_reset_sms({phone})")).await
    }

    async fn confirm_password_reset_sms(
        &self,
        phone: &str,
        sms_code: &str,
        _new_password: &str,
    ) -> ProviderResult<()> {
        self.record(format!("confirm_password_reset_sms({phone}, {sms_code})"))
            .await
    }

    async fn delete_user(&self) -> ProviderResult<()> {
        self.record("delete_user".to_string()).await
    }

    async fn get_token(&self, force_refresh: bool) -> ProviderResult<TokenResult> {
        self.record(format!("get_token({force_refresh})")).await?;
        let user = self.user.lock().unwrap().clone();
        match user {
            Some(user) => Ok(TokenResult {
                token: format!("token-{}", user.uid()),
            }),
            None => Err(ProviderError::new(NO_SESSION_MESSAGE)),
        }
    }

    async fn sign_out(&self) {
        self.calls.lock().unwrap().push("sign_out".to_string());
        *self.user.lock().unwrap() = None;
        self.notify();
    }

    async fn add_auth_state_listener(&self, listener: AuthStateListener) -> ListenerId {
        let id = self.next_listener_id.fetch_add(1, Ordering::SeqCst);
        self.listeners
            .lock()
            .unwrap()
            .insert(id, Arc::clone(&listener));

        let user = self.user.lock().unwrap().clone();
        listener(user);

        ListenerId(id)
    }

    async fn remove_auth_state_listener(&self, id: ListenerId) -> bool {
        self.listeners.lock().unwrap().remove(&id.0).is_some()
    }
}
