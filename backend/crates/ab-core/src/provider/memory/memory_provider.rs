use super::account::Account;
use crate::{
    AuthCredential, AuthProvider, AuthResult, AuthStateListener, ListenerId, MemoryProviderOptions,
    PASSWORD_PROVIDER_ID, PHONE_PROVIDER_ID, ProfileChange, ProviderError, ProviderResult,
    SessionUser, TokenResult,
};

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use log::{debug, info};
use rand::Rng;
use tokio::sync::Mutex;
use uuid::Uuid;

const MIN_PASSWORD_LENGTH: usize = 6;

const ERR_NO_SESSION: &str = "No user is currently signed in.";
const ERR_BAD_EMAIL: &str = "The email address is badly formatted.";
const ERR_BAD_PHONE: &str = "The phone number is badly formatted.";
const ERR_WEAK_PASSWORD: &str = "The password must be 6 characters long or more.";
const ERR_EMAIL_IN_USE: &str = "The email address is already in use by another account.";
const ERR_PHONE_IN_USE: &str = "The phone number is already in use by another account.";
const ERR_USER_NOT_FOUND: &str = "There is no user record corresponding to this identifier.";
const ERR_WRONG_PASSWORD: &str = "The password is invalid or the user does not have a password.";
const ERR_CREDENTIAL_MISMATCH: &str =
    "The supplied credentials do not correspond to the signed-in user.";
const ERR_INVALID_SMS_CODE: &str = "The SMS verification code is invalid.";
const ERR_NO_EMAIL: &str = "The user has no email address.";
const ERR_NO_PHONE: &str = "The user has no phone number.";

#[derive(Default)]
struct ProviderState {
    accounts: HashMap<String, Account>,
    current_uid: Option<String>,
    token: Option<String>,
    /// Outstanding password-reset codes by phone
    reset_codes: HashMap<String, String>,
    /// Outstanding verification codes by phone
    verification_codes: HashMap<String, String>,
    /// Last code texted to each phone
    sent_sms: HashMap<String, String>,
}

impl ProviderState {
    fn current(&self) -> ProviderResult<&Account> {
        self.current_uid
            .as_ref()
            .and_then(|uid| self.accounts.get(uid))
            .ok_or_else(|| ProviderError::new(ERR_NO_SESSION))
    }

    fn current_mut(&mut self) -> ProviderResult<&mut Account> {
        match self.current_uid.as_ref() {
            Some(uid) => self
                .accounts
                .get_mut(uid)
                .ok_or_else(|| ProviderError::new(ERR_NO_SESSION)),
            None => Err(ProviderError::new(ERR_NO_SESSION)),
        }
    }

    fn find_by_email(&self, email: &str) -> Option<&Account> {
        self.accounts
            .values()
            .find(|account| account.email.as_deref() == Some(email))
    }

    fn find_by_phone(&self, phone: &str) -> Option<&Account> {
        self.accounts
            .values()
            .find(|account| account.phone.as_deref() == Some(phone))
    }

    fn email_taken_by_other(&self, email: &str) -> bool {
        self.find_by_email(email)
            .is_some_and(|account| Some(&account.uid) != self.current_uid.as_ref())
    }

    fn phone_taken_by_other(&self, phone: &str) -> bool {
        self.find_by_phone(phone)
            .is_some_and(|account| Some(&account.uid) != self.current_uid.as_ref())
    }

    fn begin_session(&mut self, uid: String) -> ProviderResult<SessionUser> {
        let user: SessionUser = match self.accounts.get(&uid) {
            Some(account) => Arc::new(account.snapshot()),
            None => return Err(ProviderError::new(ERR_USER_NOT_FOUND)),
        };
        self.token = Some(mint_token(&uid));
        self.current_uid = Some(uid);
        Ok(user)
    }

    fn current_snapshot(&self) -> Option<SessionUser> {
        self.current()
            .ok()
            .map(|account| Arc::new(account.snapshot()) as SessionUser)
    }
}

/// In-process [`AuthProvider`].
///
/// Backs local runs of the server and doubles as an instrumented fake in
/// tests: latency, injected failures and issued SMS codes are all
/// observable.
pub struct MemoryProvider {
    state: Mutex<ProviderState>,
    listeners: Mutex<Vec<(ListenerId, AuthStateListener)>>,
    /// Held from snapshot to last callback so listeners see changes in order
    notifications: Mutex<()>,
    failures: Mutex<VecDeque<String>>,
    next_listener_id: AtomicU64,
    operations_started: AtomicU64,
    options: MemoryProviderOptions,
}

impl MemoryProvider {
    pub fn new() -> Self {
        Self::with_options(MemoryProviderOptions::default())
    }

    pub fn with_options(options: MemoryProviderOptions) -> Self {
        Self {
            state: Mutex::new(ProviderState::default()),
            listeners: Mutex::new(Vec::new()),
            notifications: Mutex::new(()),
            failures: Mutex::new(VecDeque::new()),
            next_listener_id: AtomicU64::new(0),
            operations_started: AtomicU64::new(0),
            options,
        }
    }

    /// Make the next asynchronous operation fail with `message`.
    pub async fn fail_next<S: Into<String>>(&self, message: S) {
        self.failures.lock().await.push_back(message.into());
    }

    /// The most recent SMS code sent to `phone`.
    pub async fn last_sms_code(&self, phone: &str) -> Option<String> {
        self.state.lock().await.sent_sms.get(phone).cloned()
    }

    pub async fn listener_count(&self) -> usize {
        self.listeners.lock().await.len()
    }

    /// Number of asynchronous operations issued so far.
    pub fn operations_started(&self) -> u64 {
        self.operations_started.load(Ordering::SeqCst)
    }

    /// Runs before every asynchronous operation: applies latency and
    /// consumes an injected failure.
    async fn begin(&self, operation: &str) -> ProviderResult<()> {
        self.operations_started.fetch_add(1, Ordering::SeqCst);
        debug!("memory provider: {operation}");

        if !self.options.latency.is_zero() {
            tokio::time::sleep(self.options.latency).await;
        }

        match self.failures.lock().await.pop_front() {
            Some(message) => Err(ProviderError::new(message)),
            None => Ok(()),
        }
    }

    /// Fire every listener with the current user.
    ///
    /// Only the notification lock is held while callbacks run. A change made
    /// after the snapshot is followed by its own notification, so the last
    /// event a listener receives matches the session.
    async fn notify(&self) {
        let _ordered = self.notifications.lock().await;
        let user = self.state.lock().await.current_snapshot();
        let listeners: Vec<AuthStateListener> = self
            .listeners
            .lock()
            .await
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in listeners {
            listener(user.clone());
        }
    }

    fn issue_sms_code(&self, state: &mut ProviderState, phone: &str) -> String {
        let code = match &self.options.sms_code {
            Some(code) => code.clone(),
            None => format!("{:06}", rand::rng().random_range(0..1_000_000u32)),
        };
        state.sent_sms.insert(phone.to_owned(), code.clone());
        info!("memory provider: SMS code issued to {phone}");
        code
    }

    async fn sign_in_with<F>(&self, find: F, password: &str) -> ProviderResult<AuthResult>
    where
        F: FnOnce(&ProviderState) -> Option<&Account> + Send,
    {
        let user = {
            let mut state = self.state.lock().await;
            let account = find(&*state).ok_or_else(|| ProviderError::new(ERR_USER_NOT_FOUND))?;
            if account.password.as_deref() != Some(password) {
                return Err(ProviderError::new(ERR_WRONG_PASSWORD));
            }
            let uid = account.uid.clone();
            state.begin_session(uid)?
        };

        self.notify().await;
        Ok(AuthResult::new(user))
    }

    /// Insert `account` and sign it in. `conflict` runs under the same lock
    /// as the insert.
    async fn create_with<F>(&self, account: Account, conflict: F) -> ProviderResult<AuthResult>
    where
        F: FnOnce(&ProviderState) -> ProviderResult<()> + Send,
    {
        let user = {
            let mut state = self.state.lock().await;
            conflict(&*state)?;
            let uid = account.uid.clone();
            state.accounts.insert(uid.clone(), account);
            state.begin_session(uid)?
        };

        self.notify().await;
        Ok(AuthResult::new(user))
    }

    /// Apply `change` to the current account, then notify listeners.
    async fn modify_current<F>(&self, change: F) -> ProviderResult<()>
    where
        F: FnOnce(&mut ProviderState) -> ProviderResult<()> + Send,
    {
        {
            let mut state = self.state.lock().await;
            state.current()?;
            change(&mut *state)?;
        }

        self.notify().await;
        Ok(())
    }
}

impl Default for MemoryProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthProvider for MemoryProvider {
    async fn current_user(&self) -> Option<SessionUser> {
        self.state.lock().await.current_snapshot()
    }

    async fn sign_in_anonymously(&self) -> ProviderResult<AuthResult> {
        self.begin("sign_in_anonymously").await?;
        self.create_with(Account::anonymous(new_uid()), |_| Ok(()))
            .await
    }

    async fn create_user_with_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> ProviderResult<AuthResult> {
        self.begin("create_user_with_email_and_password").await?;
        validate_email(email)?;
        validate_password(password)?;
        self.create_with(Account::with_email(new_uid(), email, password), |state| {
            match state.find_by_email(email) {
                Some(_) => Err(ProviderError::new(ERR_EMAIL_IN_USE)),
                None => Ok(()),
            }
        })
        .await
    }

    async fn sign_in_with_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> ProviderResult<AuthResult> {
        self.begin("sign_in_with_email_and_password").await?;
        validate_email(email)?;
        self.sign_in_with(|state| state.find_by_email(email), password)
            .await
    }

    async fn create_user_with_phone_and_password(
        &self,
        phone: &str,
        password: &str,
    ) -> ProviderResult<AuthResult> {
        self.begin("create_user_with_phone_and_password").await?;
        validate_phone(phone)?;
        validate_password(password)?;
        self.create_with(Account::with_phone(new_uid(), phone, password), |state| {
            match state.find_by_phone(phone) {
                Some(_) => Err(ProviderError::new(ERR_PHONE_IN_USE)),
                None => Ok(()),
            }
        })
        .await
    }

    async fn sign_in_with_phone_and_password(
        &self,
        phone: &str,
        password: &str,
    ) -> ProviderResult<AuthResult> {
        self.begin("sign_in_with_phone_and_password").await?;
        validate_phone(phone)?;
        self.sign_in_with(|state| state.find_by_phone(phone), password)
            .await
    }

    async fn link_with_credential(
        &self,
        credential: AuthCredential,
    ) -> ProviderResult<AuthResult> {
        self.begin("link_with_credential").await?;
        validate_password(credential.password())?;

        let user = {
            let mut state = self.state.lock().await;
            match &credential {
                AuthCredential::EmailPassword { email, .. } => {
                    validate_email(email)?;
                    if state.email_taken_by_other(email) {
                        return Err(ProviderError::new(ERR_EMAIL_IN_USE));
                    }
                }
                AuthCredential::PhonePassword { phone, .. } => {
                    validate_phone(phone)?;
                    if state.phone_taken_by_other(phone) {
                        return Err(ProviderError::new(ERR_PHONE_IN_USE));
                    }
                }
            }

            let account = state.current_mut()?;
            match &credential {
                AuthCredential::EmailPassword { email, .. } => {
                    account.email = Some(email.clone());
                    account.email_verified = false;
                }
                AuthCredential::PhonePassword { phone, .. } => {
                    account.phone = Some(phone.clone());
                    account.phone_verified = false;
                }
            }
            account.password = Some(credential.password().to_owned());
            account.anonymous = false;
            account.link(credential.provider_id());
            Arc::new(account.snapshot()) as SessionUser
        };

        self.notify().await;
        Ok(AuthResult::new(user))
    }

    async fn reauthenticate(&self, credential: AuthCredential) -> ProviderResult<()> {
        self.begin("reauthenticate").await?;

        let state = self.state.lock().await;
        let account = state.current()?;
        let identifier_matches = match &credential {
            AuthCredential::EmailPassword { email, .. } => account.email.as_ref() == Some(email),
            AuthCredential::PhonePassword { phone, .. } => account.phone.as_ref() == Some(phone),
        };

        if !identifier_matches {
            return Err(ProviderError::new(ERR_CREDENTIAL_MISMATCH));
        }
        if account.password.as_deref() != Some(credential.password()) {
            return Err(ProviderError::new(ERR_WRONG_PASSWORD));
        }
        Ok(())
    }

    async fn update_profile(&self, change: ProfileChange) -> ProviderResult<()> {
        self.begin("update_profile").await?;
        self.modify_current(move |state| {
            let account = state.current_mut()?;
            if let Some(display_name) = change.display_name {
                account.display_name = Some(display_name);
            }
            if let Some(photo_url) = change.photo_url {
                account.photo_url = Some(photo_url);
            }
            Ok(())
        })
        .await
    }

    async fn update_password(&self, password: &str) -> ProviderResult<()> {
        self.begin("update_password").await?;
        validate_password(password)?;

        let mut state = self.state.lock().await;
        state.current_mut()?.password = Some(password.to_owned());
        Ok(())
    }

    async fn update_email(&self, email: &str) -> ProviderResult<()> {
        self.begin("update_email").await?;
        validate_email(email)?;
        self.modify_current(|state| {
            if state.email_taken_by_other(email) {
                return Err(ProviderError::new(ERR_EMAIL_IN_USE));
            }
            let account = state.current_mut()?;
            account.email = Some(email.to_owned());
            account.email_verified = false;
            account.link(PASSWORD_PROVIDER_ID);
            Ok(())
        })
        .await
    }

    async fn update_phone(&self, phone: &str) -> ProviderResult<()> {
        self.begin("update_phone").await?;
        validate_phone(phone)?;
        self.modify_current(|state| {
            if state.phone_taken_by_other(phone) {
                return Err(ProviderError::new(ERR_PHONE_IN_USE));
            }
            let account = state.current_mut()?;
            account.phone = Some(phone.to_owned());
            account.phone_verified = false;
            account.link(PHONE_PROVIDER_ID);
            Ok(())
        })
        .await
    }

    async fn send_email_verification(&self) -> ProviderResult<()> {
        self.begin("send_email_verification").await?;

        let state = self.state.lock().await;
        match state.current()?.email.as_deref() {
            Some(email) => {
                info!("memory provider: verification email sent to {email}");
                Ok(())
            }
            None => Err(ProviderError::new(ERR_NO_EMAIL)),
        }
    }

    async fn send_phone_verification(&self) -> ProviderResult<()> {
        self.begin("send_phone_verification").await?;

        let mut state = self.state.lock().await;
        let phone = state
            .current()?
            .phone
            .clone()
            .ok_or_else(|| ProviderError::new(ERR_NO_PHONE))?;
        let code = self.issue_sms_code(&mut *state, &phone);
        state.verification_codes.insert(phone, code);
        Ok(())
    }

    async fn verify_phone(&self, sms_code: &str) -> ProviderResult<()> {
        self.begin("verify_phone").await?;
        self.modify_current(|state| {
            let phone = state
                .current()?
                .phone
                .clone()
                .ok_or_else(|| ProviderError::new(ERR_NO_PHONE))?;
            if state.verification_codes.get(&phone).map(String::as_str) != Some(sms_code) {
                return Err(ProviderError::new(ERR_INVALID_SMS_CODE));
            }
            state.verification_codes.remove(&phone);
            state.current_mut()?.phone_verified = true;
            Ok(())
        })
        .await
    }

    async fn send_password_reset_email(&self, email: &str) -> ProviderResult<()> {
        self.begin("send_password_reset_email").await?;
        validate_email(email)?;

        let state = self.state.lock().await;
        if state.find_by_email(email).is_none() {
            return Err(ProviderError::new(ERR_USER_NOT_FOUND));
        }
        info!("memory provider: password reset email sent to {email}");
        Ok(())
    }

    async fn send_password_reset_sms(&self, phone: &str) -> ProviderResult<()> {
        self.begin("send_password_reset_sms").await?;
        validate_phone(phone)?;

        let mut state = self.state.lock().await;
        if state.find_by_phone(phone).is_none() {
            return Err(ProviderError::new(ERR_USER_NOT_FOUND));
        }
        let code = self.issue_sms_code(&mut *state, phone);
        state.reset_codes.insert(phone.to_owned(), code);
        Ok(())
    }

    async fn confirm_password_reset_sms(
        &self,
        phone: &str,
        sms_code: &str,
        new_password: &str,
    ) -> ProviderResult<()> {
        self.begin("confirm_password_reset_sms").await?;
        validate_password(new_password)?;

        let mut state = self.state.lock().await;
        if state.reset_codes.get(phone).map(String::as_str) != Some(sms_code) {
            return Err(ProviderError::new(ERR_INVALID_SMS_CODE));
        }
        let uid = state
            .find_by_phone(phone)
            .map(|account| account.uid.clone())
            .ok_or_else(|| ProviderError::new(ERR_USER_NOT_FOUND))?;

        state.reset_codes.remove(phone);
        if let Some(account) = state.accounts.get_mut(&uid) {
            account.password = Some(new_password.to_owned());
        }
        Ok(())
    }

    async fn delete_user(&self) -> ProviderResult<()> {
        self.begin("delete_user").await?;
        {
            let mut state = self.state.lock().await;
            let uid = state.current()?.uid.clone();
            state.accounts.remove(&uid);
            state.current_uid = None;
            state.token = None;
        }

        self.notify().await;
        Ok(())
    }

    async fn get_token(&self, force_refresh: bool) -> ProviderResult<TokenResult> {
        self.begin("get_token").await?;

        let (token, refreshed) = {
            let mut state = self.state.lock().await;
            let uid = state.current()?.uid.clone();
            match state.token.clone() {
                Some(token) if !force_refresh => (token, false),
                _ => {
                    let token = mint_token(&uid);
                    state.token = Some(token.clone());
                    (token, true)
                }
            }
        };

        if refreshed {
            self.notify().await;
        }
        Ok(TokenResult { token })
    }

    async fn sign_out(&self) {
        let was_signed_in = {
            let mut state = self.state.lock().await;
            state.token = None;
            state.current_uid.take().is_some()
        };

        if was_signed_in {
            self.notify().await;
        }
    }

    async fn add_auth_state_listener(&self, listener: AuthStateListener) -> ListenerId {
        let _ordered = self.notifications.lock().await;
        let id = ListenerId(self.next_listener_id.fetch_add(1, Ordering::SeqCst));
        self.listeners
            .lock()
            .await
            .push((id, Arc::clone(&listener)));

        let user = self.state.lock().await.current_snapshot();
        listener(user);
        id
    }

    async fn remove_auth_state_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.lock().await;
        let before = listeners.len();
        listeners.retain(|(listener_id, _)| *listener_id != id);
        listeners.len() != before
    }
}

fn new_uid() -> String {
    Uuid::new_v4().simple().to_string()
}

fn mint_token(uid: &str) -> String {
    format!("{uid}.{}", Uuid::new_v4().simple())
}

fn validate_email(email: &str) -> ProviderResult<()> {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
        _ => Err(ProviderError::new(ERR_BAD_EMAIL)),
    }
}

fn validate_phone(phone: &str) -> ProviderResult<()> {
    let digits = phone.strip_prefix('+').unwrap_or(phone);
    if (6..=15).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ProviderError::new(ERR_BAD_PHONE))
    }
}

fn validate_password(password: &str) -> ProviderResult<()> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ProviderError::new(ERR_WEAK_PASSWORD));
    }
    Ok(())
}
