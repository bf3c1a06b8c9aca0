use crate::method_names::{self as names, keys};
use crate::{MethodCall, Result, SubscriptionHandle};

use std::fmt;

/// A boundary request with its arguments extracted and typed.
///
/// Parsing fails fast on a missing or mistyped argument so the provider is
/// never called with a placeholder value.
#[derive(Clone, PartialEq, Eq)]
pub enum AuthRequest {
    CurrentUser,
    SignInAnonymously,
    CreateUserWithEmailAndPassword { email: String, password: String },
    SignInWithEmailAndPassword { email: String, password: String },
    CreateUserWithPhoneAndPassword { phone: String, password: String },
    SignInWithPhoneAndPassword { phone: String, password: String },
    LinkWithEmailAndPassword { email: String, password: String },
    UpdateProfile { display_name: String, photo_url: String },
    UpdatePassword { password: String },
    UpdateEmail { email: String },
    UpdatePhone { phone: String },
    SendEmailVerification,
    SendPhoneVerification,
    SendPasswordResetEmail { email: String },
    SendPasswordResetSms { phone: String },
    ConfirmPasswordResetSms {
        phone: String,
        sms_code: String,
        new_password: String,
    },
    VerifyPhoneSmsCode { sms_code: String },
    ReauthenticateEmail { email: String, password: String },
    ReauthenticatePhone { phone: String, password: String },
    Delete,
    SignOut,
    GetIdToken { refresh: bool },
    StartListeningAuthState,
    StopListeningAuthState { handle: SubscriptionHandle },
}

impl AuthRequest {
    /// Parse a call; `Ok(None)` means the method name is not recognized.
    pub fn parse(call: &MethodCall) -> Result<Option<Self>> {
        let args = &call.arguments;

        let request = match call.method.as_str() {
            names::CURRENT_USER => Self::CurrentUser,
            names::SIGN_IN_ANONYMOUSLY => Self::SignInAnonymously,
            names::CREATE_USER_WITH_EMAIL_AND_PASSWORD => Self::CreateUserWithEmailAndPassword {
                email: args.require_string(keys::EMAIL)?,
                password: args.require_string(keys::PASSWORD)?,
            },
            names::SIGN_IN_WITH_EMAIL_AND_PASSWORD => Self::SignInWithEmailAndPassword {
                email: args.require_string(keys::EMAIL)?,
                password: args.require_string(keys::PASSWORD)?,
            },
            names::CREATE_USER_WITH_PHONE_AND_PASSWORD => Self::CreateUserWithPhoneAndPassword {
                phone: args.require_string(keys::PHONE)?,
                password: args.require_string(keys::PASSWORD)?,
            },
            names::SIGN_IN_WITH_PHONE_AND_PASSWORD => Self::SignInWithPhoneAndPassword {
                phone: args.require_string(keys::PHONE)?,
                password: args.require_string(keys::PASSWORD)?,
            },
            names::LINK_WITH_EMAIL_AND_PASSWORD => Self::LinkWithEmailAndPassword {
                email: args.require_string(keys::EMAIL)?,
                password: args.require_string(keys::PASSWORD)?,
            },
            names::UPDATE_PROFILE => Self::UpdateProfile {
                display_name: args.require_string(keys::DISPLAY_NAME)?,
                photo_url: args.require_string(keys::PHOTO_URL)?,
            },
            names::UPDATE_PASSWORD => Self::UpdatePassword {
                password: args.require_string(keys::PASSWORD)?,
            },
            names::UPDATE_EMAIL => Self::UpdateEmail {
                email: args.require_string(keys::EMAIL)?,
            },
            names::UPDATE_PHONE => Self::UpdatePhone {
                phone: args.require_string(keys::PHONE)?,
            },
            names::SEND_EMAIL_VERIFICATION => Self::SendEmailVerification,
            names::SEND_PHONE_VERIFICATION => Self::SendPhoneVerification,
            names::SEND_PASSWORD_RESET_EMAIL => Self::SendPasswordResetEmail {
                email: args.require_string(keys::EMAIL)?,
            },
            names::SEND_PASSWORD_RESET_SMS => Self::SendPasswordResetSms {
                phone: args.require_string(keys::PHONE)?,
            },
            names::CONFIRM_PASSWORD_RESET_SMS => Self::ConfirmPasswordResetSms {
                phone: args.require_string(keys::PHONE)?,
                sms_code: args.require_string(keys::SMS_CODE)?,
                new_password: args.require_string(keys::NEW_PASSWORD)?,
            },
            names::VERIFY_PHONE_SMS_CODE => Self::VerifyPhoneSmsCode {
                sms_code: args.require_string(keys::SMS_CODE)?,
            },
            names::REAUTHENTICATE_EMAIL => Self::ReauthenticateEmail {
                email: args.require_string(keys::EMAIL)?,
                password: args.require_string(keys::PASSWORD)?,
            },
            names::REAUTHENTICATE_PHONE => Self::ReauthenticatePhone {
                phone: args.require_string(keys::PHONE)?,
                password: args.require_string(keys::PASSWORD)?,
            },
            names::DELETE => Self::Delete,
            names::SIGN_OUT => Self::SignOut,
            names::GET_ID_TOKEN => Self::GetIdToken {
                refresh: args.require_bool(keys::REFRESH)?,
            },
            names::START_LISTENING_AUTH_STATE => Self::StartListeningAuthState,
            names::STOP_LISTENING_AUTH_STATE => Self::StopListeningAuthState {
                handle: SubscriptionHandle(args.require_i64(keys::ID)?),
            },
            _ => return Ok(None),
        };

        Ok(Some(request))
    }

    pub fn method_name(&self) -> &'static str {
        match self {
            Self::CurrentUser => names::CURRENT_USER,
            Self::SignInAnonymously => names::SIGN_IN_ANONYMOUSLY,
            Self::CreateUserWithEmailAndPassword { .. } => {
                names::CREATE_USER_WITH_EMAIL_AND_PASSWORD
            }
            Self::SignInWithEmailAndPassword { .. } => names::SIGN_IN_WITH_EMAIL_AND_PASSWORD,
            Self::CreateUserWithPhoneAndPassword { .. } => {
                names::CREATE_USER_WITH_PHONE_AND_PASSWORD
            }
            Self::SignInWithPhoneAndPassword { .. } => names::SIGN_IN_WITH_PHONE_AND_PASSWORD,
            Self::LinkWithEmailAndPassword { .. } => names::LINK_WITH_EMAIL_AND_PASSWORD,
            Self::UpdateProfile { .. } => names::UPDATE_PROFILE,
            Self::UpdatePassword { .. } => names::UPDATE_PASSWORD,
            Self::UpdateEmail { .. } => names::UPDATE_EMAIL,
            Self::UpdatePhone { .. } => names::UPDATE_PHONE,
            Self::SendEmailVerification => names::SEND_EMAIL_VERIFICATION,
            Self::SendPhoneVerification => names::SEND_PHONE_VERIFICATION,
            Self::SendPasswordResetEmail { .. } => names::SEND_PASSWORD_RESET_EMAIL,
            Self::SendPasswordResetSms { .. } => names::SEND_PASSWORD_RESET_SMS,
            Self::ConfirmPasswordResetSms { .. } => names::CONFIRM_PASSWORD_RESET_SMS,
            Self::VerifyPhoneSmsCode { .. } => names::VERIFY_PHONE_SMS_CODE,
            Self::ReauthenticateEmail { .. } => names::REAUTHENTICATE_EMAIL,
            Self::ReauthenticatePhone { .. } => names::REAUTHENTICATE_PHONE,
            Self::Delete => names::DELETE,
            Self::SignOut => names::SIGN_OUT,
            Self::GetIdToken { .. } => names::GET_ID_TOKEN,
            Self::StartListeningAuthState => names::START_LISTENING_AUTH_STATE,
            Self::StopListeningAuthState { .. } => names::STOP_LISTENING_AUTH_STATE,
        }
    }
}

// Arguments carry passwords and SMS codes; only the method name is printed.
impl fmt::Debug for AuthRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AuthRequest")
            .field(&self.method_name())
            .finish()
    }
}
