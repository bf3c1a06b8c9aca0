//! Names of the boundary requests and events.

pub const CURRENT_USER: &str = "currentUser";
pub const SIGN_IN_ANONYMOUSLY: &str = "signInAnonymously";
pub const CREATE_USER_WITH_EMAIL_AND_PASSWORD: &str = "createUserWithEmailAndPassword";
pub const SIGN_IN_WITH_EMAIL_AND_PASSWORD: &str = "signInWithEmailAndPassword";
pub const CREATE_USER_WITH_PHONE_AND_PASSWORD: &str = "createUserWithPhoneAndPassword";
pub const SIGN_IN_WITH_PHONE_AND_PASSWORD: &str = "signInWithPhoneAndPassword";
pub const LINK_WITH_EMAIL_AND_PASSWORD: &str = "linkWithEmailAndPassword";
pub const UPDATE_PROFILE: &str = "updateProfile";
pub const UPDATE_PASSWORD: &str = "updatePassword";
pub const UPDATE_EMAIL: &str = "updateEmail";
pub const UPDATE_PHONE: &str = "updatePhone";
pub const SEND_EMAIL_VERIFICATION: &str = "sendEmailVerification";
pub const SEND_PHONE_VERIFICATION: &str = "sendPhoneVerification";
pub const SEND_PASSWORD_RESET_EMAIL: &str = "sendPasswordResetEmail";
pub const SEND_PASSWORD_RESET_SMS: &str = "sendPasswordResetSms";
pub const CONFIRM_PASSWORD_RESET_SMS: &str = "confirmPasswordResetSms";
pub const VERIFY_PHONE_SMS_CODE: &str = "verifyPhoneSmsCode";
pub const REAUTHENTICATE_EMAIL: &str = "reauthenticateEmail";
pub const REAUTHENTICATE_PHONE: &str = "reauthenticatePhone";
pub const DELETE: &str = "delete";
pub const SIGN_OUT: &str = "signOut";
pub const GET_ID_TOKEN: &str = "getIdToken";
pub const START_LISTENING_AUTH_STATE: &str = "startListeningAuthState";
pub const STOP_LISTENING_AUTH_STATE: &str = "stopListeningAuthState";

/// Argument keys
pub mod keys {
    pub const EMAIL: &str = "email";
    pub const PASSWORD: &str = "password";
    pub const PHONE: &str = "phone";
    pub const DISPLAY_NAME: &str = "displayName";
    pub const PHOTO_URL: &str = "photoURL";
    pub const SMS_CODE: &str = "realSms";
    pub const NEW_PASSWORD: &str = "newPassword";
    pub const REFRESH: &str = "refresh";
    pub const ID: &str = "id";
}
