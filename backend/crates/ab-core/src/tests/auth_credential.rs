use crate::{AuthCredential, PASSWORD_PROVIDER_ID, PHONE_PROVIDER_ID};

#[test]
fn given_email_credential_when_debug_formatted_then_password_is_redacted() {
    let credential = AuthCredential::email("a@b.com", "hunter22");

    let formatted = format!("{credential:?}");

    assert!(formatted.contains("a@b.com"));
    assert!(!formatted.contains("hunter22"));
}

#[test]
fn given_credentials_when_provider_id_then_matches_identity_method() {
    assert_eq!(
        AuthCredential::email("a@b.com", "secret1").provider_id(),
        PASSWORD_PROVIDER_ID
    );
    assert_eq!(
        AuthCredential::phone("+8613800000000", "secret1").provider_id(),
        PHONE_PROVIDER_ID
    );
}
