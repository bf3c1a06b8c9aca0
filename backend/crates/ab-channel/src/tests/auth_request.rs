use crate::method_names as names;
use crate::{Arguments, AuthRequest, BridgeError, MethodCall, SubscriptionHandle};

fn parse(method: &str, arguments: Arguments) -> crate::Result<Option<AuthRequest>> {
    AuthRequest::parse(&MethodCall::new(method, arguments))
}

#[test]
fn given_email_sign_in_when_parsed_then_credentials_extracted() {
    let request = parse(
        names::SIGN_IN_WITH_EMAIL_AND_PASSWORD,
        Arguments::new()
            .with("email", "a@b.com")
            .with("password", "x"),
    )
    .unwrap();

    assert_eq!(
        request,
        Some(AuthRequest::SignInWithEmailAndPassword {
            email: "a@b.com".to_string(),
            password: "x".to_string(),
        })
    );
}

#[test]
fn given_unknown_method_when_parsed_then_none() {
    let request = parse("doSomethingUnsupported", Arguments::new()).unwrap();

    assert_eq!(request, None);
}

#[test]
fn given_missing_password_when_parsed_then_missing_argument() {
    let result = parse(
        names::CREATE_USER_WITH_PHONE_AND_PASSWORD,
        Arguments::new().with("phone", "+8613800000000"),
    );

    assert!(matches!(
        result,
        Err(BridgeError::MissingArgument { ref key, .. }) if key == "password"
    ));
}

#[test]
fn given_confirm_reset_when_parsed_then_sms_code_read_from_real_sms() {
    let request = parse(
        names::CONFIRM_PASSWORD_RESET_SMS,
        Arguments::new()
            .with("phone", "+8613800000000")
            .with("realSms", "123456")
            .with("newPassword", "secret2"),
    )
    .unwrap();

    assert_eq!(
        request,
        Some(AuthRequest::ConfirmPasswordResetSms {
            phone: "+8613800000000".to_string(),
            sms_code: "123456".to_string(),
            new_password: "secret2".to_string(),
        })
    );
}

#[test]
fn given_stop_listening_when_parsed_then_handle_from_id() {
    let request = parse(
        names::STOP_LISTENING_AUTH_STATE,
        Arguments::new().with("id", 4),
    )
    .unwrap();

    assert_eq!(
        request,
        Some(AuthRequest::StopListeningAuthState {
            handle: SubscriptionHandle(4)
        })
    );
}

#[test]
fn given_get_id_token_without_refresh_when_parsed_then_missing_argument() {
    let result = parse(names::GET_ID_TOKEN, Arguments::new());

    assert!(matches!(result, Err(BridgeError::MissingArgument { .. })));
}

#[test]
fn given_update_profile_without_photo_when_parsed_then_missing_argument() {
    let result = parse(
        names::UPDATE_PROFILE,
        Arguments::new().with("displayName", "Ann"),
    );

    assert!(matches!(
        result,
        Err(BridgeError::MissingArgument { ref key, .. }) if key == "photoURL"
    ));
}

#[test]
fn given_argument_free_methods_when_parsed_then_round_trip_method_name() {
    let methods = [
        names::CURRENT_USER,
        names::SIGN_IN_ANONYMOUSLY,
        names::SEND_EMAIL_VERIFICATION,
        names::SEND_PHONE_VERIFICATION,
        names::DELETE,
        names::SIGN_OUT,
        names::START_LISTENING_AUTH_STATE,
    ];

    for method in methods {
        let request = parse(method, Arguments::new()).unwrap().unwrap();
        assert_eq!(request.method_name(), method);
    }
}

#[test]
fn given_request_with_password_when_debug_printed_then_password_hidden() {
    let request = AuthRequest::SignInWithEmailAndPassword {
        email: "a@b.com".to_string(),
        password: "hunter22".to_string(),
    };

    let printed = format!("{request:?}");

    assert!(!printed.contains("hunter22"));
    assert!(printed.contains(names::SIGN_IN_WITH_EMAIL_AND_PASSWORD));
}
