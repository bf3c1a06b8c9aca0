//! Every boundary request maps to exactly one provider operation.

mod common;

use common::{NO_SESSION_MESSAGE, ScriptedProvider, ScriptedUser, TestBridge};

use ab_channel::method_names as names;
use ab_channel::{Arguments, BridgeResponse};

use std::sync::Arc;

use serde_json::{Value, json};

const PHONE: &str = "+8613800000000";

fn provider_table() -> Vec<(&'static str, Arguments, &'static str)> {
    vec![
        (names::SIGN_IN_ANONYMOUSLY, Arguments::new(), "sign_in_anonymously"),
        (
            names::CREATE_USER_WITH_EMAIL_AND_PASSWORD,
            Arguments::new().with("email", "a@b.com").with("password", "secret1"),
            "create_user_with_email_and_password(a@b.com)",
        ),
        (
            names::SIGN_IN_WITH_EMAIL_AND_PASSWORD,
            Arguments::new().with("email", "a@b.com").with("password", "secret1"),
            "sign_in_with_email_and_password(a@b.com)",
        ),
        (
            names::CREATE_USER_WITH_PHONE_AND_PASSWORD,
            Arguments::new().with("phone", PHONE).with("password", "secret1"),
            "create_user_with_phone_and_password(+8613800000000)",
        ),
        (
            names::SIGN_IN_WITH_PHONE_AND_PASSWORD,
            Arguments::new().with("phone", PHONE).with("password", "secret1"),
            "sign_in_with_phone_and_password(+8613800000000)",
        ),
        (
            names::LINK_WITH_EMAIL_AND_PASSWORD,
            Arguments::new().with("email", "a@b.com").with("password", "secret1"),
            "link_with_credential(password)",
        ),
        (
            names::UPDATE_PROFILE,
            Arguments::new()
                .with("displayName", "Ann")
                .with("photoURL", "https://img/a.png"),
            "update_profile(Ann, https://img/a.png)",
        ),
        (
            names::UPDATE_PASSWORD,
            Arguments::new().with("password", "secret2"),
            "update_password",
        ),
        (
            names::UPDATE_EMAIL,
            Arguments::new().with("email", "c@d.com"),
            "update_email(c@d.com)",
        ),
        (
            names::UPDATE_PHONE,
            Arguments::new().with("phone", PHONE),
            "update_phone(+8613800000000)",
        ),
        (
            names::SEND_EMAIL_VERIFICATION,
            Arguments::new(),
            "send_email_verification",
        ),
        (
            names::SEND_PHONE_VERIFICATION,
            Arguments::new(),
            "send_phone_verification",
        ),
        (
            names::SEND_PASSWORD_RESET_EMAIL,
            Arguments::new().with("email", "a@b.com"),
            "send_password_reset_email(a@b.com)",
        ),
        (
            names::SEND_PASSWORD_RESET_SMS,
            Arguments::new().with("phone", PHONE),
            "send_password_reset_sms(+8613800000000)",
        ),
        (
            names::CONFIRM_PASSWORD_RESET_SMS,
            Arguments::new()
                .with("phone", PHONE)
                .with("realSms", "123456")
                .with("newPassword", "secret2"),
            "confirm_password_reset_sms(+8613800000000, 123456)",
        ),
        (
            names::VERIFY_PHONE_SMS_CODE,
            Arguments::new().with("realSms", "123456"),
            "verify_phone(123456)",
        ),
        (
            names::REAUTHENTICATE_EMAIL,
            Arguments::new().with("email", "a@b.com").with("password", "secret1"),
            "reauthenticate(password)",
        ),
        (
            names::REAUTHENTICATE_PHONE,
            Arguments::new().with("phone", PHONE).with("password", "secret1"),
            "reauthenticate(phone)",
        ),
        (names::DELETE, Arguments::new(), "delete_user"),
        (names::SIGN_OUT, Arguments::new(), "sign_out"),
        (
            names::GET_ID_TOKEN,
            Arguments::new().with("refresh", true),
            "get_token(true)",
        ),
    ]
}

#[tokio::test]
async fn given_each_provider_method_when_called_then_exactly_one_matching_provider_call() {
    for (method, arguments, expected_call) in provider_table() {
        let provider = Arc::new(ScriptedProvider::new().with_user(ScriptedUser::upgraded_email_user()));
        let bridge = TestBridge::new(provider.clone());

        let response = bridge.call(method, arguments).await;

        assert!(response.is_success(), "{method} answered {response:?}");
        assert_eq!(provider.calls(), vec![expected_call.to_string()], "{method}");
    }
}

#[tokio::test]
async fn given_user_producing_methods_when_succeeded_then_serialized_user_delivered() {
    let methods = [
        names::SIGN_IN_ANONYMOUSLY,
        names::SIGN_IN_WITH_EMAIL_AND_PASSWORD,
        names::CREATE_USER_WITH_EMAIL_AND_PASSWORD,
        names::SIGN_IN_WITH_PHONE_AND_PASSWORD,
        names::CREATE_USER_WITH_PHONE_AND_PASSWORD,
        names::LINK_WITH_EMAIL_AND_PASSWORD,
    ];

    for (method, arguments, _) in provider_table() {
        if !methods.contains(&method) {
            continue;
        }
        let provider = Arc::new(ScriptedProvider::new().with_user(ScriptedUser::upgraded_email_user()));
        let bridge = TestBridge::new(provider);

        let response = bridge.call(method, arguments).await;

        let result = response.result().cloned().unwrap_or(Value::Null);
        assert_eq!(result["uid"], json!("u1"), "{method}");
        assert_eq!(result["providerData"].as_array().map(Vec::len), Some(2), "{method}");
    }
}

#[tokio::test]
async fn given_void_methods_when_succeeded_then_null_result() {
    let void_methods = [
        names::UPDATE_PROFILE,
        names::UPDATE_PASSWORD,
        names::UPDATE_EMAIL,
        names::UPDATE_PHONE,
        names::SEND_EMAIL_VERIFICATION,
        names::SEND_PHONE_VERIFICATION,
        names::SEND_PASSWORD_RESET_EMAIL,
        names::SEND_PASSWORD_RESET_SMS,
        names::CONFIRM_PASSWORD_RESET_SMS,
        names::VERIFY_PHONE_SMS_CODE,
        names::REAUTHENTICATE_EMAIL,
        names::REAUTHENTICATE_PHONE,
        names::DELETE,
        names::SIGN_OUT,
    ];

    for (method, arguments, _) in provider_table() {
        if !void_methods.contains(&method) {
            continue;
        }
        let provider = Arc::new(ScriptedProvider::new().with_user(ScriptedUser::upgraded_email_user()));
        let bridge = TestBridge::new(provider);

        let response = bridge.call(method, arguments).await;

        assert_eq!(response, BridgeResponse::void(), "{method}");
    }
}

#[tokio::test]
async fn given_session_when_get_id_token_then_raw_token_string() {
    let provider = Arc::new(ScriptedProvider::new().with_user(ScriptedUser::upgraded_email_user()));
    let bridge = TestBridge::new(provider);

    let response = bridge
        .call(names::GET_ID_TOKEN, Arguments::new().with("refresh", false))
        .await;

    assert_eq!(
        response,
        BridgeResponse::Success {
            result: json!("token-u1")
        }
    );
}

#[tokio::test]
async fn given_missing_argument_when_called_then_error_and_provider_untouched() {
    let provider = Arc::new(ScriptedProvider::new());
    let bridge = TestBridge::new(provider.clone());

    let response = bridge
        .call(
            names::SIGN_IN_WITH_EMAIL_AND_PASSWORD,
            Arguments::new().with("email", "a@b.com"),
        )
        .await;

    assert_eq!(response.error_code(), Some("MISSING_ARGUMENT"));
    assert!(provider.calls().is_empty());
}

#[tokio::test]
async fn given_mistyped_argument_when_called_then_invalid_argument() {
    let provider = Arc::new(ScriptedProvider::new());
    let bridge = TestBridge::new(provider.clone());

    let response = bridge
        .call(names::GET_ID_TOKEN, Arguments::new().with("refresh", "yes"))
        .await;

    assert_eq!(response.error_code(), Some("INVALID_ARGUMENT"));
    assert!(provider.calls().is_empty());
}

#[tokio::test]
async fn given_failing_provider_when_called_then_provider_failure_with_raw_message() {
    for (method, arguments, _) in provider_table() {
        if method == names::SIGN_OUT {
            continue;
        }
        let provider = Arc::new(ScriptedProvider::new().failing("The network is unreachable."));
        let bridge = TestBridge::new(provider);

        let response = bridge.call(method, arguments).await;

        assert_eq!(
            response,
            BridgeResponse::Error {
                code: "PROVIDER_OPERATION_FAILED".to_string(),
                message: "The network is unreachable.".to_string(),
                details: None,
            },
            "{method}"
        );
    }
}

#[tokio::test]
async fn given_failing_provider_when_sign_out_then_still_succeeds() {
    let provider = Arc::new(ScriptedProvider::new().failing("The network is unreachable."));
    let bridge = TestBridge::new(provider);

    let response = bridge.call(names::SIGN_OUT, Arguments::new()).await;

    assert_eq!(response, BridgeResponse::void());
}

#[tokio::test]
async fn given_no_session_when_sign_in_then_no_session_message() {
    let provider = Arc::new(ScriptedProvider::new());
    let bridge = TestBridge::new(provider);

    let response = bridge.call(names::SIGN_IN_ANONYMOUSLY, Arguments::new()).await;

    assert!(matches!(
        response,
        BridgeResponse::Error { ref message, .. } if message == NO_SESSION_MESSAGE
    ));
}
