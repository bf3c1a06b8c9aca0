use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use std::time::Duration;

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};
use serial_test::serial;

#[test]
#[serial]
fn given_latency_env_when_load_then_duration_matches() {
    // Given
    let _temp = setup_config_dir();
    let _latency = EnvGuard::set("AUTHBRIDGE_PROVIDER_LATENCY_MS", "40");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.provider.latency(), eq(Duration::from_millis(40)));
}

#[test]
#[serial]
fn given_latency_above_limit_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _latency = EnvGuard::set("AUTHBRIDGE_PROVIDER_LATENCY_MS", "60001");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_non_digit_sms_code_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _code = EnvGuard::set("AUTHBRIDGE_PROVIDER_SMS_CODE", "12a456");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_short_sms_code_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _code = EnvGuard::set("AUTHBRIDGE_PROVIDER_SMS_CODE", "123");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_six_digit_sms_code_when_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();
    let _code = EnvGuard::set("AUTHBRIDGE_PROVIDER_SMS_CODE", "654321");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, ok(anything()));
}
