use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err};
use serial_test::serial;

// =========================================================================
// Validation Tests - Server
// =========================================================================

#[test]
#[serial]
fn given_defaults_when_loaded_then_bind_addr_is_local_8000() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _host = EnvGuard::remove("RV_SERVER_HOST");
    let _port = EnvGuard::remove("RV_SERVER_PORT");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.bind_addr(), eq("127.0.0.1:8000"));
}

#[test]
#[serial]
fn given_privileged_port_when_validate_then_error_mentions_port() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _port = EnvGuard::set("RV_SERVER_PORT", "80");

    // When
    let config = Config::load().unwrap();
    let result = config.server.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("server.port"));
}

#[test]
#[serial]
fn given_port_zero_when_validate_then_ok_as_auto_assign() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _port = EnvGuard::set("RV_SERVER_PORT", "0");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.validate().is_ok(), eq(true));
    assert_that!(config.server.port, eq(0));
}

#[test]
#[serial]
fn given_env_override_when_loaded_then_port_is_overridden() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _port = EnvGuard::set("RV_SERVER_PORT", "9090");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(9090));
}
