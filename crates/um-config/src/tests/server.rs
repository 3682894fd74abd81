use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};
use serial_test::serial;

#[test]
#[serial]
fn given_privileged_port_when_validated_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _port = EnvGuard::set("UM_SERVER_PORT", "80");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_port_zero_when_validated_then_ok() {
    // Given: Port 0 means auto-assign
    let _temp = setup_config_dir();
    let _port = EnvGuard::set("UM_SERVER_PORT", "0");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_log_level_env_when_loaded_then_level_parsed() {
    // Given
    let _temp = setup_config_dir();
    let _level = EnvGuard::set("UM_LOG_LEVEL", "debug");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(*config.logging.level, eq(log::LevelFilter::Debug));
}
