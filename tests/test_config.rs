use mongoutil::config::{read_bool_config, EnvSource};

// Each test uses its own variable names so parallel tests never collide.

#[test]
fn test_env_source_off_values() {
    std::env::set_var("MONGOUTIL_TEST_FLAG_LOWER_OFF", "off");
    std::env::set_var("MONGOUTIL_TEST_FLAG_UPPER_OFF", "OFF");
    std::env::set_var("MONGOUTIL_TEST_FLAG_EMPTY", "");

    assert!(!read_bool_config(&EnvSource, "MONGOUTIL_TEST_FLAG_LOWER_OFF"));
    assert!(!read_bool_config(&EnvSource, "MONGOUTIL_TEST_FLAG_UPPER_OFF"));
    assert!(!read_bool_config(&EnvSource, "MONGOUTIL_TEST_FLAG_EMPTY"));
    assert!(!read_bool_config(&EnvSource, "MONGOUTIL_TEST_FLAG_UNSET"));
}

#[test]
fn test_env_source_on_values() {
    std::env::set_var("MONGOUTIL_TEST_FLAG_ON", "on");
    std::env::set_var("MONGOUTIL_TEST_FLAG_FALSE", "false");
    std::env::set_var("MONGOUTIL_TEST_FLAG_ZERO", "0");

    assert!(read_bool_config(&EnvSource, "MONGOUTIL_TEST_FLAG_ON"));
    assert!(read_bool_config(&EnvSource, "MONGOUTIL_TEST_FLAG_FALSE"));
    assert!(read_bool_config(&EnvSource, "MONGOUTIL_TEST_FLAG_ZERO"));
}
