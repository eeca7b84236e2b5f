use greeting_wire::utils::validation::Validate;
use greeting_wire::{AppContext, WireConfig, WireError};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_context_from_config_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[http_client]
timeout_seconds = 15
connect_timeout_seconds = 3
pool_max_idle_per_host = 1
user_agent = "wiring-test/1.0"

[greeting]
default_name = "File"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();

    let config = WireConfig::from_file(temp_file.path()).unwrap();
    assert!(config.validate().is_ok());

    let ctx = AppContext::new(&config).unwrap();
    assert_eq!(ctx.default_name(), Some("File"));
    assert!(ctx.greeting_service().http_client().is_some());
}

#[test]
fn test_env_substituted_proxy() {
    std::env::set_var("GREETING_WIRE_IT_PROXY", "http://127.0.0.1:8899");

    let config =
        WireConfig::from_toml_str("[http_client]\nproxy = \"${GREETING_WIRE_IT_PROXY}\"").unwrap();
    std::env::remove_var("GREETING_WIRE_IT_PROXY");

    assert_eq!(
        config.http_client.proxy.as_deref(),
        Some("http://127.0.0.1:8899")
    );
    assert!(config.validate().is_ok());
    assert!(AppContext::new(&config).is_ok());
}

#[test]
fn test_invalid_values_fail_validation() {
    let cases = [
        ("[http_client]\ntimeout_seconds = 0", "http_client.timeout_seconds"),
        (
            "[http_client]\nconnect_timeout_seconds = 7200",
            "http_client.connect_timeout_seconds",
        ),
        ("[http_client]\nuser_agent = \"\"", "http_client.user_agent"),
        ("[http_client]\nproxy = \"ftp://proxy\"", "http_client.proxy"),
    ];

    for (toml_content, expected_field) in cases {
        let config = WireConfig::from_toml_str(toml_content).unwrap();
        match config.validate() {
            Err(WireError::InvalidConfigValueError { field, .. }) => {
                assert_eq!(field, expected_field)
            }
            other => panic!("{}: expected validation error, got {:?}", toml_content, other),
        }
    }
}

#[test]
fn test_wrong_type_is_parse_error() {
    let result = WireConfig::from_toml_str("[http_client]\ntimeout_seconds = \"soon\"");
    assert!(matches!(result, Err(WireError::ConfigParseError { .. })));
}

#[test]
fn test_directory_is_not_a_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let result = WireConfig::from_file(temp_dir.path());
    assert!(matches!(result, Err(WireError::IoError(_))));
}
