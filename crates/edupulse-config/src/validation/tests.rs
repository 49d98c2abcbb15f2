use super::*;

#[test]
fn default_config_is_valid() {
    assert!(validate(&EduPulseConfig::default()).is_ok());
}

#[test]
fn blank_model_rejected() {
    let mut config = EduPulseConfig::default();
    config.assistant.model = "  ".into();
    let err = validate(&config).unwrap_err();
    assert!(err.to_string().contains("assistant.model must not be empty"));
}

#[test]
fn base_url_without_scheme_rejected() {
    let mut config = EduPulseConfig::default();
    config.assistant.base_url = "api.openai.com/v1".into();
    let err = validate(&config).unwrap_err();
    assert!(err.to_string().contains("assistant.base_url"));
}

#[test]
fn credential_env_with_spaces_rejected() {
    let mut config = EduPulseConfig::default();
    config.assistant.credential_env = "MY KEY".into();
    let err = validate(&config).unwrap_err();
    assert!(err.to_string().contains("not a valid environment variable name"));
}

#[test]
fn temperature_out_of_range() {
    let mut config = EduPulseConfig::default();
    config.assistant.temperature = 2.5;
    let err = validate(&config).unwrap_err();
    assert!(err.to_string().contains("assistant.temperature = 2.5"));
}

#[test]
fn nan_temperature_rejected() {
    let mut config = EduPulseConfig::default();
    config.assistant.temperature = f64::NAN;
    assert!(validate(&config).is_err());
}

#[test]
fn zero_request_timeout_allowed() {
    let mut config = EduPulseConfig::default();
    config.assistant.request_timeout_secs = 0;
    assert!(validate(&config).is_ok());
}

#[test]
fn multiple_errors_collected() {
    let mut config = EduPulseConfig::default();
    config.assistant.max_tokens = 0;
    config.assistant.connect_timeout_secs = 0;
    config.assistant.request_timeout_secs = 601;

    let err = validate(&config).unwrap_err();
    let msg = err.to_string();
    assert!(matches!(err, ConfigError::ValidationError(_)));
    assert!(msg.contains("assistant.max_tokens"));
    assert!(msg.contains("assistant.connect_timeout_secs"));
    assert!(msg.contains("assistant.request_timeout_secs"));
    assert_eq!(msg.matches("; ").count(), 2);
}
