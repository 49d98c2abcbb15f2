//! Validation for the `[assistant]` section.

use crate::schema::EduPulseConfig;

use super::helpers::{validate_not_blank, validate_range, validate_range_f64};

/// The provider/model pair must be named.
pub(crate) fn validate_selection(errors: &mut Vec<String>, config: &EduPulseConfig) {
    validate_not_blank(errors, "assistant.provider", &config.assistant.provider);
    validate_not_blank(errors, "assistant.model", &config.assistant.model);
}

/// Endpoint, credential variable and timeouts.
pub(crate) fn validate_transport(errors: &mut Vec<String>, config: &EduPulseConfig) {
    let assistant = &config.assistant;

    if !(assistant.base_url.starts_with("http://") || assistant.base_url.starts_with("https://"))
    {
        errors.push(format!(
            "assistant.base_url = {:?} must start with http:// or https://",
            assistant.base_url
        ));
    }

    let var = assistant.credential_env.trim();
    if var.is_empty() {
        errors.push("assistant.credential_env must not be empty".to_string());
    } else if var.contains('=') || var.chars().any(char::is_whitespace) {
        errors.push(format!(
            "assistant.credential_env = {var:?} is not a valid environment variable name"
        ));
    }

    validate_range(
        errors,
        "assistant.request_timeout_secs",
        assistant.request_timeout_secs,
        0,
        600,
    );
    validate_range(
        errors,
        "assistant.connect_timeout_secs",
        assistant.connect_timeout_secs,
        1,
        60,
    );
}

/// Generation parameters sent with every request.
pub(crate) fn validate_sampling(errors: &mut Vec<String>, config: &EduPulseConfig) {
    validate_range(
        errors,
        "assistant.max_tokens",
        config.assistant.max_tokens,
        1,
        16384,
    );
    validate_range_f64(
        errors,
        "assistant.temperature",
        config.assistant.temperature,
        0.0,
        2.0,
    );
}
