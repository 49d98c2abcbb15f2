//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# EduPulse assistant configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.
# The provider credential is never stored here; it is read from the
# environment variable named by `credential_env` (a .env file works too).

[assistant]
# provider = "openai"
# model = "gpt-4o-mini"
# base_url = "https://api.openai.com/v1"
# credential_env = "EMERGENT_LLM_KEY"
# max_tokens = 1024            # 1-16384
# temperature = 0.7            # 0.0-2.0
# request_timeout_secs = 60    # 0-600, 0 = no per-call bound
# connect_timeout_secs = 10    # 1-60

[logging]
# level = "INFO"               # DEBUG, INFO, WARNING, ERROR
"##
}
