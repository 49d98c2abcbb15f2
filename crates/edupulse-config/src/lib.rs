//! EduPulse assistant configuration.
//!
//! TOML-based configuration with validation, plus the provider credential
//! read from the environment. All config sections use defaults so partial
//! files work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use edupulse_config::{load_config, resolve_credential};
//!
//! let config = load_config(None).expect("failed to load config");
//! let credential = resolve_credential(&config.assistant.credential_env);
//! println!("{}", config.assistant.model);
//! # let _ = credential;
//! ```

pub mod credentials;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use credentials::{load_dotenv, resolve_credential, resolve_credential_with, Credential};
pub use schema::{AssistantConfig, EduPulseConfig, LogLevel, LoggingConfig};

use std::path::Path;

use edupulse_common::ConfigError;

/// Load config from an explicit path, or the platform default path.
///
/// An explicit path must exist. The default path is created from the
/// commented template when missing.
pub fn load_config(path: Option<&Path>) -> Result<EduPulseConfig, ConfigError> {
    match path {
        Some(path) => toml_loader::load_from_path(path),
        None => toml_loader::load_default(),
    }
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &EduPulseConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
