//! Provider credential resolution.
//!
//! The credential is read once at startup from the environment (optionally
//! seeded from a `.env` file). A missing or blank value is fatal.

use std::fmt;

use edupulse_common::ConfigError;
use tracing::debug;

/// Opaque provider API key. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(value: impl Into<String>) -> Result<Self, ConfigError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ConfigError::MissingCredential("a non-empty credential".into()));
        }
        Ok(Self(value))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential([REDACTED])")
    }
}

/// Load `.env` from the working directory (or a parent) if one exists.
///
/// Variables already present in the environment are left untouched.
pub fn load_dotenv() {
    match dotenv::dotenv() {
        Ok(path) => debug!("loaded environment from {}", path.display()),
        Err(e) => debug!("no .env loaded: {e}"),
    }
}

/// Read the credential from the environment variable `var`.
pub fn resolve_credential(var: &str) -> Result<Credential, ConfigError> {
    resolve_credential_with(var, |name| std::env::var(name).ok())
}

/// Read the credential through `lookup`, treating blank values as missing.
pub fn resolve_credential_with(
    var: &str,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<Credential, ConfigError> {
    match lookup(var) {
        Some(value) if !value.trim().is_empty() => Ok(Credential(value)),
        _ => Err(ConfigError::MissingCredential(var.to_string())),
    }
}
