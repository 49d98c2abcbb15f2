//! Full configuration validation.
//!
//! Each section has its own check; this orchestrator calls them all and
//! collects errors into a single `ConfigError`.

mod assistant;
mod helpers;

#[cfg(test)]
mod tests;

use crate::schema::EduPulseConfig;
use edupulse_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &EduPulseConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    assistant::validate_selection(&mut errors, config);
    assistant::validate_transport(&mut errors, config);
    assistant::validate_sampling(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
