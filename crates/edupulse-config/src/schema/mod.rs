//! Configuration schema types for EduPulse.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod assistant;
mod system;

pub use assistant::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Root configuration for the EduPulse assistant.
///
/// Only override what you want to change; everything else uses defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct EduPulseConfig {
    pub assistant: AssistantConfig,
    pub logging: LoggingConfig,
}
