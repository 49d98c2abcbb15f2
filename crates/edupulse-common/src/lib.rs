pub mod errors;
pub mod id;

pub use errors::{ConfigError, EduPulseError};
pub use id::{new_correlation_id, SessionId, DEFAULT_SESSION_ID};

pub type Result<T> = std::result::Result<T, EduPulseError>;
