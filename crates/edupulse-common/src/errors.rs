use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("provider credential missing: set {0}")]
    MissingCredential(String),
}

#[derive(Debug, thiserror::Error)]
pub enum EduPulseError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid json: {0}")]
    Json(String),

    #[error("ai error: {0}")]
    Ai(String),
}

impl From<serde_json::Error> for EduPulseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}
