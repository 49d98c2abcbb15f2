use serde::{Deserialize, Serialize};
use std::fmt;

/// Session id used when the caller does not supply one.
pub const DEFAULT_SESSION_ID: &str = "default";

/// Short hex id for correlating the log lines of a single request.
pub fn new_correlation_id() -> String {
    let uuid = uuid::Uuid::new_v4();
    let bytes = uuid.as_bytes();
    format!(
        "{:02x}{:02x}{:02x}{:02x}",
        bytes[0], bytes[1], bytes[2], bytes[3]
    )
}

/// Opaque, caller-supplied conversation identifier.
///
/// Blank or missing ids collapse to [`DEFAULT_SESSION_ID`]; any other value
/// is kept exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        if id.trim().is_empty() {
            Self::default()
        } else {
            Self(id)
        }
    }

    /// Resolve an optional caller value, falling back to the sentinel.
    pub fn from_caller(id: Option<&str>) -> Self {
        id.map(Self::new).unwrap_or_default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self(DEFAULT_SESSION_ID.to_string())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correlation_id_is_unique() {
        assert_ne!(new_correlation_id(), new_correlation_id());
    }

    #[test]
    fn correlation_id_length() {
        let cid = new_correlation_id();
        assert_eq!(cid.len(), 8);
    }

    #[test]
    fn correlation_id_is_hex() {
        let cid = new_correlation_id();
        assert!(cid.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn session_id_default_is_sentinel() {
        let sid = SessionId::default();
        assert_eq!(sid.as_str(), "default");
        assert_eq!(sid, SessionId::new(DEFAULT_SESSION_ID));
    }

    #[test]
    fn session_id_from_missing_caller_value() {
        assert_eq!(SessionId::from_caller(None).as_str(), "default");
    }

    #[test]
    fn session_id_blank_collapses_to_default() {
        assert_eq!(SessionId::from_caller(Some("")).as_str(), "default");
        assert_eq!(SessionId::from_caller(Some("   ")).as_str(), "default");
    }

    #[test]
    fn session_id_keeps_caller_value_verbatim() {
        let sid = SessionId::from_caller(Some(" s1 "));
        assert_eq!(sid.as_str(), " s1 ");
        assert_ne!(sid, SessionId::default());
    }

    #[test]
    fn session_id_display() {
        let sid = SessionId::new("learner-42");
        assert_eq!(sid.to_string(), "learner-42");
    }

    #[test]
    fn session_id_serialization() {
        let sid = SessionId::new("s1");
        let json = serde_json::to_string(&sid).unwrap();
        assert_eq!(json, "\"s1\"");
        let deserialized: SessionId = serde_json::from_str(&json).unwrap();
        assert_eq!(sid, deserialized);
    }
}
