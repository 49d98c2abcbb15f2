//! Turn, history and context types.

use serde::{Deserialize, Serialize};

use edupulse_common::SessionId;

use crate::{Message, Role};

/// Who spoke a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Assistant,
}

impl TurnRole {
    /// Exact, lowercase match after trimming. Anything else is unrecognized.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "user" => Some(TurnRole::User),
            "assistant" => Some(TurnRole::Assistant),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TurnRole::User => "user",
            TurnRole::Assistant => "assistant",
        }
    }
}

impl From<TurnRole> for Role {
    fn from(role: TurnRole) -> Self {
        match role {
            TurnRole::User => Role::User,
            TurnRole::Assistant => Role::Assistant,
        }
    }
}

/// One validated utterance in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: TurnRole,
    pub text: String,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: TurnRole::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: TurnRole::Assistant,
            text: text.into(),
        }
    }

    pub fn to_message(&self) -> Message {
        Message::new(self.role.into(), self.text.clone())
    }
}

/// A caller-supplied history record, as received on the wire.
///
/// Both fields are optional here so a malformed record can be reported
/// precisely instead of failing deserialization of the whole request.
/// The body is read from `text`, or from `content` when `text` is absent;
/// a record carrying both uses `text`. Other fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WireHistoryEntry")]
pub struct HistoryEntry {
    pub role: Option<String>,
    pub text: Option<String>,
}

#[derive(Deserialize)]
struct WireHistoryEntry {
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    content: Option<String>,
}

impl From<WireHistoryEntry> for HistoryEntry {
    fn from(wire: WireHistoryEntry) -> Self {
        Self {
            role: wire.role,
            text: wire.text.or(wire.content),
        }
    }
}

impl HistoryEntry {
    pub fn new(role: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            role: Some(role.into()),
            text: Some(text.into()),
        }
    }
}

impl From<&Turn> for HistoryEntry {
    fn from(turn: &Turn) -> Self {
        Self::new(turn.role.as_str(), turn.text.clone())
    }
}

/// The resolved context for one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    pub session_id: SessionId,
    pub turns: Vec<Turn>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parse_is_exact() {
        assert_eq!(TurnRole::parse("user"), Some(TurnRole::User));
        assert_eq!(TurnRole::parse(" assistant "), Some(TurnRole::Assistant));
        assert_eq!(TurnRole::parse("User"), None);
        assert_eq!(TurnRole::parse("system"), None);
        assert_eq!(TurnRole::parse("bot"), None);
    }

    #[test]
    fn history_entry_accepts_content_alias() {
        let entry: HistoryEntry = serde_json::from_str(
            r#"{"id":"msg_1","role":"assistant","content":"Hello!","timestamp":"2024-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(entry, HistoryEntry::new("assistant", "Hello!"));
    }

    #[test]
    fn history_entry_with_text_and_content_prefers_text() {
        let entry: HistoryEntry =
            serde_json::from_str(r#"{"role":"user","text":"A","content":"stale"}"#).unwrap();
        assert_eq!(entry, HistoryEntry::new("user", "A"));
    }

    #[test]
    fn history_entry_missing_fields_deserialize_as_none() {
        let entry: HistoryEntry = serde_json::from_str(r#"{"role":"user"}"#).unwrap();
        assert_eq!(entry.role.as_deref(), Some("user"));
        assert_eq!(entry.text, None);
    }

    #[test]
    fn turn_converts_to_provider_message() {
        let msg = Turn::assistant("B").to_message();
        assert_eq!(msg, Message::new(Role::Assistant, "B"));
    }

    #[test]
    fn entry_from_turn() {
        let entry = HistoryEntry::from(&Turn::user("A"));
        assert_eq!(entry, HistoryEntry::new("user", "A"));
    }
}
