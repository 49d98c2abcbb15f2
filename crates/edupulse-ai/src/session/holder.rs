//! Session context resolution.

use tracing::debug;

use edupulse_common::SessionId;

use crate::ChatError;

use super::types::{HistoryEntry, SessionContext, Turn, TurnRole};

/// Resolves the effective, ordered history for a session.
///
/// A pure transform over the caller's records: order is preserved and
/// nothing is reordered, deduplicated or windowed. A persistent store, if
/// one is added, goes behind [`SessionContextHolder::resolve`] without
/// changing its inputs or output.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionContextHolder;

impl SessionContextHolder {
    pub fn new() -> Self {
        Self
    }

    /// Validate `history` into turns for `session_id`.
    ///
    /// A record with a missing role, missing or blank text, or a role other
    /// than `user`/`assistant` fails the whole call.
    pub fn resolve(
        &self,
        session_id: Option<&str>,
        history: &[HistoryEntry],
    ) -> Result<SessionContext, ChatError> {
        let session_id = SessionId::from_caller(session_id);

        let turns = history
            .iter()
            .enumerate()
            .map(|(index, entry)| to_turn(index, entry))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(session = %session_id, turns = turns.len(), "Resolved session context");

        Ok(SessionContext { session_id, turns })
    }
}

fn to_turn(index: usize, entry: &HistoryEntry) -> Result<Turn, ChatError> {
    let raw_role = entry
        .role
        .as_deref()
        .ok_or_else(|| ChatError::Validation(format!("history entry {index}: missing role")))?;

    let role = TurnRole::parse(raw_role).ok_or_else(|| {
        ChatError::Validation(format!(
            "history entry {index}: unrecognized role {raw_role:?} (expected \"user\" or \"assistant\")"
        ))
    })?;

    let text = entry
        .text
        .as_deref()
        .ok_or_else(|| ChatError::Validation(format!("history entry {index}: missing text")))?;

    if text.trim().is_empty() {
        return Err(ChatError::Validation(format!(
            "history entry {index}: empty text"
        )));
    }

    Ok(Turn {
        role,
        text: text.to_string(),
    })
}
