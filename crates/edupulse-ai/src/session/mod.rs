//! Conversation context for a single call.
//!
//! Sessions are caller-owned: the caller re-supplies the transcript on
//! every call and this module turns it into validated, ordered turns.
//! Nothing is stored between calls.

mod holder;
mod types;

pub use holder::SessionContextHolder;
pub use types::{HistoryEntry, SessionContext, Turn, TurnRole};
