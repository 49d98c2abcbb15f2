//! The composed, per-call provider request.

use edupulse_common::SessionId;

use crate::session::{SessionContext, Turn};
use crate::{ChatError, Message, Role};

/// Everything sent to the provider for one call.
#[derive(Debug, Clone)]
pub struct ChatRequest<'a> {
    pub system_prompt: &'a str,
    pub session_id: SessionId,
    pub history: Vec<Turn>,
    pub new_message: &'a str,
}

impl<'a> ChatRequest<'a> {
    pub fn new(
        system_prompt: &'a str,
        context: SessionContext,
        new_message: &'a str,
    ) -> Result<Self, ChatError> {
        validate_message(new_message)?;
        Ok(Self {
            system_prompt,
            session_id: context.session_id,
            history: context.turns,
            new_message,
        })
    }

    /// System prompt, then history in caller order, then the new message.
    pub fn to_messages(&self) -> Vec<Message> {
        let mut msgs = Vec::with_capacity(self.history.len() + 2);
        msgs.push(Message::new(Role::System, self.system_prompt));
        msgs.extend(self.history.iter().map(Turn::to_message));
        msgs.push(Message::new(Role::User, self.new_message));
        msgs
    }
}

/// A message must contain something other than whitespace.
pub(crate) fn validate_message(message: &str) -> Result<(), ChatError> {
    if message.trim().is_empty() {
        return Err(ChatError::Validation("message must not be empty".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(turns: Vec<Turn>) -> SessionContext {
        SessionContext {
            session_id: SessionId::new("s1"),
            turns,
        }
    }

    #[test]
    fn system_prompt_first_and_exactly_once() {
        let request = ChatRequest::new(
            "PROMPT",
            context(vec![Turn::user("PROMPT"), Turn::assistant("B")]),
            "C",
        )
        .unwrap();
        let messages = request.to_messages();

        let system_count = messages.iter().filter(|m| m.role == Role::System).count();
        assert_eq!(system_count, 1);
        assert_eq!(messages[0], Message::new(Role::System, "PROMPT"));
        assert_eq!(messages.len(), 4);
    }

    #[test]
    fn new_message_last_and_verbatim() {
        let request = ChatRequest::new("P", context(vec![]), "  What is recursion?  ").unwrap();
        let messages = request.to_messages();
        assert_eq!(
            messages.last(),
            Some(&Message::new(Role::User, "  What is recursion?  "))
        );
    }

    #[test]
    fn whitespace_message_rejected() {
        let err = ChatRequest::new("P", context(vec![]), " \n\t ").unwrap_err();
        assert!(matches!(err, ChatError::Validation(_)));
    }
}
