//! Line-oriented chat session on stdin/stdout.

use std::io::Write;

use edupulse_ai::{ChatDispatcher, HistoryEntry, Turn};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

/// Caller-side transcript, re-sent in full with every message.
#[derive(Debug, Default)]
pub(crate) struct Transcript {
    entries: Vec<HistoryEntry>,
}

impl Transcript {
    pub(crate) fn new(entries: Vec<HistoryEntry>) -> Self {
        Self { entries }
    }

    pub(crate) fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Append a completed exchange. Failed calls are not recorded.
    pub(crate) fn record(&mut self, question: &str, reply: &str) {
        self.entries.push(HistoryEntry::from(&Turn::user(question)));
        self.entries.push(HistoryEntry::from(&Turn::assistant(reply)));
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}

fn show_prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}

/// Chat until EOF or `/quit`. `/reset` forgets the transcript.
pub(crate) async fn run(
    dispatcher: &ChatDispatcher,
    session: Option<&str>,
    history: Vec<HistoryEntry>,
) -> edupulse_common::Result<()> {
    let mut transcript = Transcript::new(history);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    show_prompt();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "" => {}
            "/quit" | "/exit" => break,
            "/reset" => {
                transcript.clear();
                println!("(conversation cleared)");
            }
            _ => match dispatcher.chat(&line, session, transcript.entries()).await {
                Ok(reply) => {
                    println!("{reply}");
                    transcript.record(&line, &reply);
                }
                Err(e) => eprintln!("error: {e}"),
            },
        }
        show_prompt();
    }

    debug!(turns = transcript.entries().len(), "Interactive session ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_appends_user_then_assistant() {
        let mut transcript = Transcript::new(vec![HistoryEntry::new("assistant", "Hello!")]);
        transcript.record("What is a loop?", "A loop repeats code.");

        assert_eq!(
            transcript.entries(),
            &[
                HistoryEntry::new("assistant", "Hello!"),
                HistoryEntry::new("user", "What is a loop?"),
                HistoryEntry::new("assistant", "A loop repeats code."),
            ]
        );
    }

    #[test]
    fn clear_forgets_everything() {
        let mut transcript = Transcript::default();
        transcript.record("q", "a");
        transcript.clear();
        assert!(transcript.entries().is_empty());
    }
}
