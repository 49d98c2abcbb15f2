use std::path::PathBuf;

use clap::Parser;

/// EduPulse learning assistant: ask one question, or chat interactively.
#[derive(Parser, Debug)]
#[command(name = "edupulse-chat", version, about)]
pub struct Args {
    /// Message to send. Without it, lines are read from stdin as one session.
    pub message: Option<String>,

    /// Session identifier (defaults to "default").
    #[arg(short, long)]
    pub session: Option<String>,

    /// JSON file with prior turns: [{"role": "user", "text": "..."}, ...].
    #[arg(long)]
    pub history: Option<PathBuf>,

    /// Print the HTTP-style JSON envelope instead of plain text.
    #[arg(long)]
    pub json: bool,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the effective configuration and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_one_shot_invocation() {
        let args = Args::try_parse_from([
            "edupulse-chat",
            "--session",
            "s1",
            "--json",
            "What is recursion?",
        ])
        .unwrap();
        assert_eq!(args.message.as_deref(), Some("What is recursion?"));
        assert_eq!(args.session.as_deref(), Some("s1"));
        assert!(args.json);
    }

    #[test]
    fn message_is_optional() {
        let args = Args::try_parse_from(["edupulse-chat"]).unwrap();
        assert!(args.message.is_none());
        assert!(!args.print_config);
    }
}
