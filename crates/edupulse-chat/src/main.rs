//! edupulse-chat: command-line host for the EduPulse learning assistant.
//!
//! Loads configuration and the provider credential once, builds a single
//! chat dispatcher, then answers either one message or an interactive
//! session read from stdin. The transcript lives here, on the caller side,
//! and is re-supplied with every call.

mod cli;
mod interactive;

use std::path::Path;
use std::process::ExitCode;

use edupulse_ai::{ChatDispatcher, ChatInput, HistoryEntry};
use edupulse_common::EduPulseError;
use edupulse_config::{
    config_to_json, load_config, load_dotenv, resolve_credential, AssistantConfig, EduPulseConfig,
};
use tracing_subscriber::EnvFilter;

fn init_logging(level: &str) {
    let directive = format!("edupulse_chat={level},edupulse_ai={level},edupulse_config={level}");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn read_history(path: &Path) -> edupulse_common::Result<Vec<HistoryEntry>> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// A missing credential stays a config error; only client setup failures
/// are reported as AI errors.
fn build_dispatcher(config: &AssistantConfig) -> edupulse_common::Result<ChatDispatcher> {
    let credential = resolve_credential(&config.credential_env)?;
    ChatDispatcher::from_credential(config, credential)
        .map_err(|e| EduPulseError::Ai(e.to_string()))
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = cli::parse();

    let config = match load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("edupulse-chat: {e}");
            return ExitCode::from(2);
        }
    };

    let level = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.as_filter().to_string());
    init_logging(&level);

    if args.print_config {
        println!("{}", config_to_json(&config));
        return ExitCode::SUCCESS;
    }

    match run(args, &config).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("edupulse-chat: {e}");
            ExitCode::from(2)
        }
    }
}

async fn run(args: cli::Args, config: &EduPulseConfig) -> edupulse_common::Result<ExitCode> {
    load_dotenv();

    let dispatcher = build_dispatcher(&config.assistant)?;

    let history = match &args.history {
        Some(path) => read_history(path)?,
        None => Vec::new(),
    };

    let Some(message) = args.message else {
        interactive::run(&dispatcher, args.session.as_deref(), history).await?;
        return Ok(ExitCode::SUCCESS);
    };

    if args.json {
        let input = ChatInput {
            session_id: args.session,
            history: Some(history),
            ..ChatInput::new(message)
        };
        let envelope = dispatcher.handle(input).await;
        println!("{}", serde_json::to_string_pretty(&envelope)?);
        return Ok(if envelope.success {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    match dispatcher
        .chat(&message, args.session.as_deref(), &history)
        .await
    {
        Ok(reply) => {
            println!("{reply}");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("edupulse-chat: {e}");
            Ok(ExitCode::FAILURE)
        }
    }
}
