//! Send one prompt to Gemini using a TOML config file.
//!
//! Usage: `gemini-chat <config.toml> <prompt...>`
//!
//! The first candidate's text goes to stdout; logs go to stderr.

use std::path::Path;

use anyhow::Context;
use gemini_connector::config::{build_service, read_config};
use gemini_connector::message::ChatHistory;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 || matches!(args[1].as_str(), "help" | "--help" | "-h") {
        print_usage();
        return Ok(());
    }

    let config_path = Path::new(&args[1]);
    let config = read_config(config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.runtime.log_level)),
        )
        .init();

    let service = build_service(&config)?;
    let prompt = args[2..].join(" ");

    let mut history = ChatHistory::new();
    history.add_user_message(prompt);

    let messages = service
        .get_chat_message_contents(&history, Some(&config.settings))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "chat completion failed");
            anyhow::anyhow!("gemini-chat failed: {e}")
        })?;

    let first = messages
        .first()
        .context("Gemini returned no messages")?;
    if let Some(usage) = first.metadata.as_ref().and_then(|m| m.usage) {
        tracing::info!(
            prompt_tokens = usage.prompt_tokens,
            candidates_tokens = usage.candidates_tokens,
            total_tokens = usage.total(),
            "token usage"
        );
    }
    println!("{}", first.content);
    Ok(())
}

fn print_usage() {
    eprintln!("usage: gemini-chat <config.toml> <prompt...>");
}
