//! Terminal front end for the `pm2` command relay.
//!
//! Usage:
//!
//! ```text
//! procurator [--config <path>] [--prefix <prefix>]
//! ```
//!
//! Each line on standard input is one chat message of the form
//! `<author>: <message>`, where the author is a single word; any other line
//! is treated as a message with no known author. Replies are written to standard output as text
//! blocks and diagnostics go to standard error. Every message is handled in
//! its own task, so a slow `pm2` call does not hold up later messages.

use std::sync::Arc;

use camino::Utf8PathBuf;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinSet;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use procurator::{
    command::{adapters::ConsoleReplySink, registry::CommandRegistry, services::CommandDispatcher},
    config::{ConfigError, RelayConfig},
    process::adapters::Pm2Cli,
};

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Relays prefixed chat commands to `pm2`.
#[derive(Parser, Debug)]
#[command(name = "procurator", version, about)]
struct Cli {
    /// JSON configuration file
    #[arg(long, env = "PROCURATOR_CONFIG")]
    config: Option<Utf8PathBuf>,

    /// Command prefix, overriding the configuration
    #[arg(long)]
    prefix: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    init_tracing();
    let cli = Cli::parse();

    let config =
        load_config(&cli).inspect_err(|err| error!(error = %err, "invalid configuration"))?;

    let registry = Arc::new(CommandRegistry::builtin()?);
    let dispatcher = CommandDispatcher::new(
        registry,
        Arc::new(Pm2Cli::new(config.pm2_binary.as_str())),
        config.prefix.as_str(),
    );
    let sink = Arc::new(ConsoleReplySink::new(std::io::stdout(), config.reply_limits));
    info!(
        name = %config.name,
        prefix = %config.prefix,
        pm2 = %config.pm2_binary,
        "relay ready"
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut tasks = JoinSet::new();
    while let Some(line) = lines.next_line().await? {
        let task_dispatcher = dispatcher.clone();
        let task_sink = Arc::clone(&sink);
        tasks.spawn(async move {
            let (author, content) = split_author(&line, task_dispatcher.prefix());
            task_dispatcher
                .dispatch_message(content, author, task_sink.as_ref())
                .await
        });
        drain_finished(&mut tasks);
    }

    while let Some(joined) = tasks.join_next().await {
        report(joined);
    }
    Ok(())
}

fn load_config(cli: &Cli) -> Result<RelayConfig, ConfigError> {
    let mut config = RelayConfig::load(cli.config.as_deref())?;
    if let Some(prefix) = &cli.prefix {
        config.prefix.clone_from(prefix);
        config.validate()?;
    }
    Ok(config)
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Splits `author: message`.
///
/// Text before the first colon is an author only when it is a single word
/// that does not start with the command prefix; otherwise the whole line is
/// the message, so `;restart app:worker` stays a command.
fn split_author<'line>(line: &'line str, prefix: &str) -> (Option<&'line str>, &'line str) {
    match line.split_once(':') {
        Some((raw_author, content)) if is_author(raw_author.trim(), prefix) => {
            (Some(raw_author.trim()), content.trim_start())
        }
        _ => (None, line),
    }
}

fn is_author(candidate: &str, prefix: &str) -> bool {
    !candidate.is_empty()
        && !candidate.chars().any(char::is_whitespace)
        && !candidate.starts_with(prefix)
}

fn drain_finished<T>(tasks: &mut JoinSet<Result<(), T>>)
where
    T: std::fmt::Display + 'static,
{
    while let Some(joined) = tasks.try_join_next() {
        report(joined);
    }
}

fn report<T>(joined: Result<Result<(), T>, tokio::task::JoinError>)
where
    T: std::fmt::Display,
{
    match joined {
        Ok(Ok(())) => {}
        Ok(Err(err)) => error!(error = %err, "reply could not be delivered"),
        Err(err) => error!(error = %err, "message task failed"),
    }
}
