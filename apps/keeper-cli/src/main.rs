//! Keeper - Interactive shell for Transcript Keeper
//!
//! Reads one command per line from stdin and prints one JSON reply per
//! command on stdout. Logs go to stderr.

mod commands;
mod config;
mod pagination;
mod shell;

use std::io::IsTerminal;

use anyhow::Result;
use keeper_domain::{NoteService, TranscriptionService, UserService};
use keeper_memory::MemoryStore;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::pagination::Pagination;
use crate::shell::{Reply, Shell};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables first so RUST_LOG may come from .env
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting Keeper shell");

    let config = AppConfig::from_env();

    // Wire the services over a single in-memory store
    let store = MemoryStore::new();
    let shell = Shell::new(
        UserService::new(store.users()),
        NoteService::new(store.notes()),
        TranscriptionService::new(store.transcriptions(), store.notes()),
        Pagination::from(&config),
    );

    let interactive = std::io::stdin().is_terminal();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    let mut stderr = tokio::io::stderr();

    loop {
        if interactive {
            stderr.write_all(config.prompt.as_bytes()).await?;
            stderr.flush().await?;
        }

        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted");
                break;
            }
        };

        // End of input
        let Some(line) = line else {
            break;
        };

        if line.trim().is_empty() {
            continue;
        }

        let output = match shell.handle_line(&line).await {
            Reply::Json(value) => format!("{value}\n"),
            Reply::Help(text) => text,
            Reply::Quit => break,
        };

        stdout.write_all(output.as_bytes()).await?;
        stdout.flush().await?;
    }

    info!("Keeper shell stopped");
    Ok(())
}
