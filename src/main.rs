//! Contact Book - Main entry point
//!
//! Loads the address book, runs the interactive assistant on stdin/stdout
//! and saves the book on exit.

use anyhow::{Context, Result};
use contact_book::{Config, ContactRepository, JsonContactRepository, Repl};
use std::io;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            println!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let config = Config::from_env()?;

    // Logs go to stderr so they never mix with the assistant's output
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(path = %config.contact_file.display(), "Starting contact book");

    let repository = JsonContactRepository::new(&config.contact_file);
    let book = repository
        .load()
        .with_context(|| format!("Failed to load {}", config.contact_file.display()))?;

    let stdin = io::stdin();
    let repl = Repl::new(book, repository, stdin.lock(), io::stdout());
    let book = repl.run()?;

    info!(contacts = book.len(), "Contact book closed");
    Ok(())
}
