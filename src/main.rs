//! Contact Book - Main entry point
//!
//! Runs the interactive command loop on stdin/stdout. Diagnostics go to
//! stderr.

use anyhow::Result;
use contact_book::{repl, Config, JsonFileRepository, Session};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Logging goes to stderr so replies on stdout stay clean
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(
        path = %config.book_path.display(),
        page_size = config.page_size,
        "Starting contact book"
    );

    let repo = JsonFileRepository::new(&config.book_path);
    let mut session = Session::open_or_recover(repo, config.page_size);

    println!("Welcome to the contact book! Type 'help' for the list of commands.");
    if let Some(reason) = session.load_error() {
        println!(
            "Warning: could not read {}: {}",
            config.book_path.display(),
            reason
        );
        if session.is_read_only() {
            println!("Starting with an empty book. Saving is disabled for this run.");
        } else {
            println!(
                "Working on {} instead. The original file is left untouched.",
                session.repository().path().display()
            );
        }
    }

    repl::run(&mut session, io::stdin().lock(), io::stdout().lock())?;

    info!("Contact book shutdown complete");
    Ok(())
}
