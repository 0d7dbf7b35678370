//! Quote Client — a command-line front end for the quote manager. It keeps a
//! collection of quotes in a file-backed key-value store, shows random quotes
//! by category, imports and exports JSON, and appends quotes polled from a
//! remote collection endpoint.
//!
//! Usage example (CLI):
//! ```bash
//! quote_client add "Stay hungry, stay foolish." Motivation
//! quote_client random --category Motivation
//! quote_client --endpoint http://127.0.0.1:8080/posts watch --interval-secs 5
//! ```
//!
//! Settings may also come from a TOML file passed with `--config`; see
//! `quote_client::config`.
#![warn(missing_docs)]
mod args;

use crate::args::{Action, Args};
use clap::Parser;
use crossbeam_channel::bounded;
use log::{error, info};
use quote_client::sync::PollOutcome;
use quote_client::{
    ClientConfig, ConfigOverrides, FileStorage, HttpEndpoint, QuoteCommand, QuoteManager,
    SyncScheduler, SyncTask,
};
use quote_common::{NewQuote, QuoteError, Result};
use std::sync::{Arc, Mutex};
use std::time::Duration;

fn main() -> Result<(), QuoteError> {
    init_logger();
    let args = Args::parse();
    let overrides = ConfigOverrides {
        storage_dir: args.storage_dir.clone(),
        endpoint: args.endpoint.clone(),
        push_new_quotes: matches!(args.command, Action::Add { push: true, .. }),
    };
    let config = ClientConfig::resolve(args.config.as_deref(), overrides)?;

    let storage = FileStorage::new(&config.storage_dir);
    info!("Using storage at {}", storage.dir().display());
    let manager = QuoteManager::open(storage)?.with_push_new_quotes(config.push_new_quotes);
    let endpoint = HttpEndpoint::new(&config.endpoint, config.request_timeout())?;

    let command = match args.command {
        Action::Add { text, category, .. } => QuoteCommand::Add(NewQuote::new(text, category)),
        Action::Random { category } => QuoteCommand::ShowRandom(category),
        Action::List { category } => QuoteCommand::List(category),
        Action::Categories => QuoteCommand::Categories,
        Action::Export { out_dir } => QuoteCommand::Export(out_dir),
        Action::Import { path } => QuoteCommand::Import(path),
        Action::Sync => QuoteCommand::Sync,
        Action::Watch { interval_secs } => {
            let interval = interval_secs
                .map(Duration::from_secs)
                .unwrap_or_else(|| config.sync_interval());
            return watch(manager, endpoint, interval);
        }
    };

    let mut manager = manager;
    let outcome = manager.execute(command, &endpoint)?;
    println!("{}", outcome);
    Ok(())
}

/// Polls once right away, then on every `interval` until Ctrl+C.
fn watch(manager: QuoteManager, endpoint: HttpEndpoint, interval: Duration) -> Result<()> {
    if interval.is_zero() {
        return Err(QuoteError::Config("interval must be positive".into()));
    }
    let (stop_tx, stop_rx) = bounded::<()>(1);
    ctrlc::set_handler(move || {
        info!("Ctrl+C received. Stopping sync...");
        let _ = stop_tx.try_send(());
    })
    .map_err(|e| QuoteError::Format(format!("Error setting Ctrl+C handler: {}", e)))?;

    let task = SyncTask::new(Arc::new(Mutex::new(manager)), Arc::new(endpoint));
    match task.poll_now() {
        Ok(PollOutcome::Completed(report)) => {
            info!("Initial sync appended {} quotes ({} total)", report.appended, report.total)
        }
        Ok(PollOutcome::Skipped) => {}
        Err(e) => error!("Initial sync failed: {}", e),
    }

    let handle = SyncScheduler::start(task, interval);
    info!("Watching for remote quotes. Press Ctrl+C to exit.");
    let _ = stop_rx.recv();
    handle.cancel();
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
