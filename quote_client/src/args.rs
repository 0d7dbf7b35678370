//! Command-line arguments for the Quote Client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use quote_common::CategoryFilter;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// TOML configuration file. Flags below override its values.
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// Directory holding the persisted collection.
    #[clap(long)]
    pub storage_dir: Option<PathBuf>,

    /// Remote collection endpoint URL.
    #[clap(long)]
    pub endpoint: Option<String>,

    /// Action to perform.
    #[command(subcommand)]
    pub command: Action,
}

/// Client actions.
#[derive(Debug, Subcommand)]
pub enum Action {
    /// Add a quote. Both fields must be non-empty.
    Add {
        /// Quote text.
        text: String,
        /// Quote category.
        category: String,
        /// Also send the new quote to the remote endpoint.
        #[clap(long)]
        push: bool,
    },
    /// Show one random quote.
    Random {
        /// Category to pick from, or `all`.
        #[clap(long, default_value = "all")]
        category: CategoryFilter,
    },
    /// List quotes.
    List {
        /// Category to list, or `all`.
        #[clap(long, default_value = "all")]
        category: CategoryFilter,
    },
    /// List the category dropdown options.
    Categories,
    /// Export all quotes to `quotes.json`.
    Export {
        /// Target directory.
        #[clap(long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Append the quotes of a JSON file.
    Import {
        /// JSON file with an array of quotes.
        path: PathBuf,
    },
    /// Poll the remote endpoint once.
    Sync,
    /// Poll the remote endpoint periodically until Ctrl+C.
    Watch {
        /// Seconds between polls; defaults to the configured interval.
        #[clap(long)]
        interval_secs: Option<u64>,
    },
}
