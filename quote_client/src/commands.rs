//! Command handlers input and output.
//!
//! A front end turns user actions into a `QuoteCommand` and renders the
//! returned `Outcome`; see `QuoteManager::execute`.
use std::fmt;
use std::path::PathBuf;

use quote_common::{CategoryFilter, NewQuote, Quote};

use crate::view::CategoryOption;

/// A user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteCommand {
    /// Author a new quote.
    Add(NewQuote),
    /// Show one random quote among those passing the filter.
    ShowRandom(CategoryFilter),
    /// List quotes passing the filter.
    List(CategoryFilter),
    /// Populate the category dropdown.
    Categories,
    /// Export the whole collection into a directory.
    Export(PathBuf),
    /// Append the quotes of a JSON file.
    Import(PathBuf),
    /// Poll the remote endpoint once.
    Sync,
}

/// Result of a handled command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The quote was appended and persisted.
    Added(Quote),
    /// Validation failed; nothing changed.
    Skipped,
    /// Text for the display region.
    Display(String),
    /// Filtered quotes.
    Quotes(Vec<Quote>),
    /// Dropdown options, sentinel first.
    Categories(Vec<CategoryOption>),
    /// Path of the exported file.
    Exported(PathBuf),
    /// Number of imported quotes.
    Imported(usize),
    /// Number of quotes appended from the remote endpoint.
    Synced(usize),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Added(quote) => write!(f, "Added \"{}\" [{}]", quote.text, quote.category),
            Outcome::Skipped => f.write_str("Both text and category are required; nothing added."),
            Outcome::Display(text) => f.write_str(text),
            Outcome::Quotes(quotes) => {
                for (i, quote) in quotes.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{} [{}]", quote.text, quote.category)?;
                }
                Ok(())
            }
            Outcome::Categories(options) => {
                for (i, option) in options.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{}\t{}", option.value, option.label)?;
                }
                Ok(())
            }
            Outcome::Exported(path) => write!(f, "Exported to {}", path.display()),
            Outcome::Imported(count) => write!(f, "Imported {} quotes", count),
            Outcome::Synced(count) => write!(f, "Appended {} quotes from the server", count),
        }
    }
}
