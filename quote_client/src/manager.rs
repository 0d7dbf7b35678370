//! The quote manager: owns the collection and its storage and handles every
//! user command.
//!
//! All mutations persist the whole collection right away. A manager is owned
//! explicitly by its caller; the sync scheduler shares it as
//! `Arc<Mutex<QuoteManager>>`.
use std::path::Path;
use std::path::PathBuf;

use log::{info, warn};
use quote_common::{CategoryFilter, NewQuote, Quote, RemotePost, Result};
use rand::Rng;

use crate::commands::{Outcome, QuoteCommand};
use crate::persistence::{self, KeyValueStore};
use crate::remote::RemoteEndpoint;
use crate::selection::{self, Selection};
use crate::store::QuoteStore;
use crate::transfer;
use crate::view::{self, CategoryOption};

/// Collection plus persistence bridge.
pub struct QuoteManager {
    store: QuoteStore,
    storage: Box<dyn KeyValueStore>,
    push_new_quotes: bool,
}

impl QuoteManager {
    /// Creates an empty manager on top of `storage` without reading it.
    pub fn new(storage: impl KeyValueStore + 'static) -> Self {
        QuoteManager {
            store: QuoteStore::new(),
            storage: Box::new(storage),
            push_new_quotes: false,
        }
    }

    /// Creates a manager and loads whatever `storage` holds.
    pub fn open(storage: impl KeyValueStore + 'static) -> Result<Self> {
        let mut manager = Self::new(storage);
        manager.load()?;
        Ok(manager)
    }

    /// Enables the best-effort push of newly authored quotes.
    pub fn with_push_new_quotes(mut self, enabled: bool) -> Self {
        self.push_new_quotes = enabled;
        self
    }

    /// Current collection.
    pub fn store(&self) -> &QuoteStore {
        &self.store
    }

    /// Replaces the collection with the stored one. Leaves it untouched if
    /// nothing is stored. Returns the resulting length.
    pub fn load(&mut self) -> Result<usize> {
        if let Some(quotes) = persistence::load_quotes(&*self.storage)? {
            self.store.replace_all(quotes);
            info!("Loaded {} quotes from storage", self.store.len());
        }
        Ok(self.store.len())
    }

    /// Overwrites the stored collection with the current one.
    pub fn save(&mut self) -> Result<()> {
        persistence::save_quotes(&mut *self.storage, self.store.quotes())
    }

    /// Appends a draft if valid and persists. `None` means nothing changed.
    pub fn add(&mut self, draft: NewQuote) -> Result<Option<Quote>> {
        if !self.store.add(draft) {
            return Ok(None);
        }
        self.save()?;
        Ok(self.store.quotes().last().cloned())
    }

    /// Picks a random quote among those passing `filter`.
    pub fn random_quote<R: Rng>(&self, filter: &CategoryFilter, rng: &mut R) -> Selection<'_> {
        let pool = self.store.filter_by_category(filter);
        selection::pick_random(&pool, rng)
    }

    /// Dropdown options for the current collection.
    pub fn category_options(&self) -> Vec<CategoryOption> {
        view::category_options(&self.store)
    }

    /// Writes the full collection to `<dir>/quotes.json`.
    pub fn export(&self, dir: &Path) -> Result<PathBuf> {
        transfer::export_to_dir(self.store.quotes(), dir)
    }

    /// Appends every record of a JSON array and persists. A parse failure
    /// leaves the collection unchanged.
    pub fn import_json(&mut self, contents: &str) -> Result<usize> {
        let quotes = transfer::parse_import(contents)?;
        self.append(quotes)
    }

    /// Same as [`Self::import_json`] reading from a file.
    pub fn import_file(&mut self, path: &Path) -> Result<usize> {
        let quotes = transfer::read_import_file(path)?;
        self.append(quotes)
    }

    /// Maps remote posts into quotes, appends them all and persists.
    pub fn append_remote(&mut self, posts: Vec<RemotePost>) -> Result<usize> {
        self.append(posts.into_iter().map(RemotePost::into_quote).collect())
    }

    /// Fetches the remote collection and appends it. No deduplication:
    /// every call appends its full result.
    pub fn fetch_remote(&mut self, endpoint: &dyn RemoteEndpoint) -> Result<usize> {
        let posts = endpoint.fetch_all()?;
        self.append_remote(posts)
    }

    fn append(&mut self, quotes: Vec<Quote>) -> Result<usize> {
        let appended = self.store.extend(quotes);
        self.save()?;
        Ok(appended)
    }

    /// Handles one user command.
    pub fn execute(
        &mut self,
        command: QuoteCommand,
        endpoint: &dyn RemoteEndpoint,
    ) -> Result<Outcome> {
        let outcome = match command {
            QuoteCommand::Add(draft) => match self.add(draft)? {
                Some(quote) => {
                    if self.push_new_quotes {
                        if let Err(e) = push_one(endpoint, &quote) {
                            warn!("Failed to push new quote: {}", e);
                        }
                    }
                    Outcome::Added(quote)
                }
                None => Outcome::Skipped,
            },
            QuoteCommand::ShowRandom(filter) => {
                let mut rng = rand::rng();
                Outcome::Display(self.random_quote(&filter, &mut rng).text().to_string())
            }
            QuoteCommand::List(filter) => Outcome::Quotes(
                self.store
                    .filter_by_category(&filter)
                    .into_iter()
                    .cloned()
                    .collect(),
            ),
            QuoteCommand::Categories => Outcome::Categories(self.category_options()),
            QuoteCommand::Export(dir) => Outcome::Exported(self.export(&dir)?),
            QuoteCommand::Import(path) => Outcome::Imported(self.import_file(&path)?),
            QuoteCommand::Sync => Outcome::Synced(self.fetch_remote(endpoint)?),
        };
        Ok(outcome)
    }
}

/// Sends one quote upstream. The caller decides what to do with a failure.
pub fn push_one(endpoint: &dyn RemoteEndpoint, quote: &Quote) -> Result<()> {
    endpoint.push(quote)
}
