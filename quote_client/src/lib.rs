//! Quote manager library.
//!
//! An explicitly owned collection of quotes, persisted to a key-value store,
//! filterable by category, importable and exportable as JSON, and fed by a
//! one-way poll of a remote collection endpoint.
//!
//! - `store` / `selection` — the collection and random picks.
//! - `persistence` — `KeyValueStore` and the save/load bridge.
//! - `transfer` — JSON import/export.
//! - `remote` / `sync` — remote endpoint and the cancellable poll scheduler.
//! - `view` / `commands` / `manager` — command handlers for a front end.
//! - `config` — TOML configuration.
#![warn(missing_docs)]
pub mod commands;
pub mod config;
pub mod manager;
pub mod persistence;
pub mod remote;
pub mod selection;
pub mod store;
pub mod sync;
pub mod transfer;
pub mod view;

pub use commands::{Outcome, QuoteCommand};
pub use config::{ClientConfig, ConfigOverrides};
pub use manager::QuoteManager;
pub use persistence::{FileStorage, KeyValueStore, MemoryStorage};
pub use remote::{HttpEndpoint, RemoteEndpoint};
pub use store::QuoteStore;
pub use sync::{PollOutcome, PollReport, SharedManager, SyncHandle, SyncScheduler, SyncTask};
