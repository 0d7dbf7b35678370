//!
//! Common types and utilities shared by the quote client and the mock server.
//!
//! This crate aggregates:
//! - `error` — unified error type `QuoteError` used across the workspace.
//! - `result` — handy `Result<T, QuoteError>` alias.
//! - `quote` — the `Quote` record and the validated `NewQuote` input.
//! - `category` — category filter with the `all` sentinel.
//! - `remote` — wire record of the remote collection endpoint.
//! - `net` — storage, file and endpoint constants.
#![warn(missing_docs)]
pub mod category;
pub mod error;
pub mod net;
pub mod quote;
pub mod remote;
pub mod result;

pub use category::CategoryFilter;
pub use error::QuoteError;
pub use quote::{NewQuote, Quote};
pub use remote::RemotePost;
pub use result::Result;
