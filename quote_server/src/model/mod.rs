//! Domain models of the mock endpoint.
//!
//! - `post_book` — in-memory list of posts with sequential ids.
//! - `post_generator` — background thread appending synthetic posts.

pub mod post_book;
pub mod post_generator;
