//! Mock remote collection endpoint.
//!
//! Serves a growing list of posts in the JSONPlaceholder shape so the quote
//! client has something to poll and push to:
//! - `GET /posts`: every post as a JSON array.
//! - `POST /posts`: create a post from a quote-shaped body (`201 Created`).
//!
//! Building blocks:
//! - `routes`: the axum router and its handlers.
//! - `receiver`: `PostReceiver`, the TCP accept loop.
//! - `model`: the `PostBook` and the background `PostGenerator`.
#![warn(missing_docs)]
pub mod model;
pub mod receiver;
pub mod routes;

pub use model::post_book::PostBook;
pub use model::post_generator::PostGenerator;
pub use receiver::PostReceiver;
pub use routes::{SharedBook, router};
