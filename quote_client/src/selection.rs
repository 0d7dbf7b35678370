//! Random quote selection.
use std::fmt;

use quote_common::Quote;
use rand::Rng;

/// Text shown when the pool is empty.
pub const NO_QUOTES: &str = "No quotes available.";

/// Result of a random pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'a> {
    /// The picked quote.
    Quote(&'a Quote),
    /// The pool was empty.
    Empty,
}

impl Selection<'_> {
    /// Text to show in the display region.
    pub fn text(&self) -> &str {
        match self {
            Selection::Quote(quote) => &quote.text,
            Selection::Empty => NO_QUOTES,
        }
    }
}

impl fmt::Display for Selection<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Picks one element uniformly at random from `pool`.
pub fn pick_random<'a, R: Rng>(pool: &[&'a Quote], rng: &mut R) -> Selection<'a> {
    if pool.is_empty() {
        return Selection::Empty;
    }
    let index = rng.random_range(0..pool.len());
    Selection::Quote(pool[index])
}
