//! Quote record shared by the client and the mock endpoint.
//!
//! A `Quote` is a plain text/category pair with no identity, timestamp or
//! version. Records coming from files or storage are not validated: a missing
//! field decodes to the empty string. Records authored by a user go through
//! `NewQuote::validate` first.
use serde::{Deserialize, Serialize};

/// A single quote.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quote {
    /// Quote text.
    #[serde(default)]
    pub text: String,
    /// Category label, matched case-sensitively by filters.
    #[serde(default)]
    pub category: String,
}

impl Quote {
    /// Creates a quote without validation.
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        Quote {
            text: text.into(),
            category: category.into(),
        }
    }
}

/// User-authored quote awaiting validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewQuote {
    /// Raw text field.
    pub text: String,
    /// Raw category field.
    pub category: String,
}

impl NewQuote {
    /// Creates a new draft from the two input fields.
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        NewQuote {
            text: text.into(),
            category: category.into(),
        }
    }

    /// Returns the quote if both fields are non-empty.
    pub fn validate(self) -> Option<Quote> {
        if self.text.is_empty() || self.category.is_empty() {
            return None;
        }
        Some(Quote {
            text: self.text,
            category: self.category,
        })
    }
}
