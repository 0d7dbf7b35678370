//! In-memory quote collection.
//!
//! Insertion order is display order. Duplicates are allowed and nothing is
//! ever edited or removed individually; the whole list is replaced on load.
use quote_common::{CategoryFilter, NewQuote, Quote};

/// Ordered collection of quotes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteStore {
    quotes: Vec<Quote>,
}

impl QuoteStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a validated draft. Returns `false` if a field was empty.
    pub fn add(&mut self, draft: NewQuote) -> bool {
        match draft.validate() {
            Some(quote) => {
                self.quotes.push(quote);
                true
            }
            None => false,
        }
    }

    /// Appends every quote as-is, without validation.
    pub fn extend<I: IntoIterator<Item = Quote>>(&mut self, quotes: I) -> usize {
        let before = self.quotes.len();
        self.quotes.extend(quotes);
        self.quotes.len() - before
    }

    /// Replaces the whole collection.
    pub fn replace_all(&mut self, quotes: Vec<Quote>) {
        self.quotes = quotes;
    }

    /// All quotes in insertion order.
    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    /// Number of quotes.
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Returns `true` if there are no quotes.
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Quotes passing `filter`, in insertion order.
    pub fn filter_by_category(&self, filter: &CategoryFilter) -> Vec<&Quote> {
        self.quotes
            .iter()
            .filter(|quote| filter.matches(&quote.category))
            .collect()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for quote in &self.quotes {
            if !seen.iter().any(|c| c == &quote.category) {
                seen.push(quote.category.clone());
            }
        }
        seen
    }
}

impl From<Vec<Quote>> for QuoteStore {
    fn from(quotes: Vec<Quote>) -> Self {
        QuoteStore { quotes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> QuoteStore {
        QuoteStore::from(vec![
            Quote::new("Stay hungry", "Motivation"),
            Quote::new("Less is more", "Design"),
            Quote::new("Keep going", "Motivation"),
            Quote::new("keep it simple", "design"),
        ])
    }

    #[test]
    fn add_with_empty_field_is_a_no_op() {
        let mut store = sample();
        assert!(!store.add(NewQuote::new("", "Motivation")));
        assert!(!store.add(NewQuote::new("text", "")));
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn add_appends_at_the_end() {
        let mut store = sample();
        assert!(store.add(NewQuote::new("Stay hungry", "Motivation")));
        assert_eq!(store.len(), 5);
        assert_eq!(store.quotes()[4], Quote::new("Stay hungry", "Motivation"));
    }

    #[test]
    fn filter_all_returns_everything_in_order() {
        let store = sample();
        let all: Vec<Quote> = store
            .filter_by_category(&CategoryFilter::All)
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(all, store.quotes());
    }

    #[test]
    fn filter_matches_category_exactly() {
        let store = sample();
        let design = store.filter_by_category(&CategoryFilter::Only("Design".into()));
        assert_eq!(design, vec![&Quote::new("Less is more", "Design")]);
        assert!(store
            .filter_by_category(&CategoryFilter::Only("Humor".into()))
            .is_empty());
    }

    #[test]
    fn categories_are_distinct_in_first_seen_order() {
        assert_eq!(sample().categories(), vec!["Motivation", "Design", "design"]);
        assert!(QuoteStore::new().categories().is_empty());
    }
}
