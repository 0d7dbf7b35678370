//! In-memory post collection served by the mock endpoint.
//!
//! Ids are assigned sequentially starting at 1. Posts are never edited or
//! removed, so the list only grows.

use quote_common::{Quote, RemotePost};

/// Titles of the posts present at startup.
const SEED_TITLES: [&str; 3] = [
    "The only way to do great work is to love what you do.",
    "Simplicity is the soul of efficiency.",
    "What we think, we become.",
];

/// Posts known to the endpoint.
#[derive(Debug, Clone)]
pub struct PostBook {
    posts: Vec<RemotePost>,
    next_id: u64,
}

impl PostBook {
    /// Creates an empty book.
    pub fn new() -> Self {
        PostBook {
            posts: Vec::new(),
            next_id: 1,
        }
    }

    /// Creates a book holding a few seed posts.
    pub fn seeded() -> Self {
        let mut book = Self::new();
        for title in SEED_TITLES {
            book.insert(title.to_string(), None);
        }
        book
    }

    /// All posts in creation order.
    pub fn posts(&self) -> &[RemotePost] {
        &self.posts
    }

    /// Number of posts.
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Returns `true` if there are no posts.
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Stores a new post and returns it with its id.
    pub fn insert(&mut self, title: String, body: Option<String>) -> RemotePost {
        let post = RemotePost {
            id: Some(self.next_id),
            user_id: Some(1),
            title,
            body,
        };
        self.next_id += 1;
        self.posts.push(post.clone());
        post
    }

    /// Stores a pushed quote: text becomes the title, category the body.
    pub fn insert_quote(&mut self, quote: Quote) -> RemotePost {
        self.insert(quote.text, Some(quote.category))
    }
}

impl Default for PostBook {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential() {
        let mut book = PostBook::seeded();
        assert_eq!(book.len(), SEED_TITLES.len());
        let post = book.insert_quote(Quote::new("New", "Pushed"));
        assert_eq!(post.id, Some(SEED_TITLES.len() as u64 + 1));
        assert_eq!(post.title, "New");
        assert_eq!(post.body.as_deref(), Some("Pushed"));
        assert_eq!(book.posts().last(), Some(&post));
    }
}
