//! Synthetic post generator.
//!
//! The `PostGenerator` runs a background thread that appends one made-up post
//! to the shared `PostBook` on every tick, so clients polling the endpoint see
//! the collection grow. Titles are assembled from random phrase halves.
//!
//! The thread stops when a message arrives on (or the sender is dropped from)
//! the stop channel returned by `PostGenerator::start`.

use crate::model::post_book::PostBook;
use chrono::Utc;
use crossbeam_channel::{Sender, bounded, select, tick};
use log::{debug, error, info};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

const OPENINGS: [&str; 5] = [
    "Every morning",
    "In the long run",
    "When in doubt",
    "Against all odds",
    "Step by step",
];

const CLOSINGS: [&str; 5] = [
    "small habits win.",
    "curiosity keeps you young.",
    "patience beats talent.",
    "kindness compounds.",
    "the work teaches you.",
];

/// Background post generator.
pub struct PostGenerator;

impl PostGenerator {
    /// Builds one random title.
    pub fn random_title<R: Rng>(rng: &mut R) -> String {
        let opening = OPENINGS.choose(rng).copied().unwrap_or(OPENINGS[0]);
        let closing = CLOSINGS.choose(rng).copied().unwrap_or(CLOSINGS[0]);
        format!("{}, {}", opening, closing)
    }

    /// Start the generator thread and return its stop channel.
    pub fn start(book: Arc<Mutex<PostBook>>, interval: Duration) -> Sender<()> {
        let (stop_tx, stop_rx) = bounded::<()>(1);

        thread::spawn(move || {
            info!(
                "Post generator started (Thread ID: {:?}), interval {:?}",
                thread::current().id(),
                interval
            );
            let ticker = tick(interval);
            let mut rng = rand::rng();

            loop {
                select! {
                    recv(stop_rx) -> _ => break,
                    recv(ticker) -> _ => {
                        let title = Self::random_title(&mut rng);
                        let body = format!("generated at {}", Utc::now().to_rfc3339());
                        match book.lock() {
                            Ok(mut book) => {
                                let post = book.insert(title, Some(body));
                                debug!("Generated post {:?}: {}", post.id, post.title);
                            }
                            Err(e) => {
                                error!("Post book lock poisoned: {}", e);
                                break;
                            }
                        }
                    }
                }
            }
            info!("Post generator stopped");
        });
        stop_tx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn titles_combine_both_halves() {
        let mut rng = StdRng::seed_from_u64(9);
        let title = PostGenerator::random_title(&mut rng);
        assert!(OPENINGS.iter().any(|o| title.starts_with(o)));
        assert!(CLOSINGS.iter().any(|c| title.ends_with(c)));
    }

    #[test]
    fn generator_grows_the_book_until_stopped() {
        let book = Arc::new(Mutex::new(PostBook::new()));
        let stop = PostGenerator::start(Arc::clone(&book), Duration::from_millis(10));
        thread::sleep(Duration::from_millis(120));
        stop.send(()).unwrap();
        thread::sleep(Duration::from_millis(30));

        let grown = book.lock().unwrap().len();
        assert!(grown > 0);
        thread::sleep(Duration::from_millis(60));
        assert_eq!(book.lock().unwrap().len(), grown);
    }
}
