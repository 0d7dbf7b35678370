use quote_client::{HttpEndpoint, MemoryStorage, QuoteManager, RemoteEndpoint};
use quote_common::net::posts_url;
use quote_common::remote::REMOTE_CATEGORY;
use quote_common::{Quote, QuoteError};
use quote_server::{PostBook, PostReceiver};
use std::sync::{Arc, Mutex};
use std::time::Duration;

fn start_server(book: PostBook) -> (HttpEndpoint, Arc<Mutex<PostBook>>) {
    let receiver = PostReceiver::new("127.0.0.1:0").unwrap();
    let port = receiver.local_addr().unwrap().port();
    let book = Arc::new(Mutex::new(book));
    let shared = Arc::clone(&book);
    receiver.spawn(shared);
    let endpoint = HttpEndpoint::new(posts_url("127.0.0.1", port), Duration::from_secs(5)).unwrap();
    (endpoint, book)
}

#[test]
fn fetch_maps_titles_into_server_quotes() {
    let (endpoint, _) = start_server(PostBook::seeded());
    let mut manager = QuoteManager::new(MemoryStorage::new());

    assert_eq!(manager.fetch_remote(&endpoint).unwrap(), 3);
    assert_eq!(manager.fetch_remote(&endpoint).unwrap(), 3);
    let quotes = manager.store().quotes();
    assert_eq!(quotes.len(), 6);
    assert_eq!(quotes[0], quotes[3]);
    assert!(quotes.iter().all(|q| q.category == REMOTE_CATEGORY));
}

#[test]
fn pushed_quote_comes_back_on_next_fetch() {
    let (endpoint, book) = start_server(PostBook::new());
    endpoint.push(&Quote::new("Round trip", "Local")).unwrap();
    assert_eq!(book.lock().unwrap().len(), 1);

    let posts = endpoint.fetch_all().unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].clone().into_quote(), Quote::new("Round trip", REMOTE_CATEGORY));
}

#[test]
fn non_success_status_is_reported() {
    let (endpoint, _) = start_server(PostBook::new());
    let missing = HttpEndpoint::new(
        endpoint.url().replace("/posts", "/missing"),
        Duration::from_secs(5),
    )
    .unwrap();
    assert!(matches!(
        missing.fetch_all(),
        Err(QuoteError::RemoteStatus { status: 404, .. })
    ));
}

#[test]
fn unreachable_endpoint_is_a_remote_error() {
    let receiver = PostReceiver::new("127.0.0.1:0").unwrap();
    let port = receiver.local_addr().unwrap().port();
    drop(receiver);
    let endpoint =
        HttpEndpoint::new(posts_url("127.0.0.1", port), Duration::from_secs(2)).unwrap();
    assert!(matches!(endpoint.fetch_all(), Err(QuoteError::Remote(_))));
}
