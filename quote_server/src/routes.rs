//! axum routes of the posts collection.
//!
//! Malformed JSON bodies are rejected by the `Json` extractor (`400`/`422`),
//! unknown paths answer `404` and other methods on `/posts` answer `405`.
use crate::model::post_book::PostBook;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use log::{error, info};
use quote_common::net::POSTS_PATH;
use quote_common::{Quote, QuoteError, RemotePost};
use std::sync::{Arc, Mutex};

/// Post book shared between the handlers and the generator thread.
pub type SharedBook = Arc<Mutex<PostBook>>;

/// Builds the router serving `GET` and `POST` on [`POSTS_PATH`].
pub fn router(book: SharedBook) -> Router {
    Router::new()
        .route(POSTS_PATH, get(list_posts).post(create_post))
        .with_state(book)
}

async fn list_posts(State(book): State<SharedBook>) -> Result<Json<Vec<RemotePost>>, ApiError> {
    let posts = book.lock().map_err(QuoteError::from)?.posts().to_vec();
    Ok(Json(posts))
}

async fn create_post(
    State(book): State<SharedBook>,
    Json(quote): Json<Quote>,
) -> Result<(StatusCode, Json<RemotePost>), ApiError> {
    let post = book.lock().map_err(QuoteError::from)?.insert_quote(quote);
    info!("Created post {:?}: {}", post.id, post.title);
    Ok((StatusCode::CREATED, Json(post)))
}

/// Handler failure rendered as `500` with a JSON `error` field.
#[derive(Debug)]
pub struct ApiError(QuoteError);

impl From<QuoteError> for ApiError {
    fn from(err: QuoteError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("Request failed: {}", self.0);
        let body = serde_json::json!({ "error": self.0.to_string() });
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn list_returns_every_post() {
        let book: SharedBook = Arc::new(Mutex::new(PostBook::seeded()));
        let Json(posts) = list_posts(State(book)).await.unwrap();
        assert_eq!(posts.len(), 3);
        assert_eq!(posts[0].id, Some(1));
    }

    #[tokio::test]
    async fn create_inserts_quote_as_post() {
        let book: SharedBook = Arc::new(Mutex::new(PostBook::new()));
        let (status, Json(post)) = create_post(
            State(Arc::clone(&book)),
            Json(Quote::new("Hi", "Greeting")),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(post.title, "Hi");
        assert_eq!(book.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn poisoned_book_is_an_internal_error() {
        let book: SharedBook = Arc::new(Mutex::new(PostBook::new()));
        let poisoner = Arc::clone(&book);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.lock().unwrap();
            panic!("poison the book");
        })
        .join();

        let err = list_posts(State(book)).await.unwrap_err();
        assert!(matches!(err.0, QuoteError::MutexLock(_)));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
