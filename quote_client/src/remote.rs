//! Bridge to the remote collection endpoint.
//!
//! `RemoteEndpoint` is the seam used by the manager and the scheduler; the
//! real implementation is a blocking `reqwest` client. Nothing here retries.
use std::time::Duration;

use log::{debug, info};
use quote_common::{Quote, QuoteError, RemotePost, Result};
use reqwest::blocking::{Client, Response};

/// Read/push access to a remote collection of posts.
pub trait RemoteEndpoint: Send + Sync {
    /// Fetches the whole remote collection.
    fn fetch_all(&self) -> Result<Vec<RemotePost>>;
    /// Sends one local quote upstream.
    fn push(&self, quote: &Quote) -> Result<()>;
}

/// HTTP endpoint: `GET url` lists posts, `POST url` creates one.
#[derive(Debug, Clone)]
pub struct HttpEndpoint {
    client: Client,
    url: String,
}

impl HttpEndpoint {
    /// Builds a client for `url` with a per-request `timeout`.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("quote_client/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| QuoteError::Remote(e.to_string()))?;
        Ok(HttpEndpoint {
            client,
            url: url.into(),
        })
    }

    /// Endpoint URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    fn check_status(&self, response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(QuoteError::RemoteStatus {
                status: status.as_u16(),
                url: self.url.clone(),
            })
        }
    }
}

impl RemoteEndpoint for HttpEndpoint {
    fn fetch_all(&self) -> Result<Vec<RemotePost>> {
        debug!("GET {}", self.url);
        let response = self
            .client
            .get(&self.url)
            .send()
            .map_err(|e| QuoteError::Remote(e.to_string()))?;
        let body = self
            .check_status(response)?
            .text()
            .map_err(|e| QuoteError::Remote(e.to_string()))?;
        let posts: Vec<RemotePost> = serde_json::from_str(&body)?;
        debug!("Fetched {} posts from {}", posts.len(), self.url);
        Ok(posts)
    }

    fn push(&self, quote: &Quote) -> Result<()> {
        debug!("POST {} {:?}", self.url, quote);
        let response = self
            .client
            .post(&self.url)
            .json(quote)
            .send()
            .map_err(|e| QuoteError::Remote(e.to_string()))?;
        self.check_status(response)?;
        info!("Pushed quote to {}", self.url);
        Ok(())
    }
}
