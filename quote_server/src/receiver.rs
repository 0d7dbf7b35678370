//! `PostReceiver`: TCP accept loop serving the posts router.
//!
//! Each connection runs as its own tokio task through hyper's HTTP/1
//! connection builder. A client that has not finished sending its request
//! head within the header read timeout is disconnected, so a stalled peer
//! only holds its own task.
use crate::routes::{SharedBook, router};
use hyper::server::conn::http1;
use hyper_util::rt::{TokioIo, TokioTimer};
use hyper_util::service::TowerToHyperService;
use log::{debug, error, info};
use quote_common::Result;
use std::net::{SocketAddr, TcpListener};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Default time a client gets to send a complete request head.
pub const HEADER_READ_TIMEOUT: Duration = Duration::from_secs(10);

/// TCP receiver serving the posts collection over HTTP.
pub struct PostReceiver {
    /// The underlying TCP listening socket.
    pub(crate) socket: TcpListener,
    header_read_timeout: Duration,
}

impl PostReceiver {
    /// Bind a new receiver to the provided `bind_addr` (e.g., `0.0.0.0:8080`).
    ///
    /// Binding happens eagerly so the caller can read the port before serving.
    pub fn new(bind_addr: &str) -> Result<Self> {
        let socket = TcpListener::bind(bind_addr)?;
        socket.set_nonblocking(true)?;
        Ok(Self {
            socket,
            header_read_timeout: HEADER_READ_TIMEOUT,
        })
    }

    /// Overrides [`HEADER_READ_TIMEOUT`].
    pub fn with_header_read_timeout(mut self, timeout: Duration) -> Self {
        self.header_read_timeout = timeout;
        self
    }

    /// Address actually bound, useful when binding port 0.
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.socket.local_addr()?)
    }

    /// Accept loop. Must run inside a tokio runtime.
    pub async fn receive_loop(self, book: SharedBook) -> Result<()> {
        let listener = tokio::net::TcpListener::from_std(self.socket)?;
        info!("Posts endpoint is started on {}", listener.local_addr()?);
        let app = router(book);

        loop {
            let (stream, peer) = match listener.accept().await {
                Ok(accepted) => accepted,
                Err(e) => {
                    error!("TCP connection error: {}", e);
                    continue;
                }
            };
            let service = TowerToHyperService::new(app.clone());
            let timeout = self.header_read_timeout;
            tokio::spawn(async move {
                let mut builder = http1::Builder::new();
                builder.timer(TokioTimer::new()).header_read_timeout(timeout);
                if let Err(e) = builder.serve_connection(TokioIo::new(stream), service).await {
                    debug!("Connection {} closed: {}", peer, e);
                }
            });
        }
    }

    /// Serves on a dedicated thread with its own single-threaded runtime.
    ///
    /// For callers without a runtime, such as the blocking quote client.
    pub fn spawn(self, book: SharedBook) -> JoinHandle<Result<()>> {
        thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            runtime.block_on(self.receive_loop(book))
        })
    }
}
