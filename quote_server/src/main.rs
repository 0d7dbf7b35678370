//! Mock posts endpoint for the quote client.
//!
//! Binds `0.0.0.0:<port>` (default `MOCK_SERVER_PORT`), seeds a few posts,
//! optionally starts the `PostGenerator` so the collection keeps growing, and
//! serves `GET`/`POST /posts` until killed. `--empty` skips the seed posts.
//!
//! ```bash
//! quote_server --port 8080 --generate-secs 10 --empty
//! quote_client --endpoint http://127.0.0.1:8080/posts watch --interval-secs 5
//! ```
#![warn(missing_docs)]
use clap::Parser;
use log::info;
use quote_common::Result;
use quote_common::net::{MOCK_SERVER_PORT, addr};
use quote_server::{PostBook, PostGenerator, PostReceiver};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// TCP port to listen on.
    #[clap(long, default_value_t = MOCK_SERVER_PORT)]
    port: u16,

    /// Append a synthetic post every N seconds; 0 disables the generator.
    #[clap(long, default_value_t = 0)]
    generate_secs: u64,

    /// Start with an empty collection instead of the seed posts.
    #[clap(long)]
    empty: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logger();
    let args = Args::parse();

    let book = if args.empty { PostBook::new() } else { PostBook::seeded() };
    info!("Serving {} initial posts", book.len());
    let book = Arc::new(Mutex::new(book));

    let _generator = (args.generate_secs > 0).then(|| {
        PostGenerator::start(Arc::clone(&book), Duration::from_secs(args.generate_secs))
    });

    let receiver = PostReceiver::new(&addr("0.0.0.0", args.port))?;
    receiver.receive_loop(book).await
}

fn init_logger() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
}
