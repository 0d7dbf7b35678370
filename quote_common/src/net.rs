//! Shared constants for storage, file transfer and the remote endpoint.

/// Key under which the full collection is stored in the key-value store.
pub const STORAGE_KEY: &str = "quotes";
/// File name used when exporting the collection.
pub const EXPORT_FILE_NAME: &str = "quotes.json";
/// Remote collection endpoint polled by default.
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/posts";
/// Path served by the mock endpoint.
pub const POSTS_PATH: &str = "/posts";
/// Default TCP port of the mock endpoint.
pub const MOCK_SERVER_PORT: u16 = 8080;
/// Default interval between remote polls.
pub const DEFAULT_SYNC_INTERVAL_SECS: u64 = 30;

/// Helper to format an address with a port like "ip:port".
pub fn addr(ip: &str, port: u16) -> String {
    format!("{}:{}", ip, port)
}

/// Build the posts URL of an endpoint listening on `ip:port`.
pub fn posts_url(ip: &str, port: u16) -> String {
    format!("http://{}{}", addr(ip, port), POSTS_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn posts_url_points_at_posts_path() {
        assert_eq!(posts_url("127.0.0.1", 8080), "http://127.0.0.1:8080/posts");
    }
}
