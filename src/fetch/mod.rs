mod client;
mod basic;

pub use client::HttpClient;
pub use basic::BasicClient;

use tracing::debug;

use crate::error::DashboardError;

/// Issues a GET and returns the body. Non-success statuses are errors.
pub async fn fetch_bytes<C: HttpClient + ?Sized>(
    client: &C,
    url: &str,
) -> Result<Vec<u8>, DashboardError> {
    let parsed = reqwest::Url::parse(url).map_err(|e| DashboardError::InvalidUrl {
        url: url.to_string(),
        message: e.to_string(),
    })?;
    let req = reqwest::Request::new(reqwest::Method::GET, parsed);

    let resp = client.execute(req).await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(DashboardError::HttpStatus {
            url: url.to_string(),
            status,
        });
    }

    let bytes = resp.bytes().await?.to_vec();
    debug!(url, bytes = bytes.len(), "Fetched body");
    Ok(bytes)
}

/// True when `location` names an `http://` or `https://` URL.
pub fn is_remote(location: &str) -> bool {
    let lower = location.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Loads a source from a local file path or fetches it over HTTP.
pub async fn load_source<C: HttpClient + ?Sized>(
    client: &C,
    location: &str,
) -> Result<Vec<u8>, DashboardError> {
    if is_remote(location) {
        fetch_bytes(client, location).await
    } else {
        Ok(tokio::fs::read(location).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts requests and always answers 200 with an empty object.
    #[derive(Default)]
    struct CountingClient {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl HttpClient for CountingClient {
        async fn execute(&self, _req: reqwest::Request) -> reqwest::Result<reqwest::Response> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let response = http::Response::builder().status(200).body("{}").unwrap();
            Ok(reqwest::Response::from(response))
        }
    }

    #[test]
    fn test_is_remote_requires_scheme() {
        assert!(is_remote("https://example.test/cases"));
        assert!(is_remote("HTTP://example.test/cases"));
        assert!(!is_remote("http-cache/cases.json"));
        assert!(!is_remote("httpdata.json"));
        assert!(!is_remote("/tmp/cases.json"));
    }

    #[tokio::test]
    async fn test_load_source_reads_http_prefixed_local_path() {
        let dir = std::env::temp_dir().join("case_dashboard_http-cache");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("cases.json");
        std::fs::write(&path, "[]").unwrap();

        let client = CountingClient::default();
        let bytes = load_source(&client, path.to_str().unwrap()).await.unwrap();

        assert_eq!(bytes, b"[]");
        assert_eq!(client.calls.load(Ordering::SeqCst), 0);
        std::fs::remove_file(&path).unwrap();
    }

    #[tokio::test]
    async fn test_load_source_fetches_urls() {
        let client = CountingClient::default();
        let bytes = load_source(&client, "https://example.test/cases").await.unwrap();

        assert_eq!(bytes, b"{}");
        assert_eq!(client.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_relative_http_prefixed_path_is_not_fetched() {
        let client = CountingClient::default();
        let err = load_source(&client, "http-cache/does-not-exist.json")
            .await
            .unwrap_err();

        assert!(matches!(err, DashboardError::Io(_)));
        assert_eq!(client.calls.load(Ordering::SeqCst), 0);
    }
}
