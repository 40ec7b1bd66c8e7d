//! HTTP client wrapper - fetches and decodes the breed list

use crate::error::FetchError;
use crate::models::BreedsResponse;

/// Fetch the breed list from `url` and decode it
pub async fn fetch_breeds(
    client: &reqwest::Client,
    url: &str,
) -> Result<BreedsResponse, FetchError> {
    let resp = client.get(url).send().await.map_err(|e| {
        let msg = if e.is_timeout() {
            "request timed out (30s)".to_string()
        } else if e.is_connect() {
            format!("connection failed: {}", e)
        } else {
            format!("request failed: {}", e)
        };
        FetchError::Network(msg)
    })?;

    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Network(format!("server returned {}", status)));
    }

    let body = resp
        .text()
        .await
        .map_err(|e| FetchError::Network(format!("error reading body: {}", e)))?;

    serde_json::from_str(&body)
        .map_err(|e| FetchError::Decode(format!("unexpected response shape: {}", e)))
}

/// Create an HTTP client with default configuration
pub fn create_client() -> reqwest::Client {
    use std::time::Duration;

    reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}
