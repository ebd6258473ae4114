use reqwest::Client as HttpClient;
use reqwest::header::ACCEPT;
use super::models::{ApiError, GdpResponse};
use tracing::{debug, warn};

/// Client for the public GDP dataset resource
pub struct GdpClient {
    http_client: HttpClient,
    url: String,
}

impl GdpClient {
    pub const DEFAULT_URL: &'static str =
        "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/GDP-data.json";

    /// Create a client for the default resource
    pub fn new() -> Self {
        Self::with_url(Self::DEFAULT_URL.to_string())
    }

    /// Create a client for a custom URL (configuration and tests)
    pub fn with_url(url: String) -> Self {
        Self::with_http_client(HttpClient::new(), url)
    }

    /// Create a client around an already configured HTTP client
    pub fn with_http_client(http_client: HttpClient, url: String) -> Self {
        Self { http_client, url }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// GET the dataset resource
    ///
    /// Issues exactly one request. No retry and no timeout are applied.
    ///
    /// # Returns
    /// * `Ok(GdpResponse)` - decoded body
    /// * `Err(ApiError)` - transport failure, non-success status, or a body of the wrong shape
    pub async fn fetch_gdp(&self) -> Result<GdpResponse, ApiError> {
        debug!("GET {}", self.url);

        let response = self.http_client
            .get(&self.url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| ApiError::RequestError(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            warn!("GDP resource answered {}", status);
            return Err(ApiError::HttpError(status.as_u16(), body_text));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::RequestError(format!("Failed to read body: {}", e)))?;

        serde_json::from_str::<GdpResponse>(&body)
            .map_err(|e| ApiError::DeserializationError(format!("Failed to parse response: {}", e)))
    }
}

impl Default for GdpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::gdp::RawDate;
    use crate::test_util::{local_client, serve_once, unreachable_url};

    #[tokio::test]
    async fn test_fetch_success() {
        let url = serve_once("200 OK", r#"{"data": [["1947-01-01", 243.1], ["1947-04-01", 246.3]]}"#).await;
        let client = local_client(url);

        let response = client.fetch_gdp().await.expect("fetch failed");
        assert_eq!(response.data.len(), 2);
        assert_eq!(response.data[1].0, RawDate::Text("1947-04-01".to_string()));
        assert_eq!(response.data[1].1, 246.3);
    }

    #[tokio::test]
    async fn test_fetch_bad_status() {
        let url = serve_once("500 Internal Server Error", "boom").await;
        let client = local_client(url);

        match client.fetch_gdp().await {
            Err(ApiError::HttpError(500, body)) => assert_eq!(body, "boom"),
            other => panic!("expected HttpError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_malformed_json() {
        let url = serve_once("200 OK", r#"{"data": "nope"}"#).await;
        let client = local_client(url);

        assert!(matches!(
            client.fetch_gdp().await,
            Err(ApiError::DeserializationError(_))
        ));
    }

    #[tokio::test]
    async fn test_fetch_unreachable_host() {
        let client = local_client(unreachable_url().await);

        assert!(matches!(
            client.fetch_gdp().await,
            Err(ApiError::RequestError(_))
        ));
    }

    #[test]
    fn test_default_url() {
        assert_eq!(GdpClient::new().url(), GdpClient::DEFAULT_URL);
    }
}
