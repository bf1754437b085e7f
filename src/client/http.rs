use std::time::Duration;

use reqwest::{Client, Response};
use serde::Serialize;
use tracing::debug;

use crate::client::error::{ApiError, ApiResult};
use crate::config::Config;

/// Thin HTTP verb wrapper over the task API.
///
/// Each call returns the raw response body bytes on any 2xx status.
/// Non-2xx responses become [`ApiError::Api`]; network-level failures
/// become [`ApiError::Transport`]. There are no retries; the configured
/// timeout bounds every call.
pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ApiResult<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| ApiError::Transport { source })?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn from_config(config: &Config) -> ApiResult<Self> {
        Self::new(config.api_url.clone(), config.api_timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get(&self, path: &str) -> ApiResult<Vec<u8>> {
        self.execute(self.http.get(self.url(path))).await
    }

    pub async fn get_with_query(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ApiResult<Vec<u8>> {
        self.execute(self.http.get(self.url(path)).query(query)).await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<Vec<u8>> {
        self.execute(self.http.post(self.url(path)).json(body)).await
    }

    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<Vec<u8>> {
        self.execute(self.http.put(self.url(path)).json(body)).await
    }

    pub async fn delete(&self, path: &str) -> ApiResult<Vec<u8>> {
        self.execute(self.http.delete(self.url(path))).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn execute(&self, request: reqwest::RequestBuilder) -> ApiResult<Vec<u8>> {
        let response = request
            .send()
            .await
            .map_err(|source| ApiError::Transport { source })?;
        Self::handle_response(response).await
    }

    /// Map a response to body bytes or a typed API error.
    async fn handle_response(response: Response) -> ApiResult<Vec<u8>> {
        let status = response.status();
        if status.is_success() {
            let bytes = response
                .bytes()
                .await
                .map_err(|source| ApiError::Transport { source })?;
            debug!(status = status.as_u16(), len = bytes.len(), "API response");
            return Ok(bytes.to_vec());
        }

        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Api {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown"),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(base, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn strips_trailing_slash_from_base_url() {
        let client = client("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.url("/api/v1/tasks"), "http://localhost:8000/api/v1/tasks");
    }

    #[test]
    fn keeps_explicit_base_url() {
        let client = client("http://api.internal:9090");
        assert_eq!(client.url("/health"), "http://api.internal:9090/health");
    }

    /// Bind a throwaway backend on an ephemeral port and return its base URL.
    async fn spawn_backend(app: axum::Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn init_crypto() {
        let _ = rustls::crypto::ring::default_provider().install_default();
    }

    #[tokio::test]
    async fn delete_issues_the_delete_verb() {
        init_crypto();
        let app = axum::Router::new().route(
            "/api/v1/tasks/t-1",
            axum::routing::delete(|| async { "removed" }),
        );
        let base = spawn_backend(app).await;
        let bytes = client(&base).delete("/api/v1/tasks/t-1").await.unwrap();
        assert_eq!(bytes, b"removed");
    }

    #[tokio::test]
    async fn delete_maps_missing_resource_to_api_error() {
        init_crypto();
        let base = spawn_backend(axum::Router::new()).await;
        let err = client(&base).delete("/api/v1/tasks/t-404").await.unwrap_err();
        match err {
            ApiError::Api { status, .. } => assert_eq!(status, 404),
            other => panic!("expected API error, got {other:?}"),
        }
    }
}
