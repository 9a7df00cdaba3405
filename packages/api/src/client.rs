//! Shared HTTP client for the rewards REST API.
//!
//! Every resource service goes through [`ApiClient`], which owns the
//! `reqwest::Client` and the base URL. No authentication header is attached
//! and nothing is retried: a failed request becomes an [`ApiError`] tagged with
//! the action the caller was performing.

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use store::ApiConfig;

use crate::error::{ApiError, Result};

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

/// Two clients are interchangeable when they target the same API.
impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

impl ApiClient {
    /// Build a client for the configured base URL.
    ///
    /// The request timeout only applies on native targets; browsers do not
    /// expose one through `fetch`.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        #[cfg(not(target_arch = "wasm32"))]
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ApiError::network("configurar o cliente HTTP", e))?;
        #[cfg(target_arch = "wasm32")]
        let http = Client::new();

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.http.request(method, url)
    }

    async fn send(&self, req: RequestBuilder, action: &'static str) -> Result<reqwest::Response> {
        let response = req.send().await.map_err(|e| {
            tracing::warn!(action, error = %e, "request failed");
            ApiError::network(action, e)
        })?;

        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(action, status = status.as_u16(), "request rejected");
            Err(ApiError::from_status(action, status, body))
        }
    }

    async fn json<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
        action: &'static str,
    ) -> Result<T> {
        self.send(req, action)
            .await?
            .json::<T>()
            .await
            .map_err(|e| {
                tracing::warn!(action, error = %e, "unreadable response body");
                ApiError::network(action, e)
            })
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str, action: &'static str) -> Result<T> {
        self.json(self.request(Method::GET, path), action).await
    }

    pub(crate) async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        action: &'static str,
    ) -> Result<T> {
        self.json(self.request(Method::POST, path).json(body), action).await
    }

    pub(crate) async fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        action: &'static str,
    ) -> Result<T> {
        self.json(self.request(Method::PATCH, path).json(body), action).await
    }

    /// DELETE ignores the response body.
    pub(crate) async fn delete(&self, path: &str, action: &'static str) -> Result<()> {
        self.send(self.request(Method::DELETE, path), action).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = ApiConfig {
            base_url: "http://localhost:3000/".to_string(),
            timeout_secs: 5,
        };
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000");
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        // Port 1 on loopback is never listening in a test environment.
        let config = ApiConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            timeout_secs: 5,
        };
        let client = ApiClient::new(&config).unwrap();
        let err = client
            .get::<serde_json::Value>("/missions", "consultar missões")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Network { action: "consultar missões", .. }));
        assert_eq!(err.to_string(), "Ocorreu um erro ao consultar missões.");
    }
}
