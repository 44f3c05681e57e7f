//! REST client implementation for the PromisePay API.
//!
//! This module provides the [`RestClient`] type, the transport every
//! resource handle sends its requests through.

use std::collections::HashMap;

use crate::clients::rest::RestError;
use crate::clients::{HttpClient, HttpRequest, HttpResponse};
use crate::config::PromisePayConfig;

/// REST API client for the PromisePay API.
///
/// Provides `get`, `post` and `patch` with path normalization. Non-2xx
/// responses surface as [`RestError::Http`].
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`; wrap it in an `Arc` to share it between
/// resource handles.
///
/// # Example
///
/// ```rust,ignore
/// use promisepay::{ApiToken, PromisePayConfig, RestClient, Username};
///
/// let config = PromisePayConfig::builder()
///     .username(Username::new("marketplace@example.com").unwrap())
///     .token(ApiToken::new("token").unwrap())
///     .build()
///     .unwrap();
///
/// let client = RestClient::new(&config);
///
/// let response = client.get("items/abc123", None).await?;
/// let response = client
///     .patch("items/abc123", serde_json::json!({"name": "Bike"}))
///     .await?;
/// ```
#[derive(Debug)]
pub struct RestClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
    /// Attempts per request for retryable failures.
    tries: u32,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client from the given configuration.
    #[must_use]
    pub fn new(config: &PromisePayConfig) -> Self {
        tracing::debug!(
            environment = %config.environment(),
            base_url = config.base_url(),
            "Creating PromisePay REST client"
        );

        Self {
            http_client: HttpClient::new(config),
            tries: config.request_tries(),
        }
    }

    /// Returns the base URI requests are sent to.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        self.http_client.base_uri()
    }

    /// Sends a GET request to the specified path.
    ///
    /// # Arguments
    ///
    /// * `path` - The REST API path (e.g., `items/abc123/fees`)
    /// * `query` - Optional query parameters
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for HTTP-level errors, including non-2xx responses.
    pub async fn get(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        let request =
            HttpRequest::get(normalize_path(path)?).with_query(query.unwrap_or_default());
        self.send(request).await
    }

    /// Sends a POST request with a JSON body to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for HTTP-level errors, including non-2xx responses.
    pub async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<HttpResponse, RestError> {
        self.send(HttpRequest::post(normalize_path(path)?, body)).await
    }

    /// Sends a PATCH request with a JSON body to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for HTTP-level errors, including non-2xx responses.
    pub async fn patch(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<HttpResponse, RestError> {
        self.send(HttpRequest::patch(normalize_path(path)?, body)).await
    }

    /// Applies the configured attempt budget and sends the request.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, RestError> {
        let request = request.with_tries(self.tries);
        self.http_client.request(request).await.map_err(Into::into)
    }
}

/// Normalizes a REST API path.
///
/// Leading and trailing `/` characters are stripped; an empty result is an
/// error.
fn normalize_path(path: &str) -> Result<String, RestError> {
    let trimmed = path.trim_matches('/');

    if trimmed.is_empty() {
        return Err(RestError::InvalidPath {
            path: path.to_string(),
        });
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiToken, Username};

    #[test]
    fn test_normalize_path_strips_slashes() {
        assert_eq!(normalize_path("/items/abc").unwrap(), "items/abc");
        assert_eq!(normalize_path("items/abc/").unwrap(), "items/abc");
        assert_eq!(normalize_path("//users").unwrap(), "users");
    }

    #[test]
    fn test_normalize_path_keeps_nested_segments() {
        assert_eq!(
            normalize_path("items/abc/batch_transactions").unwrap(),
            "items/abc/batch_transactions"
        );
    }

    #[test]
    fn test_normalize_path_empty_path_returns_error() {
        assert!(matches!(
            normalize_path(""),
            Err(RestError::InvalidPath { path }) if path.is_empty()
        ));
        assert!(matches!(
            normalize_path("/"),
            Err(RestError::InvalidPath { path }) if path == "/"
        ));
    }

    #[test]
    fn test_rest_client_exposes_base_uri() {
        let config = PromisePayConfig::builder()
            .username(Username::new("market@example.com").unwrap())
            .token(ApiToken::new("abc").unwrap())
            .build()
            .unwrap();
        let client = RestClient::new(&config);
        assert_eq!(client.base_uri(), "https://test.api.promisepay.com");
    }
}
