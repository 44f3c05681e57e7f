//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated marketplace username.
///
/// PromisePay authenticates with HTTP basic auth; this is the login half
/// of the credential pair.
///
/// # Example
///
/// ```rust
/// use promisepay::Username;
///
/// let username = Username::new("marketplace@example.com").unwrap();
/// assert_eq!(username.as_ref(), "marketplace@example.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    /// Creates a new validated username.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyUsername`] if the username is empty.
    pub fn new(username: impl Into<String>) -> Result<Self, ConfigError> {
        let username = username.into();
        if username.trim().is_empty() {
            return Err(ConfigError::EmptyUsername);
        }
        Ok(Self(username))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated PromisePay API token.
///
/// The `Debug` implementation masks the token, displaying only
/// `ApiToken(*****)` so it does not leak into logs.
///
/// # Example
///
/// ```rust
/// use promisepay::ApiToken;
///
/// let token = ApiToken::new("secret-token").unwrap();
/// assert_eq!(format!("{:?}", token), "ApiToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Creates a new validated API token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for ApiToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(*****)")
    }
}

/// A validated base URL for API requests.
///
/// Only `http` and `https` schemes are accepted. Trailing slashes are
/// removed so paths can be joined with a single `/`.
///
/// # Example
///
/// ```rust
/// use promisepay::BaseUrl;
///
/// let url = BaseUrl::new("https://test.api.promisepay.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://test.api.promisepay.com");
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), "test.api.promisepay.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    scheme_end: usize,
}

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL has no host or a
    /// scheme other than `http`/`https`.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidBaseUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme != "http" && scheme != "https" {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        let host = &url[scheme_end + 3..];
        let host_name = host.split('/').next().unwrap_or_default();
        if host_name.is_empty() || host_name.contains(char::is_whitespace) {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        Ok(Self { url, scheme_end })
    }

    /// Returns the URL scheme (`http` or `https`).
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host portion of the URL, including any port.
    #[must_use]
    pub fn host_name(&self) -> &str {
        self.url[self.scheme_end + 3..]
            .split('/')
            .next()
            .unwrap_or_default()
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_rejects_blank() {
        assert_eq!(Username::new(""), Err(ConfigError::EmptyUsername));
        assert_eq!(Username::new("   "), Err(ConfigError::EmptyUsername));
    }

    #[test]
    fn test_api_token_rejects_empty() {
        assert_eq!(ApiToken::new(""), Err(ConfigError::EmptyToken));
    }

    #[test]
    fn test_api_token_debug_is_masked() {
        let token = ApiToken::new("super-secret").unwrap();
        let debug = format!("{token:?}");
        assert!(!debug.contains("super-secret"));
        assert_eq!(token.as_ref(), "super-secret");
    }

    #[test]
    fn test_base_url_strips_trailing_slashes() {
        let url = BaseUrl::new("http://127.0.0.1:8080//").unwrap();
        assert_eq!(url.as_ref(), "http://127.0.0.1:8080");
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_name(), "127.0.0.1:8080");
    }

    #[test]
    fn test_base_url_rejects_missing_scheme() {
        assert!(matches!(
            BaseUrl::new("test.api.promisepay.com"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_base_url_rejects_unsupported_scheme() {
        assert!(matches!(
            BaseUrl::new("ftp://test.api.promisepay.com"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_base_url_rejects_empty_host() {
        assert!(matches!(
            BaseUrl::new("https://"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }
}
