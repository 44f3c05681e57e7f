//! Configuration types for the PromisePay client.
//!
//! This module provides the configuration used to construct the HTTP
//! transport that every resource handle talks through.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`PromisePayConfig`]: The main configuration struct holding all client settings
//! - [`PromisePayConfigBuilder`]: A builder for constructing [`PromisePayConfig`] instances
//! - [`Username`]: A validated marketplace username
//! - [`ApiToken`]: A validated API token newtype with masked debug output
//! - [`BaseUrl`]: A validated base URL overriding the environment default
//! - [`Environment`]: The PromisePay deployment to talk to
//!
//! # Example
//!
//! ```rust
//! use promisepay::{ApiToken, Environment, PromisePayConfig, Username};
//!
//! let config = PromisePayConfig::builder()
//!     .username(Username::new("marketplace@example.com").unwrap())
//!     .token(ApiToken::new("my-token").unwrap())
//!     .environment(Environment::Production)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url(), "https://secure.api.promisepay.com");
//! ```

mod environment;
mod newtypes;

pub use environment::Environment;
pub use newtypes::{ApiToken, BaseUrl, Username};

use crate::error::ConfigError;

/// Configuration for the PromisePay client.
///
/// # Thread Safety
///
/// `PromisePayConfig` is `Clone`, `Send`, and `Sync`.
///
/// # Example
///
/// ```rust
/// use promisepay::{ApiToken, BaseUrl, PromisePayConfig, Username};
///
/// let config = PromisePayConfig::builder()
///     .username(Username::new("marketplace@example.com").unwrap())
///     .token(ApiToken::new("my-token").unwrap())
///     .api_domain(BaseUrl::new("http://localhost:3000").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.base_url(), "http://localhost:3000");
/// ```
#[derive(Clone, Debug)]
pub struct PromisePayConfig {
    username: Username,
    token: ApiToken,
    environment: Environment,
    api_domain: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
    request_tries: u32,
}

impl PromisePayConfig {
    /// Creates a new builder for constructing a `PromisePayConfig`.
    #[must_use]
    pub fn builder() -> PromisePayConfigBuilder {
        PromisePayConfigBuilder::new()
    }

    /// Returns the marketplace username.
    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }

    /// Returns the API token.
    #[must_use]
    pub const fn token(&self) -> &ApiToken {
        &self.token
    }

    /// Returns the configured environment.
    #[must_use]
    pub const fn environment(&self) -> Environment {
        self.environment
    }

    /// Returns the base URL override, if configured.
    #[must_use]
    pub const fn api_domain(&self) -> Option<&BaseUrl> {
        self.api_domain.as_ref()
    }

    /// Returns the base URL requests are sent to.
    ///
    /// The `api_domain` override wins over the environment default.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.api_domain
            .as_ref()
            .map_or_else(|| self.environment.default_base_url(), |url| url.as_ref())
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns how many times the transport attempts a request that fails
    /// with a retryable status (429 or 5xx).
    #[must_use]
    pub const fn request_tries(&self) -> u32 {
        self.request_tries
    }
}

// Verify PromisePayConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PromisePayConfig>();
};

/// Builder for constructing [`PromisePayConfig`] instances.
///
/// Required fields are `username` and `token`.
///
/// # Defaults
///
/// - `environment`: [`Environment::Prelive`]
/// - `api_domain`: `None`
/// - `user_agent_prefix`: `None`
/// - `request_tries`: `1`
#[derive(Debug, Default)]
pub struct PromisePayConfigBuilder {
    username: Option<Username>,
    token: Option<ApiToken>,
    environment: Option<Environment>,
    api_domain: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
    request_tries: Option<u32>,
}

impl PromisePayConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the marketplace username (required).
    #[must_use]
    pub fn username(mut self, username: Username) -> Self {
        self.username = Some(username);
        self
    }

    /// Sets the API token (required).
    #[must_use]
    pub fn token(mut self, token: ApiToken) -> Self {
        self.token = Some(token);
        self
    }

    /// Sets the environment.
    #[must_use]
    pub const fn environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Overrides the base URL derived from the environment.
    #[must_use]
    pub fn api_domain(mut self, url: BaseUrl) -> Self {
        self.api_domain = Some(url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the number of attempts for retryable transport failures.
    #[must_use]
    pub const fn request_tries(mut self, tries: u32) -> Self {
        self.request_tries = Some(tries);
        self
    }

    /// Builds the [`PromisePayConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `username` or `token`
    /// are not set, and [`ConfigError::InvalidRequestTries`] if tries is zero.
    pub fn build(self) -> Result<PromisePayConfig, ConfigError> {
        let username = self
            .username
            .ok_or(ConfigError::MissingRequiredField { field: "username" })?;
        let token = self
            .token
            .ok_or(ConfigError::MissingRequiredField { field: "token" })?;

        let request_tries = self.request_tries.unwrap_or(1);
        if request_tries == 0 {
            return Err(ConfigError::InvalidRequestTries);
        }

        Ok(PromisePayConfig {
            username,
            token,
            environment: self.environment.unwrap_or_default(),
            api_domain: self.api_domain,
            user_agent_prefix: self.user_agent_prefix,
            request_tries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> PromisePayConfigBuilder {
        PromisePayConfig::builder()
            .username(Username::new("marketplace@example.com").unwrap())
            .token(ApiToken::new("token").unwrap())
    }

    #[test]
    fn test_builder_requires_username() {
        let result = PromisePayConfigBuilder::new()
            .token(ApiToken::new("token").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "username" })
        ));
    }

    #[test]
    fn test_builder_requires_token() {
        let result = PromisePayConfigBuilder::new()
            .username(Username::new("marketplace@example.com").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "token" })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = credentials().build().unwrap();

        assert_eq!(config.environment(), Environment::Prelive);
        assert_eq!(config.base_url(), "https://test.api.promisepay.com");
        assert!(config.api_domain().is_none());
        assert!(config.user_agent_prefix().is_none());
        assert_eq!(config.request_tries(), 1);
    }

    #[test]
    fn test_api_domain_overrides_environment() {
        let config = credentials()
            .environment(Environment::Production)
            .api_domain(BaseUrl::new("http://127.0.0.1:9999/").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.base_url(), "http://127.0.0.1:9999");
    }

    #[test]
    fn test_zero_request_tries_is_rejected() {
        let result = credentials().request_tries(0).build();
        assert_eq!(result.unwrap_err(), ConfigError::InvalidRequestTries);
    }

    #[test]
    fn test_config_debug_masks_token() {
        let config = credentials().user_agent_prefix("MyMarket/2.0").build().unwrap();
        let debug_str = format!("{config:?}");

        assert!(debug_str.contains("PromisePayConfig"));
        assert!(debug_str.contains("ApiToken(*****)"));
        assert_eq!(config.user_agent_prefix(), Some("MyMarket/2.0"));
    }
}
