//! Error types for the PromisePay client.
//!
//! This module contains error types used throughout the crate for configuration
//! and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use promisepay::{ApiToken, ConfigError};
//!
//! let result = ApiToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyToken)));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Username cannot be empty.
    #[error("Username cannot be empty. Please provide the marketplace login used for the PromisePay API.")]
    EmptyUsername,

    /// API token cannot be empty.
    #[error("API token cannot be empty. Please provide a valid PromisePay API token.")]
    EmptyToken,

    /// Environment name is not recognised.
    #[error("Invalid environment '{environment}'. Expected 'prelive' or 'production'.")]
    InvalidEnvironment {
        /// The environment string that was provided.
        environment: String,
    },

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide a URL with an http or https scheme (e.g., 'https://test.api.promisepay.com').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Request tries must allow at least one attempt.
    #[error("Request tries must be at least 1.")]
    InvalidRequestTries,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_token_error_message() {
        let message = ConfigError::EmptyToken.to_string();
        assert!(message.contains("API token cannot be empty"));
    }

    #[test]
    fn test_invalid_environment_error_message() {
        let error = ConfigError::InvalidEnvironment {
            environment: "staging".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("staging"));
        assert!(message.contains("prelive"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "username" };
        let message = error.to_string();
        assert!(message.contains("username"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyUsername;
        let _: &dyn std::error::Error = &error;
    }
}
