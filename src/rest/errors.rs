//! Resource-specific error types for REST API operations.
//!
//! This module maps transport failures to the error classes the PromisePay
//! API distinguishes:
//!
//! - **404**: [`ResourceError::NotFound`]
//! - **422**: [`ResourceError::UnprocessableEntity`] - validation errors and
//!   "relation does not exist" answers
//! - **Other 4xx/5xx**: [`ResourceError::Http`] - the general API error class
//!
//! Malformed success responses surface as [`ResourceError::MissingEnvelope`]
//! or [`ResourceError::UnexpectedPayload`].
//!
//! # Example
//!
//! ```rust,ignore
//! use promisepay::rest::{ErrorKind, ResourceError};
//!
//! match item.cancel(None).await {
//!     Ok(_) => println!("Cancelled: {:?}", item.get("state")),
//!     Err(ResourceError::UnprocessableEntity { errors, .. }) => {
//!         for (field, messages) in errors {
//!             println!("{}: {:?}", field, messages);
//!         }
//!     }
//!     Err(e) if e.kind() == ErrorKind::NotFound => println!("No such item"),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

use std::collections::HashMap;

use crate::clients::{HttpError, HttpResponseError, RestError};
use thiserror::Error;

/// The error classes surfaced by the remote service.
///
/// Use [`ResourceError::kind`] to match on the class without destructuring
/// the variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The remote service answered 404.
    NotFound,
    /// The remote service answered 422.
    UnprocessableEntity,
    /// Any other failure.
    General,
}

/// Error type for resource operations.
///
/// # Example
///
/// ```rust
/// use promisepay::rest::{ErrorKind, ResourceError};
///
/// let error = ResourceError::NotFound {
///     message: r#"{"errors":{"id":["invalid"]}}"#.to_string(),
///     request_id: None,
/// };
/// assert_eq!(error.kind(), ErrorKind::NotFound);
/// assert!(error.to_string().contains("not found"));
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The resource or relation was not found (HTTP 404).
    #[error("Resource not found: {message}")]
    NotFound {
        /// Serialized error members of the response body.
        message: String,
        /// The request ID for debugging (from X-Request-Id header).
        request_id: Option<String>,
    },

    /// The request was rejected as unprocessable (HTTP 422).
    #[error("Unprocessable entity: {errors:?}")]
    UnprocessableEntity {
        /// A map of field names to error messages.
        errors: HashMap<String, Vec<String>>,
        /// The request ID for debugging (from X-Request-Id header).
        request_id: Option<String>,
    },

    /// A success response lacked the key the resource payload lives under.
    #[error("{resource} response is missing the '{key}' envelope")]
    MissingEnvelope {
        /// The type name of the resource being read.
        resource: &'static str,
        /// The missing key (dotted for nested keys).
        key: String,
    },

    /// A success response carried a payload of the wrong JSON shape.
    #[error("{resource} response has an unexpected '{key}' payload, expected {expected}")]
    UnexpectedPayload {
        /// The type name of the resource being read.
        resource: &'static str,
        /// The key holding the payload.
        key: String,
        /// The JSON shape that was expected.
        expected: &'static str,
    },

    /// The handle has no identifier to build a path from.
    #[error("{resource} has no id; cannot build its API path")]
    MissingId {
        /// The type name of the resource.
        resource: &'static str,
    },

    /// Any other HTTP-level error.
    #[error(transparent)]
    Http(HttpError),

    /// The request path could not be built.
    #[error(transparent)]
    Rest(RestError),
}

impl ResourceError {
    /// Returns the error class of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::UnprocessableEntity { .. } => ErrorKind::UnprocessableEntity,
            _ => ErrorKind::General,
        }
    }

    /// Returns the request ID if available.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::NotFound { request_id, .. } | Self::UnprocessableEntity { request_id, .. } => {
                request_id.as_deref()
            }
            Self::Http(HttpError::Response(e)) => e.error_reference.as_deref(),
            Self::Http(HttpError::MaxRetries(e)) => e.error_reference.as_deref(),
            _ => None,
        }
    }

    /// Classifies a non-2xx response by status code.
    fn from_response_error(error: HttpResponseError) -> Self {
        match error.code {
            404 => Self::NotFound {
                message: error.message,
                request_id: error.error_reference,
            },
            422 => {
                let body = serde_json::from_str(&error.message).unwrap_or_default();
                Self::UnprocessableEntity {
                    errors: parse_validation_errors(&body),
                    request_id: error.error_reference,
                }
            }
            _ => Self::Http(HttpError::Response(error)),
        }
    }
}

impl From<HttpError> for ResourceError {
    fn from(error: HttpError) -> Self {
        match error {
            HttpError::Response(e) => Self::from_response_error(e),
            other => Self::Http(other),
        }
    }
}

impl From<RestError> for ResourceError {
    fn from(error: RestError) -> Self {
        match error {
            RestError::Http(e) => e.into(),
            other => Self::Rest(other),
        }
    }
}

/// Parses validation errors from a serialized error body.
///
/// PromisePay returns validation errors keyed by field:
/// ```json
/// {"errors": {"amount": ["is invalid"], "user_id": ["can't be blank"]}}
/// ```
///
/// Array and plain string forms are collected under `base`.
fn parse_validation_errors(body: &serde_json::Value) -> HashMap<String, Vec<String>> {
    let mut result = HashMap::new();

    if let Some(errors) = body.get("errors") {
        match errors {
            serde_json::Value::Object(map) => {
                for (field, messages) in map {
                    let msgs: Vec<String> = match messages {
                        serde_json::Value::Array(arr) => arr
                            .iter()
                            .filter_map(|v| v.as_str().map(ToString::to_string))
                            .collect(),
                        serde_json::Value::String(s) => vec![s.clone()],
                        _ => vec![messages.to_string()],
                    };
                    result.insert(field.clone(), msgs);
                }
            }
            serde_json::Value::Array(arr) => {
                let msgs: Vec<String> = arr
                    .iter()
                    .filter_map(|v| v.as_str().map(ToString::to_string))
                    .collect();
                if !msgs.is_empty() {
                    result.insert("base".to_string(), msgs);
                }
            }
            serde_json::Value::String(s) => {
                result.insert("base".to_string(), vec![s.clone()]);
            }
            _ => {}
        }
    }

    result
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};
