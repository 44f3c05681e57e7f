//! HTTP client types for PromisePay API communication.
//!
//! This module provides the transport layer: request/response types, the
//! authenticated async HTTP client, and the REST client used by resource
//! handles.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PATCH)
//! - [`rest::RestClient`]: Higher-level REST API client
//! - [`rest::RestError`]: REST-specific error types
//!
//! # Error Mapping
//!
//! Any non-2xx response becomes [`HttpError::Response`] carrying the status
//! code, so callers can tell 404 and 422 apart from other failures.

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{HttpError, HttpResponseError, MaxHttpRetriesExceededError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest};
pub use http_response::HttpResponse;

pub use rest::{RestClient, RestError};
