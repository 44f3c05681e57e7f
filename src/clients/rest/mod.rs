//! REST API client for the PromisePay API.
//!
//! This module provides a thin client over [`HttpClient`](crate::clients::HttpClient)
//! exposing the three verbs the resource layer uses.
//!
//! - [`RestClient`]: The REST API client with `get()`, `post()`, `patch()` methods
//! - [`RestError`]: Error type for REST API operations
//!
//! # Path Normalization
//!
//! Leading and trailing slashes are stripped (`/items/abc/` -> `items/abc`)
//! and empty paths are rejected.
//!
//! # Retry Behavior
//!
//! Requests are attempted `request_tries` times (default 1) when the API
//! answers 429 or 5xx. Other statuses fail immediately.

mod client;
mod errors;

pub use client::RestClient;
pub use errors::RestError;
