//! Requests sent by the PromisePay HTTP client.
//!
//! A request is built for one verb: reads carry an optional query string,
//! writes carry a JSON body. A write without a body cannot be expressed.

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

/// HTTP verbs used by the PromisePay API.
///
/// Reads are `GET`, lifecycle actions and partial updates are `PATCH`, and
/// the disbursement account setting is `POST`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// Reads a resource, relation, or detail document.
    Get,
    /// Sets a value on a resource.
    Post,
    /// Updates a resource or performs an action on it.
    Patch,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Patch => "patch",
        })
    }
}

/// One request to the PromisePay API.
///
/// # Example
///
/// ```rust
/// use promisepay::clients::{HttpMethod, HttpRequest};
/// use serde_json::json;
///
/// let query = [("limit".to_string(), "20".to_string())].into_iter().collect();
/// let read = HttpRequest::get("items/abc123/fees").with_query(query);
/// assert_eq!(read.method(), HttpMethod::Get);
/// assert!(read.body().is_none());
///
/// let cancel = HttpRequest::patch("items/abc123/cancel", json!({})).with_tries(3);
/// assert_eq!(cancel.body(), Some(&json!({})));
/// assert_eq!(cancel.tries(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    method: HttpMethod,
    path: String,
    body: Option<Value>,
    query: HashMap<String, String>,
    tries: u32,
}

impl HttpRequest {
    fn new(method: HttpMethod, path: impl Into<String>, body: Option<Value>) -> Self {
        Self {
            method,
            path: path.into(),
            body,
            query: HashMap::new(),
            tries: 1,
        }
    }

    /// A `GET` request with no query.
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path, None)
    }

    /// A `POST` request with a JSON body.
    #[must_use]
    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self::new(HttpMethod::Post, path, Some(body))
    }

    /// A `PATCH` request with a JSON body.
    #[must_use]
    pub fn patch(path: impl Into<String>, body: Value) -> Self {
        Self::new(HttpMethod::Patch, path, Some(body))
    }

    /// Replaces the query parameters.
    #[must_use]
    pub fn with_query(mut self, query: HashMap<String, String>) -> Self {
        self.query = query;
        self
    }

    /// Sets how many attempts a 429 or 5xx answer may consume. Values below
    /// one are treated as one.
    #[must_use]
    pub fn with_tries(mut self, tries: u32) -> Self {
        self.tries = tries.max(1);
        self
    }

    /// The verb.
    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.method
    }

    /// The path relative to the API base URL.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The JSON body of a write.
    #[must_use]
    pub const fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// The query parameters, empty unless set.
    #[must_use]
    pub const fn query(&self) -> &HashMap<String, String> {
        &self.query
    }

    /// The attempt budget.
    #[must_use]
    pub const fn tries(&self) -> u32 {
        self.tries
    }
}
