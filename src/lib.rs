//! # PromisePay Rust Client
//!
//! A Rust client for the PromisePay marketplace payments API, providing
//! type-safe configuration, an authenticated async HTTP transport, and
//! resource handles for items and users.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`PromisePayConfig`] and [`PromisePayConfigBuilder`]
//! - Validated newtypes for credentials and the API domain
//! - Async HTTP client with HTTP Basic authentication and optional retries
//! - Resource handles ([`Item`], [`User`]) holding a server-authoritative
//!   attribute snapshot
//! - Item lifecycle actions via [`ItemAction`]
//! - Relation reads that return `Ok(None)` when the service reports a
//!   relation as absent
//!
//! ## Quick Start
//!
//! ```rust
//! use promisepay::{ApiToken, Environment, PromisePayConfig, Username};
//!
//! let config = PromisePayConfig::builder()
//!     .username(Username::new("marketplace@example.com").unwrap())
//!     .token(ApiToken::new("your-api-token").unwrap())
//!     .environment(Environment::Prelive)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url(), "https://test.api.promisepay.com");
//! ```
//!
//! ## Working With Items
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use promisepay::{Item, RestClient};
//! use promisepay::rest::{ListParams, RestResource};
//!
//! let client = Arc::new(RestClient::new(&config));
//! let mut item = Item::new(Arc::clone(&client), "abc123");
//!
//! // Every successful mutation replaces the snapshot
//! item.update(serde_json::json!({"name": "Road bike"})).await?;
//! item.make_payment(Some(serde_json::json!({"account_id": "card-1"}))).await?;
//! println!("State: {:?}", item.get("state"));
//!
//! // Relations return fresh handles sharing the same client
//! let buyer = item.buyer().await?;
//! let fees = item.fees(Some(ListParams::new().limit(50))).await?;
//! ```
//!
//! ## Absent Relations
//!
//! ```rust,ignore
//! use promisepay::User;
//!
//! let user = User::new(client, "u1");
//! if user.bank_account().await?.is_none() {
//!     println!("No bank account configured");
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Server is authoritative**: No local validation of attributes or action legality
//! - **Thread-safe**: Clients and handles are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events and never installs a subscriber.

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{
    ApiToken, BaseUrl, Environment, PromisePayConfig, PromisePayConfigBuilder, Username,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, HttpResponseError,
    MaxHttpRetriesExceededError, RestClient, RestError,
};

// Re-export resource types
pub use rest::{
    Attributes, ErrorKind, Item, ItemAction, ListParams, ResourceError, RestResource, User,
};
