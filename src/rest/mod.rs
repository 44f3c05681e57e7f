//! REST resource layer for the PromisePay API.
//!
//! This module provides:
//!
//! - **[`RestResource`] trait**: The contract every resource handle implements
//! - **[`Attributes`]**: The ordered attribute snapshot a handle holds
//! - **[`ListParams`]**: Pagination parameters for collection relations
//! - **[`ResourceError`]** and **[`ErrorKind`]**: Error classes for resource operations
//! - **[`resources`]**: The concrete handles ([`Item`], [`User`], ...)
//!
//! # Snapshot Replacement
//!
//! A successful update or action replaces a handle's snapshot with the
//! server's representation. Fields the server does not echo back are
//! dropped. Failed calls leave the snapshot untouched.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use promisepay::rest::{ListParams, RestResource};
//! use promisepay::rest::resources::Item;
//!
//! let mut item = Item::new(Arc::clone(&client), "abc123");
//! item.update(serde_json::json!({"name": "Road bike"})).await?;
//!
//! let fees = item.fees(Some(ListParams::new().limit(20).offset(40))).await?;
//! ```

mod attributes;
mod errors;
mod params;
mod resource;

pub mod resources;

// Public exports
pub use attributes::Attributes;
pub use errors::{ErrorKind, ResourceError};
pub use params::ListParams;
pub use resource::RestResource;
pub use resources::{
    BankAccount, BatchTransaction, CardAccount, Company, Fee, Item, ItemAction, PaypalAccount,
    Transaction, UnknownItemAction, User, WalletAccount,
};
