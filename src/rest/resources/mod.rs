//! PromisePay resource handles.
//!
//! # Handles With Behaviour
//!
//! - [`Item`]: updates, lifecycle actions ([`ItemAction`]), and relations to
//!   its parties, fees, and transactions
//! - [`User`]: updates, account and company relations, and the disbursement
//!   account setting
//!
//! # Relation-Only Handles
//!
//! [`Fee`], [`Transaction`], [`BatchTransaction`], [`BankAccount`],
//! [`CardAccount`], [`PaypalAccount`], [`WalletAccount`], and [`Company`]
//! carry an attribute snapshot and the [`RestResource`](crate::rest::RestResource)
//! accessors only.
//!
//! # Example
//!
//! ```rust,ignore
//! use promisepay::rest::resources::{Item, User};
//! use promisepay::rest::RestResource;
//!
//! let item = Item::find(client.clone(), "abc123").await?;
//! let buyer: User = item.buyer().await?;
//! for item in buyer.items(None).await? {
//!     println!("{:?}", item.get("name"));
//! }
//! ```

mod item;
mod related;
mod user;

pub use item::{Item, ItemAction, UnknownItemAction};
pub use related::{
    BankAccount, BatchTransaction, CardAccount, Company, Fee, PaypalAccount, Transaction,
    WalletAccount,
};
pub use user::User;
