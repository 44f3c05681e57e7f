//! Handles for resources reached only through a relation.
//!
//! These resources carry an attribute snapshot and nothing else: they are
//! materialized from an [`Item`](super::Item) or [`User`](super::User)
//! relation read and expose the [`RestResource`] accessors.
//!
//! # Example
//!
//! ```rust,ignore
//! use promisepay::rest::RestResource;
//!
//! if let Some(account) = user.bank_account().await? {
//!     println!("Bank account {:?}", account.id());
//! }
//! ```

use std::fmt;
use std::sync::Arc;

use crate::clients::RestClient;
use crate::rest::{Attributes, RestResource};

macro_rules! related_resource {
    ($(#[$meta:meta])* $name:ident, $singular:literal, $plural:literal) => {
        $(#[$meta])*
        #[derive(Clone)]
        pub struct $name {
            client: Arc<RestClient>,
            attributes: Attributes,
        }

        impl RestResource for $name {
            const NAME: &'static str = $singular;
            const PLURAL: &'static str = $plural;

            fn from_attributes(client: Arc<RestClient>, attributes: Attributes) -> Self {
                Self { client, attributes }
            }

            fn attributes(&self) -> &Attributes {
                &self.attributes
            }

            fn attributes_mut(&mut self) -> &mut Attributes {
                &mut self.attributes
            }

            fn client(&self) -> &Arc<RestClient> {
                &self.client
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct($singular)
                    .field("attributes", &self.attributes)
                    .finish_non_exhaustive()
            }
        }
    };
}

related_resource!(
    /// A fee charged on an item.
    Fee,
    "Fee",
    "fees"
);

related_resource!(
    /// A payment movement recorded against an item.
    Transaction,
    "Transaction",
    "transactions"
);

related_resource!(
    /// A transaction grouped into a settlement batch.
    BatchTransaction,
    "BatchTransaction",
    "batch_transactions"
);

related_resource!(
    /// A user's bank account.
    BankAccount,
    "BankAccount",
    "bank_accounts"
);

related_resource!(
    /// A user's card account.
    CardAccount,
    "CardAccount",
    "card_accounts"
);

related_resource!(
    /// A user's PayPal account.
    PaypalAccount,
    "PaypalAccount",
    "paypal_accounts"
);

related_resource!(
    /// A user's wallet account.
    WalletAccount,
    "WalletAccount",
    "wallet_accounts"
);

related_resource!(
    /// The company a user belongs to.
    Company,
    "Company",
    "companies"
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiToken, PromisePayConfig, Username};
    use serde_json::json;

    fn client() -> Arc<RestClient> {
        let config = PromisePayConfig::builder()
            .username(Username::new("test@example.com").unwrap())
            .token(ApiToken::new("token").unwrap())
            .build()
            .unwrap();
        Arc::new(RestClient::new(&config))
    }

    #[test]
    fn test_plural_names_match_routes() {
        assert_eq!(Fee::PLURAL, "fees");
        assert_eq!(BatchTransaction::PLURAL, "batch_transactions");
        assert_eq!(PaypalAccount::PLURAL, "paypal_accounts");
        assert_eq!(Company::PLURAL, "companies");
    }

    #[test]
    fn test_handle_exposes_snapshot() {
        let attributes = Attributes::from_value(json!({"id": "ba-1", "currency": "AUD"})).unwrap();
        let account = BankAccount::from_attributes(client(), attributes);

        assert_eq!(account.id().as_deref(), Some("ba-1"));
        assert_eq!(account.get("currency"), Some(&json!("AUD")));
        assert_eq!(account.resource_path().unwrap(), "bank_accounts/ba-1");
    }

    #[test]
    fn test_debug_omits_client() {
        let fee = Fee::from_attributes(client(), Attributes::new());
        let debug = format!("{fee:?}");
        assert!(debug.starts_with("Fee"));
        assert!(!debug.contains("http_client"));
    }
}
