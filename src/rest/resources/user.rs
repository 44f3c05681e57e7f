//! User resource implementation.
//!
//! A [`User`] is a buyer or seller on the platform. Its account and company
//! relations may legitimately be absent; those reads return `Ok(None)`
//! rather than an error when the service reports the relation missing:
//!
//! | Relation | Absent when the service answers |
//! |----------|---------------------------------|
//! | [`User::bank_account`], [`User::card_account`], [`User::paypal_account`], [`User::wallet_account`] | 422 |
//! | [`User::company`] | 404 |
//! | [`User::address`] | never called without `related.addresses` |
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use promisepay::{RestClient, User};
//!
//! let user = User::new(Arc::new(RestClient::new(&config)), "u1");
//!
//! match user.bank_account().await? {
//!     Some(account) => println!("Disburse to {:?}", account.id()),
//!     None => println!("No bank account configured"),
//! }
//! ```

use std::fmt;
use std::sync::Arc;

use serde_json::{json, Value};

use crate::clients::RestClient;
use crate::rest::resource::{absent_on, fetch_envelope, fetch_many, fetch_one, path_segment};
use crate::rest::{Attributes, ErrorKind, ListParams, ResourceError, RestResource};

use super::item::Item;
use super::related::{BankAccount, CardAccount, Company, PaypalAccount, WalletAccount};

/// A handle on a PromisePay user.
#[derive(Clone)]
pub struct User {
    client: Arc<RestClient>,
    attributes: Attributes,
}

impl RestResource for User {
    const NAME: &'static str = "User";
    const PLURAL: &'static str = "users";

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

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("attributes", &self.attributes)
            .finish_non_exhaustive()
    }
}

impl User {
    /// Creates a handle for a known user id with no other attributes.
    #[must_use]
    pub fn new(client: Arc<RestClient>, id: impl Into<String>) -> Self {
        let mut attributes = serde_json::Map::new();
        attributes.insert("id".to_string(), Value::String(id.into()));
        Self::from_attributes(client, attributes.into())
    }

    /// Creates a handle from an existing attribute snapshot.
    #[must_use]
    pub fn with_attributes(client: Arc<RestClient>, attributes: Attributes) -> Self {
        Self::from_attributes(client, attributes)
    }

    /// Lists items the user takes part in.
    ///
    /// # Errors
    ///
    /// Propagates every error unchanged. A response without an `items` key
    /// yields an empty list.
    pub async fn items(&self, params: Option<ListParams>) -> Result<Vec<Item>, ResourceError> {
        fetch_many(&self.client, &self.member_path("items")?, params).await
    }

    /// Fetches the user's bank account, or `None` if none is configured.
    ///
    /// # Errors
    ///
    /// Propagates every error except [`ResourceError::UnprocessableEntity`].
    pub async fn bank_account(&self) -> Result<Option<BankAccount>, ResourceError> {
        self.account::<BankAccount>().await
    }

    /// Fetches the user's card account, or `None` if none is configured.
    ///
    /// # Errors
    ///
    /// Propagates every error except [`ResourceError::UnprocessableEntity`].
    pub async fn card_account(&self) -> Result<Option<CardAccount>, ResourceError> {
        self.account::<CardAccount>().await
    }

    /// Fetches the user's PayPal account, or `None` if none is configured.
    ///
    /// # Errors
    ///
    /// Propagates every error except [`ResourceError::UnprocessableEntity`].
    pub async fn paypal_account(&self) -> Result<Option<PaypalAccount>, ResourceError> {
        self.account::<PaypalAccount>().await
    }

    /// Fetches the user's wallet account, or `None` if none is configured.
    ///
    /// # Errors
    ///
    /// Propagates every error except [`ResourceError::UnprocessableEntity`].
    pub async fn wallet_account(&self) -> Result<Option<WalletAccount>, ResourceError> {
        self.account::<WalletAccount>().await
    }

    /// Fetches the user's company, or `None` if the user has none.
    ///
    /// # Errors
    ///
    /// Propagates every error except [`ResourceError::NotFound`].
    pub async fn company(&self) -> Result<Option<Company>, ResourceError> {
        let path = self.member_path(Company::PLURAL)?;
        absent_on(
            fetch_one(&self.client, &path).await,
            ErrorKind::NotFound,
            Company::PLURAL,
        )
    }

    /// Fetches the user's address document.
    ///
    /// Returns `Ok(None)` without contacting the service unless the
    /// snapshot has a `related.addresses` link.
    ///
    /// # Errors
    ///
    /// Propagates every error unchanged once a request is made.
    pub async fn address(&self) -> Result<Option<Attributes>, ResourceError> {
        let Some(address_id) = self
            .attributes
            .get("related")
            .and_then(|related| related.get("addresses"))
            .and_then(path_segment)
        else {
            tracing::debug!(user = ?self.id(), "User has no related address");
            return Ok(None);
        };

        let path = format!("addresses/{address_id}");
        fetch_envelope(&self.client, &path, "Address", "addresses")
            .await
            .map(Some)
    }

    /// Sets the account payouts are sent to.
    ///
    /// The snapshot is not modified. Returns `true` on success.
    ///
    /// # Errors
    ///
    /// Propagates every error unchanged.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let user = User::new(client, "u1");
    /// assert!(user.disbursement_account("ba-1").await?);
    /// ```
    pub async fn disbursement_account(&self, account_id: &str) -> Result<bool, ResourceError> {
        let path = self.member_path("disbursement_account")?;
        tracing::debug!(path = %path, "Setting disbursement account");
        self.client
            .post(&path, json!({ "account_id": account_id }))
            .await?;
        Ok(true)
    }

    async fn account<R: RestResource>(&self) -> Result<Option<R>, ResourceError> {
        let path = self.member_path(R::PLURAL)?;
        absent_on(
            fetch_one(&self.client, &path).await,
            ErrorKind::UnprocessableEntity,
            R::PLURAL,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiToken, PromisePayConfig, Username};

    fn client() -> Arc<RestClient> {
        let config = PromisePayConfig::builder()
            .username(Username::new("test@example.com").unwrap())
            .token(ApiToken::new("token").unwrap())
            .build()
            .unwrap();
        Arc::new(RestClient::new(&config))
    }

    #[test]
    fn test_new_sets_only_id() {
        let user = User::new(client(), "u1");
        assert_eq!(user.id().as_deref(), Some("u1"));
        assert_eq!(user.resource_path().unwrap(), "users/u1");
    }

    #[tokio::test]
    async fn test_address_without_related_link_is_none() {
        let user = User::with_attributes(
            client(),
            Attributes::from_value(json!({"id": "u1", "related": {}})).unwrap(),
        );
        assert!(user.address().await.unwrap().is_none());
    }

    #[test]
    fn test_account_relations_use_plural_routes() {
        let user = User::new(client(), "u1");
        assert_eq!(
            user.member_path(BankAccount::PLURAL).unwrap(),
            "users/u1/bank_accounts"
        );
        assert_eq!(
            user.member_path(WalletAccount::PLURAL).unwrap(),
            "users/u1/wallet_accounts"
        );
    }
}
