//! Item resource implementation.
//!
//! An [`Item`] is a transaction between a buyer and a seller. Beyond
//! updates, items move through a payment and dispute lifecycle driven by
//! the remote service; every lifecycle step is an [`ItemAction`].
//!
//! # Resource-Specific Operations
//!
//! - [`Item::status`], [`Item::wire_details`], [`Item::bpay_details`] - detail documents
//! - [`Item::buyer`], [`Item::seller`] - the parties as [`User`] handles
//! - [`Item::fees`], [`Item::transactions`], [`Item::batch_transactions`] - paginated relations
//! - [`Item::perform`] and one named method per action, e.g. [`Item::cancel`]
//!
//! Actions perform no local precondition checks; the remote service decides
//! which transitions are legal and its error is returned unchanged.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use promisepay::rest::{ListParams, RestResource};
//! use promisepay::{Item, RestClient};
//!
//! let client = Arc::new(RestClient::new(&config));
//! let mut item = Item::new(client, "abc123");
//!
//! let fees = item.fees(Some(ListParams::new().limit(50))).await?;
//! println!("{} fees", fees.len());
//!
//! item.cancel(None).await?;
//! assert_eq!(item.get("state"), Some(&serde_json::json!("cancelled")));
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde_json::{json, Value};

use crate::clients::RestClient;
use crate::rest::resource::{fetch_envelope, fetch_many, fetch_nested, fetch_one};
use crate::rest::{Attributes, ListParams, ResourceError, RestResource};

use super::related::{BatchTransaction, Fee, Transaction};
use super::user::User;

/// A lifecycle transition on an item.
///
/// Each action is sent as `PATCH items/{id}/{action}`.
///
/// # Example
///
/// ```rust
/// use promisepay::rest::ItemAction;
///
/// assert_eq!(ItemAction::RequestResolveDispute.as_str(), "request_resolve_dispute");
/// assert_eq!("cancel".parse::<ItemAction>(), Ok(ItemAction::Cancel));
/// assert_eq!(ItemAction::ALL.len(), 17);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemAction {
    /// Pay for the item.
    MakePayment,
    /// Ask the buyer to pay.
    RequestPayment,
    /// Release held funds to the seller.
    ReleasePayment,
    /// Ask the buyer to release funds.
    RequestRelease,
    /// Confirm a wire transfer was sent.
    AcknowledgeWire,
    /// Confirm a PayPal payment was sent.
    AcknowledgePaypal,
    /// Undo a wire acknowledgement.
    RevertWire,
    /// Ask the seller for a refund.
    RequestRefund,
    /// Decline a refund request.
    DeclineRefund,
    /// Refund the buyer.
    Refund,
    /// Open a dispute.
    RaiseDispute,
    /// Ask for a dispute to be resolved.
    RequestResolveDispute,
    /// Resolve a dispute.
    ResolveDispute,
    /// Escalate a dispute to the platform.
    EscalateDispute,
    /// Cancel the item.
    Cancel,
    /// Send a tax invoice.
    SendTaxInvoice,
    /// Request a tax invoice.
    RequestTaxInvoice,
}

impl ItemAction {
    /// Every action, in declaration order.
    pub const ALL: [Self; 17] = [
        Self::MakePayment,
        Self::RequestPayment,
        Self::ReleasePayment,
        Self::RequestRelease,
        Self::AcknowledgeWire,
        Self::AcknowledgePaypal,
        Self::RevertWire,
        Self::RequestRefund,
        Self::DeclineRefund,
        Self::Refund,
        Self::RaiseDispute,
        Self::RequestResolveDispute,
        Self::ResolveDispute,
        Self::EscalateDispute,
        Self::Cancel,
        Self::SendTaxInvoice,
        Self::RequestTaxInvoice,
    ];

    /// Returns the path segment of the action.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MakePayment => "make_payment",
            Self::RequestPayment => "request_payment",
            Self::ReleasePayment => "release_payment",
            Self::RequestRelease => "request_release",
            Self::AcknowledgeWire => "acknowledge_wire",
            Self::AcknowledgePaypal => "acknowledge_paypal",
            Self::RevertWire => "revert_wire",
            Self::RequestRefund => "request_refund",
            Self::DeclineRefund => "decline_refund",
            Self::Refund => "refund",
            Self::RaiseDispute => "raise_dispute",
            Self::RequestResolveDispute => "request_resolve_dispute",
            Self::ResolveDispute => "resolve_dispute",
            Self::EscalateDispute => "escalate_dispute",
            Self::Cancel => "cancel",
            Self::SendTaxInvoice => "send_tax_invoice",
            Self::RequestTaxInvoice => "request_tax_invoice",
        }
    }
}

impl fmt::Display for ItemAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown action name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Unknown item action: {0}")]
pub struct UnknownItemAction(pub String);

impl FromStr for ItemAction {
    type Err = UnknownItemAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| UnknownItemAction(s.to_string()))
    }
}

/// A handle on a PromisePay item.
#[derive(Clone)]
pub struct Item {
    client: Arc<RestClient>,
    attributes: Attributes,
}

impl RestResource for Item {
    const NAME: &'static str = "Item";
    const PLURAL: &'static str = "items";

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

impl fmt::Debug for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Item")
            .field("attributes", &self.attributes)
            .finish_non_exhaustive()
    }
}

impl Item {
    /// Creates a handle for a known item id with no other attributes.
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

    /// Fetches the item's status document.
    ///
    /// # Errors
    ///
    /// Propagates every error unchanged.
    pub async fn status(&self) -> Result<Attributes, ResourceError> {
        let path = self.member_path("status")?;
        fetch_envelope(&self.client, &path, Self::NAME, Self::PLURAL).await
    }

    /// Fetches the buyer of the item.
    ///
    /// # Errors
    ///
    /// Propagates every error unchanged, including [`ResourceError::NotFound`].
    pub async fn buyer(&self) -> Result<User, ResourceError> {
        fetch_one(&self.client, &self.member_path("buyers")?).await
    }

    /// Fetches the seller of the item.
    ///
    /// # Errors
    ///
    /// Propagates every error unchanged, including [`ResourceError::NotFound`].
    pub async fn seller(&self) -> Result<User, ResourceError> {
        fetch_one(&self.client, &self.member_path("sellers")?).await
    }

    /// Lists fees charged on the item.
    ///
    /// # Errors
    ///
    /// Propagates every error unchanged. A response without a `fees` key
    /// yields an empty list.
    pub async fn fees(&self, params: Option<ListParams>) -> Result<Vec<Fee>, ResourceError> {
        fetch_many(&self.client, &self.member_path("fees")?, params).await
    }

    /// Lists transactions recorded against the item.
    ///
    /// # Errors
    ///
    /// Propagates every error unchanged. A response without a
    /// `transactions` key yields an empty list.
    pub async fn transactions(
        &self,
        params: Option<ListParams>,
    ) -> Result<Vec<Transaction>, ResourceError> {
        fetch_many(&self.client, &self.member_path("transactions")?, params).await
    }

    /// Lists batch transactions recorded against the item.
    ///
    /// # Errors
    ///
    /// Propagates every error unchanged. A response without a
    /// `batch_transactions` key yields an empty list.
    pub async fn batch_transactions(
        &self,
        params: Option<ListParams>,
    ) -> Result<Vec<BatchTransaction>, ResourceError> {
        fetch_many(&self.client, &self.member_path("batch_transactions")?, params).await
    }

    /// Fetches wire transfer instructions for the item.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingEnvelope`] with key
    /// `items.wire_details` if the document is absent.
    pub async fn wire_details(&self) -> Result<Attributes, ResourceError> {
        let path = self.member_path("wire_details")?;
        fetch_nested(&self.client, &path, Self::NAME, Self::PLURAL, "wire_details").await
    }

    /// Fetches BPAY instructions for the item.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingEnvelope`] with key
    /// `items.bpay_details` if the document is absent.
    pub async fn bpay_details(&self) -> Result<Attributes, ResourceError> {
        let path = self.member_path("bpay_details")?;
        fetch_nested(&self.client, &path, Self::NAME, Self::PLURAL, "bpay_details").await
    }

    /// Performs a lifecycle action and replaces the snapshot with the
    /// server's representation of the item.
    ///
    /// `options` is sent as the request body; `None` sends `{}`.
    /// Returns `true` on success. On error the snapshot is left untouched.
    ///
    /// # Errors
    ///
    /// Propagates every error unchanged, typically
    /// [`ResourceError::UnprocessableEntity`] when the transition is not
    /// legal from the item's current state.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use promisepay::rest::ItemAction;
    ///
    /// item.perform(ItemAction::RaiseDispute, Some(json!({"user_id": "u1"}))).await?;
    /// ```
    pub async fn perform(
        &mut self,
        action: ItemAction,
        options: Option<Value>,
    ) -> Result<bool, ResourceError> {
        let path = self.member_path(action.as_str())?;
        tracing::debug!(action = %action, path = %path, "Performing item action");
        self.patch_and_replace(&path, options.unwrap_or_else(|| json!({})))
            .await?;
        Ok(true)
    }

    /// Pays for the item. See [`Item::perform`].
    ///
    /// # Errors
    ///
    /// Propagates every error unchanged.
    pub async fn make_payment(&mut self, options: Option<Value>) -> Result<bool, ResourceError> {
        self.perform(ItemAction::MakePayment, options).await
    }

    /// Asks the buyer to pay. See [`Item::perform`].
    ///
    /// # Errors
    ///
    /// Propagates every error unchanged.
    pub async fn request_payment(&mut self, options: Option<Value>) -> Result<bool, ResourceError> {
        self.perform(ItemAction::RequestPayment, options).await
    }

    /// Releases held funds to the seller. See [`Item::perform`].
    ///
    /// # Errors
    ///
    /// Propagates every error unchanged.
    pub async fn release_payment(&mut self, options: Option<Value>) -> Result<bool, ResourceError> {
        self.perform(ItemAction::ReleasePayment, options).await
    }

    /// Asks the buyer to release funds. See [`Item::perform`].
    ///
    /// # Errors
    ///
    /// Propagates every error unchanged.
    pub async fn request_release(&mut self, options: Option<Value>) -> Result<bool, ResourceError> {
        self.perform(ItemAction::RequestRelease, options).await
    }

    /// Confirms a wire transfer was sent. See [`Item::perform`].
    ///
    /// # Errors
    ///
    /// Propagates every error unchanged.
    pub async fn acknowledge_wire(&mut self, options: Option<Value>) -> Result<bool, ResourceError> {
        self.perform(ItemAction::AcknowledgeWire, options).await
    }

    /// Confirms a PayPal payment was sent. See [`Item::perform`].
    ///
    /// # Errors
    ///
    /// Propagates every error unchanged.
    pub async fn acknowledge_paypal(
        &mut self,
        options: Option<Value>,
    ) -> Result<bool, ResourceError> {
        self.perform(ItemAction::AcknowledgePaypal, options).await
    }

    /// Undoes a wire acknowledgement. See [`Item::perform`].
    ///
    /// # Errors
    ///
    /// Propagates every error unchanged.
    pub async fn revert_wire(&mut self, options: Option<Value>) -> Result<bool, ResourceError> {
        self.perform(ItemAction::RevertWire, options).await
    }

    /// Asks the seller for a refund. See [`Item::perform`].
    ///
    /// # Errors
    ///
    /// Propagates every error unchanged.
    pub async fn request_refund(&mut self, options: Option<Value>) -> Result<bool, ResourceError> {
        self.perform(ItemAction::RequestRefund, options).await
    }

    /// Declines a refund request. See [`Item::perform`].
    ///
    /// # Errors
    ///
    /// Propagates every error unchanged.
    pub async fn decline_refund(&mut self, options: Option<Value>) -> Result<bool, ResourceError> {
        self.perform(ItemAction::DeclineRefund, options).await
    }

    /// Refunds the buyer. See [`Item::perform`].
    ///
    /// # Errors
    ///
    /// Propagates every error unchanged.
    pub async fn refund(&mut self, options: Option<Value>) -> Result<bool, ResourceError> {
        self.perform(ItemAction::Refund, options).await
    }

    /// Opens a dispute. See [`Item::perform`].
    ///
    /// # Errors
    ///
    /// Propagates every error unchanged.
    pub async fn raise_dispute(&mut self, options: Option<Value>) -> Result<bool, ResourceError> {
        self.perform(ItemAction::RaiseDispute, options).await
    }

    /// Asks for a dispute to be resolved. See [`Item::perform`].
    ///
    /// # Errors
    ///
    /// Propagates every error unchanged.
    pub async fn request_resolve_dispute(
        &mut self,
        options: Option<Value>,
    ) -> Result<bool, ResourceError> {
        self.perform(ItemAction::RequestResolveDispute, options).await
    }

    /// Resolves a dispute. See [`Item::perform`].
    ///
    /// # Errors
    ///
    /// Propagates every error unchanged.
    pub async fn resolve_dispute(&mut self, options: Option<Value>) -> Result<bool, ResourceError> {
        self.perform(ItemAction::ResolveDispute, options).await
    }

    /// Escalates a dispute to the platform. See [`Item::perform`].
    ///
    /// # Errors
    ///
    /// Propagates every error unchanged.
    pub async fn escalate_dispute(&mut self, options: Option<Value>) -> Result<bool, ResourceError> {
        self.perform(ItemAction::EscalateDispute, options).await
    }

    /// Cancels the item. See [`Item::perform`].
    ///
    /// # Errors
    ///
    /// Propagates every error unchanged.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let mut item = Item::new(client, "abc123");
    /// assert!(item.cancel(None).await?);
    /// assert_eq!(item.attributes().get_str("state"), Some("cancelled"));
    /// ```
    pub async fn cancel(&mut self, options: Option<Value>) -> Result<bool, ResourceError> {
        self.perform(ItemAction::Cancel, options).await
    }

    /// Sends a tax invoice. See [`Item::perform`].
    ///
    /// # Errors
    ///
    /// Propagates every error unchanged.
    pub async fn send_tax_invoice(&mut self, options: Option<Value>) -> Result<bool, ResourceError> {
        self.perform(ItemAction::SendTaxInvoice, options).await
    }

    /// Requests a tax invoice. See [`Item::perform`].
    ///
    /// # Errors
    ///
    /// Propagates every error unchanged.
    pub async fn request_tax_invoice(
        &mut self,
        options: Option<Value>,
    ) -> Result<bool, ResourceError> {
        self.perform(ItemAction::RequestTaxInvoice, options).await
    }
}
