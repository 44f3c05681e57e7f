//! The resource handle contract and the response-folding helpers shared by
//! every handle.
//!
//! # Response Envelopes
//!
//! Every PromisePay response wraps its payload under a key named after the
//! resource collection (`items`, `users`, `fees`, ...). Single-resource reads
//! and mutations require the key; collection reads treat a missing key as an
//! empty collection.
//!
//! # Relation Absence
//!
//! Some relations legitimately do not exist (a user without a bank account).
//! Those reads return `Result<Option<T>, ResourceError>`: `Ok(None)` for the
//! specific error class the service uses to say "absent", `Err` for every
//! other failure.

use std::sync::Arc;

use serde_json::Value;

use crate::clients::RestClient;
use crate::rest::attributes::scalar_to_string;
use crate::rest::{Attributes, ErrorKind, ListParams, ResourceError};

/// A local handle on one remote PromisePay resource.
///
/// Implementors hold an attribute snapshot and a shared [`RestClient`].
/// The provided methods build paths from the handle's id and fold
/// responses back into the snapshot.
///
/// # Associated Constants
///
/// - `NAME`: The singular resource name used in errors (e.g., "Item")
/// - `PLURAL`: The route prefix and response envelope key (e.g., "items")
#[allow(async_fn_in_trait)]
pub trait RestResource: Sized + Send + Sync {
    /// The singular name of the resource (e.g., "Item").
    const NAME: &'static str;

    /// The collection name used as route prefix and envelope key.
    const PLURAL: &'static str;

    /// Wraps an attribute snapshot in a handle sharing `client`.
    fn from_attributes(client: Arc<RestClient>, attributes: Attributes) -> Self;

    /// Returns the current attribute snapshot.
    fn attributes(&self) -> &Attributes;

    /// Returns a mutable reference to the attribute snapshot.
    fn attributes_mut(&mut self) -> &mut Attributes;

    /// Returns the client this handle sends requests through.
    fn client(&self) -> &Arc<RestClient>;

    /// Returns the resource id, if the snapshot carries one.
    fn id(&self) -> Option<String> {
        self.attributes().id()
    }

    /// Looks up a field of the snapshot by name.
    fn get(&self, field: &str) -> Option<&Value> {
        self.attributes().get(field)
    }

    /// Returns `{plural}/{id}` with the id percent-encoded.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if the snapshot has no id.
    fn resource_path(&self) -> Result<String, ResourceError> {
        let id = self
            .id()
            .ok_or(ResourceError::MissingId { resource: Self::NAME })?;
        Ok(format!("{}/{}", Self::PLURAL, urlencoding::encode(&id)))
    }

    /// Returns `{plural}/{id}/{suffix}`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if the snapshot has no id.
    fn member_path(&self, suffix: &str) -> Result<String, ResourceError> {
        Ok(format!("{}/{suffix}", self.resource_path()?))
    }

    /// Fetches a resource by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the resource doesn't exist and
    /// [`ResourceError::MissingEnvelope`] if the response lacks the payload.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let item = Item::find(client.clone(), "abc123").await?;
    /// println!("State: {:?}", item.get("state"));
    /// ```
    async fn find(client: Arc<RestClient>, id: &str) -> Result<Self, ResourceError> {
        let path = format!("{}/{}", Self::PLURAL, urlencoding::encode(id));
        let attributes = fetch_envelope(&client, &path, Self::NAME, Self::PLURAL).await?;
        Ok(Self::from_attributes(client, attributes))
    }

    /// Sends a partial update and replaces the snapshot with the server's
    /// representation.
    ///
    /// Fields the server does not echo back are dropped from the snapshot.
    /// On error the snapshot is left untouched.
    ///
    /// # Errors
    ///
    /// Propagates every transport error unchanged.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// item.update(json!({"name": "Road bike"})).await?;
    /// assert_eq!(item.get("name"), Some(&json!("Road bike")));
    /// ```
    async fn update(&mut self, attributes: Value) -> Result<&mut Self, ResourceError> {
        let path = self.resource_path()?;
        tracing::debug!(resource = Self::NAME, path = %path, "Updating resource");
        self.patch_and_replace(&path, attributes).await?;
        Ok(self)
    }

    /// PATCHes `path` and replaces the snapshot with the response's
    /// resource payload.
    ///
    /// # Errors
    ///
    /// Propagates every transport error unchanged; the snapshot is only
    /// replaced once a well-formed payload has been read.
    async fn patch_and_replace(&mut self, path: &str, body: Value) -> Result<(), ResourceError> {
        let response = self.client().patch(path, body).await?;
        let attributes = take_envelope(response.body, Self::NAME, Self::PLURAL)?;
        *self.attributes_mut() = attributes;
        Ok(())
    }
}

/// GETs `path` and returns the object under `key`.
pub(crate) async fn fetch_envelope(
    client: &RestClient,
    path: &str,
    resource: &'static str,
    key: &str,
) -> Result<Attributes, ResourceError> {
    let response = client.get(path, None).await?;
    take_envelope(response.body, resource, key)
}

/// GETs `path` and wraps the object under `R::PLURAL` in a new handle.
pub(crate) async fn fetch_one<R: RestResource>(
    client: &Arc<RestClient>,
    path: &str,
) -> Result<R, ResourceError> {
    tracing::debug!(resource = R::NAME, path = %path, "Fetching related resource");
    let attributes = fetch_envelope(client, path, R::NAME, R::PLURAL).await?;
    Ok(R::from_attributes(Arc::clone(client), attributes))
}

/// GETs `path` and wraps each object under `R::PLURAL` in a handle,
/// preserving order. A missing key yields an empty collection.
pub(crate) async fn fetch_many<R: RestResource>(
    client: &Arc<RestClient>,
    path: &str,
    params: Option<ListParams>,
) -> Result<Vec<R>, ResourceError> {
    tracing::debug!(resource = R::NAME, path = %path, ?params, "Fetching related collection");
    let query = params.map(ListParams::to_query);
    let response = client.get(path, query).await?;

    let entries = match envelope_value(response.body, R::PLURAL) {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(entries)) => entries,
        Some(_) => {
            return Err(ResourceError::UnexpectedPayload {
                resource: R::NAME,
                key: R::PLURAL.to_string(),
                expected: "an array",
            })
        }
    };

    entries
        .into_iter()
        .map(|entry| {
            Attributes::from_value(entry)
                .map(|attributes| R::from_attributes(Arc::clone(client), attributes))
                .ok_or_else(|| ResourceError::UnexpectedPayload {
                    resource: R::NAME,
                    key: R::PLURAL.to_string(),
                    expected: "an array of objects",
                })
        })
        .collect()
}

/// GETs `path` and returns the object at `outer.inner`.
pub(crate) async fn fetch_nested(
    client: &RestClient,
    path: &str,
    resource: &'static str,
    outer: &str,
    inner: &str,
) -> Result<Attributes, ResourceError> {
    let outer_object = fetch_envelope(client, path, resource, outer).await?;
    let key = format!("{outer}.{inner}");
    match outer_object.into_inner().remove(inner) {
        None | Some(Value::Null) => Err(ResourceError::MissingEnvelope { resource, key }),
        Some(value) => Attributes::from_value(value).ok_or(ResourceError::UnexpectedPayload {
            resource,
            key,
            expected: "an object",
        }),
    }
}

/// Converts the error class the service uses for "relation absent" into
/// `Ok(None)`. Every other error is returned unchanged.
pub(crate) fn absent_on<T>(
    result: Result<T, ResourceError>,
    absent: ErrorKind,
    relation: &'static str,
) -> Result<Option<T>, ResourceError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(error) if error.kind() == absent => {
            tracing::debug!(relation, kind = ?absent, "Relation is absent");
            Ok(None)
        }
        Err(error) => Err(error),
    }
}

/// Renders an id-like JSON value as a path segment.
pub(crate) fn path_segment(value: &Value) -> Option<String> {
    scalar_to_string(value).map(|s| urlencoding::encode(&s).into_owned())
}

fn envelope_value(body: Value, key: &str) -> Option<Value> {
    match body {
        Value::Object(mut map) => map.remove(key),
        _ => None,
    }
}

fn take_envelope(body: Value, resource: &'static str, key: &str) -> Result<Attributes, ResourceError> {
    match envelope_value(body, key) {
        None | Some(Value::Null) => Err(ResourceError::MissingEnvelope {
            resource,
            key: key.to_string(),
        }),
        Some(value) => Attributes::from_value(value).ok_or_else(|| {
            ResourceError::UnexpectedPayload {
                resource,
                key: key.to_string(),
                expected: "an object",
            }
        }),
    }
}
