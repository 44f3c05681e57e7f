//! Attribute snapshots held by resource handles.
//!
//! A handle never merges server responses field by field: every successful
//! mutating call swaps the whole [`Attributes`] value for the one the
//! server returned.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An ordered mapping from field name to JSON value.
///
/// Field order follows the order the server sent them in.
///
/// # Example
///
/// ```rust
/// use promisepay::rest::Attributes;
/// use serde_json::json;
///
/// let attributes = Attributes::from_value(json!({"id": "abc123", "state": "pending"})).unwrap();
///
/// assert_eq!(attributes.id().as_deref(), Some("abc123"));
/// assert_eq!(attributes.get_str("state"), Some("pending"));
/// assert!(attributes.get("amount").is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(Map<String, Value>);

impl Attributes {
    /// Creates an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a snapshot from a JSON value.
    ///
    /// Returns `None` unless the value is a JSON object.
    #[must_use]
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Looks up a string field by name.
    #[must_use]
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }

    /// Returns `true` if the field is present.
    #[must_use]
    pub fn contains_key(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Returns the `id` field as a string.
    ///
    /// Numeric ids are rendered in decimal.
    #[must_use]
    pub fn id(&self) -> Option<String> {
        self.get("id").and_then(scalar_to_string)
    }

    /// Iterates over fields in server order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the underlying JSON object.
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consumes the snapshot and returns the underlying JSON object.
    #[must_use]
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Attributes {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Attributes> for Value {
    fn from(attributes: Attributes) -> Self {
        Self::Object(attributes.0)
    }
}

/// Renders a string or number value for use in a path.
pub(crate) fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_requires_object() {
        assert!(Attributes::from_value(json!({"id": "a"})).is_some());
        assert!(Attributes::from_value(json!([1, 2])).is_none());
        assert!(Attributes::from_value(json!(null)).is_none());
        assert!(Attributes::from_value(json!("abc")).is_none());
    }

    #[test]
    fn test_numeric_id_is_rendered() {
        let attributes = Attributes::from_value(json!({"id": 42})).unwrap();
        assert_eq!(attributes.id().as_deref(), Some("42"));
    }

    #[test]
    fn test_empty_or_missing_id_is_none() {
        assert!(Attributes::new().id().is_none());
        let attributes = Attributes::from_value(json!({"id": ""})).unwrap();
        assert!(attributes.id().is_none());
    }

    #[test]
    fn test_iteration_preserves_server_order() {
        let attributes: Attributes =
            serde_json::from_str(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#).unwrap();
        let keys: Vec<&str> = attributes.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
        assert_eq!(attributes.len(), 3);
    }

    #[test]
    fn test_serializes_transparently() {
        let attributes = Attributes::from_value(json!({"id": "u1", "email": "a@b.c"})).unwrap();
        assert_eq!(
            serde_json::to_value(&attributes).unwrap(),
            json!({"id": "u1", "email": "a@b.c"})
        );
        assert_eq!(Value::from(attributes), json!({"id": "u1", "email": "a@b.c"}));
    }
}
