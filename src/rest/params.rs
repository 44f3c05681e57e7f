//! Query parameters for collection relations.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

/// Pagination parameters for collection relations.
///
/// The server caps `limit` at 200 and defaults it to 10, with `offset`
/// defaulting to 0. Fields left as `None` are not sent, so the server's
/// defaults apply.
///
/// # Example
///
/// ```rust
/// use promisepay::rest::ListParams;
///
/// let params = ListParams::new().limit(50).offset(100);
/// assert_eq!(params.limit, Some(50));
/// assert_eq!(params.offset, Some(100));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ListParams {
    /// Maximum number of records to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Number of records to skip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

impl ListParams {
    /// Creates empty parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the page offset.
    #[must_use]
    pub const fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// The query string pairs for the fields that are set.
    pub(crate) fn to_query(self) -> HashMap<String, String> {
        let Ok(Value::Object(map)) = serde_json::to_value(self) else {
            return HashMap::new();
        };

        map.into_iter()
            .filter_map(|(key, value)| match value {
                Value::Number(n) => Some((key, n.to_string())),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_params_produce_no_query() {
        assert!(ListParams::new().to_query().is_empty());
    }

    #[test]
    fn test_supplied_params_are_passed_verbatim() {
        let query = ListParams::new().limit(200).offset(0).to_query();
        assert_eq!(query.get("limit").map(String::as_str), Some("200"));
        assert_eq!(query.get("offset").map(String::as_str), Some("0"));
    }

    #[test]
    fn test_only_set_fields_are_sent() {
        let query = ListParams::new().offset(30).to_query();
        assert_eq!(query.len(), 1);
        assert_eq!(query.get("offset").map(String::as_str), Some("30"));
    }

    #[test]
    fn test_query_keys_are_limit_and_offset() {
        let query = ListParams::new().limit(5).offset(10).to_query();
        let mut keys: Vec<&str> = query.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["limit", "offset"]);
    }
}
