//! Request DTOs for the gateway API
//!
//! Defines the structure of incoming HTTP request bodies.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, Visitor};

/// Request body for the SET operation (POST /set)
///
/// Decoding is lenient in the way clients of the old gateway relied on:
/// - field names match case-insensitively (`"Key"` fills `key`)
/// - a repeated field keeps its last value
/// - `null` leaves the field as it was, so missing/null fields end up empty
/// - unknown fields are ignored, and a bare `null` body decodes to empty fields
///
/// Empty fields are caught by [`SetRequest::is_complete`], not the parser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetRequest {
    /// The key to store the value under
    pub key: String,
    /// The value to store
    pub value: String,
}

impl SetRequest {
    /// Parses a raw request body.
    pub fn from_slice(payload: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(payload)
    }

    /// Returns true when both key and value are non-empty.
    pub fn is_complete(&self) -> bool {
        !self.key.is_empty() && !self.value.is_empty()
    }
}

/// Case-insensitive field name match. U+212A KELVIN SIGN folds to `k`.
fn field_matches(name: &str, field: &str) -> bool {
    name.chars()
        .map(|c| match c {
            '\u{212A}' => 'k',
            c => c.to_ascii_lowercase(),
        })
        .eq(field.chars())
}

impl<'de> Deserialize<'de> for SetRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(SetRequestVisitor)
    }
}

struct SetRequestVisitor;

impl<'de> Visitor<'de> for SetRequestVisitor {
    type Value = SetRequest;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object with string fields `key` and `value`")
    }

    fn visit_unit<E: de::Error>(self) -> Result<SetRequest, E> {
        Ok(SetRequest::default())
    }

    fn visit_map<A>(self, mut map: A) -> Result<SetRequest, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut req = SetRequest::default();
        while let Some(name) = map.next_key::<String>()? {
            let slot = if field_matches(&name, "key") {
                &mut req.key
            } else if field_matches(&name, "value") {
                &mut req.value
            } else {
                map.next_value::<IgnoredAny>()?;
                continue;
            };
            if let Some(text) = map.next_value::<Option<String>>()? {
                *slot = text;
            }
        }
        Ok(req)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_request_deserialize() {
        let req = SetRequest::from_slice(br#"{"key": "test", "value": "hello"}"#).unwrap();
        assert_eq!(req.key, "test");
        assert_eq!(req.value, "hello");
        assert!(req.is_complete());
    }

    #[test]
    fn test_missing_and_null_fields_are_empty() {
        let req = SetRequest::from_slice(br#"{"key": "test"}"#).unwrap();
        assert_eq!(req.value, "");
        assert!(!req.is_complete());

        let req = SetRequest::from_slice(br#"{"key": null, "value": "v"}"#).unwrap();
        assert_eq!(req.key, "");
        assert!(!req.is_complete());

        assert_eq!(SetRequest::from_slice(b"{}").unwrap(), SetRequest::default());
        assert_eq!(SetRequest::from_slice(b"null").unwrap(), SetRequest::default());
    }

    #[test]
    fn test_field_names_case_insensitive() {
        let req = SetRequest::from_slice(br#"{"Key": "a", "VALUE": "b"}"#).unwrap();
        assert_eq!(req.key, "a");
        assert_eq!(req.value, "b");

        let req = SetRequest::from_slice("{\"\u{212A}ey\": \"a\", \"value\": \"b\"}".as_bytes())
            .unwrap();
        assert_eq!(req.key, "a");
    }

    #[test]
    fn test_repeated_field_last_wins() {
        let req =
            SetRequest::from_slice(br#"{"key": "a", "value": "b", "key": "c"}"#).unwrap();
        assert_eq!(req.key, "c");

        let req = SetRequest::from_slice(br#"{"key": "a", "Key": "c", "value": "b"}"#).unwrap();
        assert_eq!(req.key, "c");

        // null does not clear an earlier value
        let req = SetRequest::from_slice(br#"{"key": "a", "key": null, "value": "b"}"#).unwrap();
        assert_eq!(req.key, "a");
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let req = SetRequest::from_slice(
            br#"{"key": "a", "value": "b", "ttl": 60, "tags": {"x": [1, 2]}}"#,
        )
        .unwrap();
        assert!(req.is_complete());
        assert!(!field_matches("keys", "key"));
    }

    #[test]
    fn test_malformed_payloads_rejected() {
        assert!(SetRequest::from_slice(b"{key:}").is_err());
        assert!(SetRequest::from_slice(b"").is_err());
        assert!(SetRequest::from_slice(br#"{"key": 1, "value": "b"}"#).is_err());
        assert!(SetRequest::from_slice(br#"["key", "value"]"#).is_err());
        assert!(SetRequest::from_slice(br#""key""#).is_err());
    }
}
