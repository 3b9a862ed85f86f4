// Copyright © 2022 Nikita Dudko. All rights reserved.
// Contacts: <nikita.dudko.95@gmail.com>
// Licensed under the MIT License.

//! Total accessors over an untyped JSON object.
//!
//! API responses are only loosely documented and fields come and go between
//! endpoints, so every getter returns the zero value of its type instead of
//! failing on a missing key or a type mismatch.

use serde_json::{Map, Value};

/// A JSON object with zero-value-safe field extraction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Json(Map<String, Value>);

impl Json {
    pub fn new(map: Map<String, Value>) -> Json {
        Json(map)
    }

    /// Decodes `bytes` as a JSON object. Anything else, including malformed
    /// input and non-object roots, yields an empty object.
    pub fn from_slice(bytes: &[u8]) -> Json {
        match serde_json::from_slice(bytes) {
            Ok(Value::Object(map)) => Json(map),
            Ok(_) => Json::default(),
            Err(e) => {
                tracing::warn!("discarding undecodable response body: {}", e);
                Json::default()
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn string(&self, key: &str) -> String {
        self.0
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    }

    /// Numbers are truncated towards zero. Values outside the `i64` range
    /// saturate to [i64::MIN] or [i64::MAX].
    pub fn int(&self, key: &str) -> i64 {
        match self.0.get(key) {
            Some(Value::Number(n)) => n
                .as_i64()
                .unwrap_or_else(|| n.as_f64().map_or(0, |f| f as i64)),
            _ => 0,
        }
    }

    pub fn float(&self, key: &str) -> f64 {
        self.0.get(key).and_then(Value::as_f64).unwrap_or_default()
    }

    pub fn object(&self, key: &str) -> Json {
        match self.0.get(key) {
            Some(Value::Object(map)) => Json(map.clone()),
            _ => Json::default(),
        }
    }

    /// Non-object entries make the whole array count as a mismatch.
    pub fn object_array(&self, key: &str) -> Vec<Json> {
        let array = match self.0.get(key) {
            Some(Value::Array(array)) => array,
            _ => return Vec::new(),
        };
        array
            .iter()
            .map(|value| match value {
                Value::Object(map) => Some(Json(map.clone())),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()
            .unwrap_or_default()
    }

    /// Non-string entries make the whole array count as a mismatch.
    pub fn string_array(&self, key: &str) -> Vec<String> {
        let array = match self.0.get(key) {
            Some(Value::Array(array)) => array,
            _ => return Vec::new(),
        };
        array
            .iter()
            .map(|value| value.as_str().map(str::to_string))
            .collect::<Option<Vec<_>>>()
            .unwrap_or_default()
    }
}

impl From<Map<String, Value>> for Json {
    fn from(map: Map<String, Value>) -> Json {
        Json(map)
    }
}

#[cfg(test)]
mod tests {
    use super::Json;
    use serde_json::json;

    fn sample() -> Json {
        match json!({
            "name": "sunset",
            "count": 42,
            "ratio": 2.75,
            "negative": -3.9,
            "nested": {"inner": "value"},
            "entries": [{"id": "1"}, {"id": "2"}],
            "mixed": [{"id": "1"}, 5],
            "tags": ["a", "b"],
            "bad_tags": ["a", 1],
        }) {
            serde_json::Value::Object(map) => Json::new(map),
            _ => unreachable!(),
        }
    }

    #[test]
    fn present_fields() {
        let json = sample();
        assert_eq!(json.string("name"), "sunset");
        assert_eq!(json.int("count"), 42);
        assert_eq!(json.int("ratio"), 2);
        assert_eq!(json.int("negative"), -3);
        assert_eq!(json.float("ratio"), 2.75);
        assert_eq!(json.float("count"), 42.0);
        assert_eq!(json.object("nested").string("inner"), "value");
        let ids: Vec<_> = json.object_array("entries").iter().map(|e| e.string("id")).collect();
        assert_eq!(ids, ["1", "2"]);
        assert_eq!(json.string_array("tags"), ["a", "b"]);
    }

    #[test]
    fn missing_keys_yield_zero_values() {
        let json = Json::default();
        assert_eq!(json.string("x"), "");
        assert_eq!(json.int("x"), 0);
        assert_eq!(json.float("x"), 0.0);
        assert!(json.object("x").is_empty());
        assert!(json.object_array("x").is_empty());
        assert!(json.string_array("x").is_empty());
    }

    #[test]
    fn mismatched_types_yield_zero_values() {
        let json = sample();
        assert_eq!(json.string("count"), "");
        assert_eq!(json.int("name"), 0);
        assert_eq!(json.float("nested"), 0.0);
        assert!(json.object("name").is_empty());
        assert!(json.object_array("tags").is_empty());
        assert!(json.object_array("mixed").is_empty());
        assert!(json.string_array("entries").is_empty());
        assert!(json.string_array("bad_tags").is_empty());
    }

    #[test]
    fn out_of_range_ints_saturate() {
        let json = Json::from_slice(br#"{"big": 1e300, "small": -1e300, "unsigned": 18446744073709551615}"#);
        assert_eq!(json.int("big"), i64::MAX);
        assert_eq!(json.int("small"), i64::MIN);
        assert_eq!(json.int("unsigned"), i64::MAX);
    }

    #[test]
    fn undecodable_bodies_are_empty() {
        assert!(Json::from_slice(b"not json").is_empty());
        assert!(Json::from_slice(b"[1, 2]").is_empty());
        assert!(Json::from_slice(b"").is_empty());
        assert_eq!(Json::from_slice(br#"{"a": "b"}"#).string("a"), "b");
    }
}
