//! Attribute value representation.
//!
//! This module provides the value type bound to declared attributes, both for
//! defaults recorded in a contract and for values supplied at construction.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A value bound to a declared attribute.
///
/// Attributes are untyped at declaration time, so this enum covers the value
/// shapes a default or a supplied argument can take. `Clone` produces a deep
/// copy, which is what keeps default resolution independent per construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// Null/absent value
    Null,
    /// String value
    String(String),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Boolean value
    Bool(bool),
    /// List value
    List(Vec<AttrValue>),
    /// Map value
    Map(HashMap<String, AttrValue>),
}

impl AttrValue {
    /// Returns true if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, AttrValue::Null)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            AttrValue::Null => "null",
            AttrValue::String(_) => "string",
            AttrValue::Int(_) => "int64",
            AttrValue::Float(_) => "float64",
            AttrValue::Bool(_) => "boolean",
            AttrValue::List(_) => "list",
            AttrValue::Map(_) => "map",
        }
    }

    /// Attempts to get this value as a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to get this value as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            AttrValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Attempts to get this value as a float.
    ///
    /// Integers coerce losslessly.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            AttrValue::Float(f) => Some(*f),
            AttrValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Attempts to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to get this value as a list.
    pub fn as_list(&self) -> Option<&[AttrValue]> {
        match self {
            AttrValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Attempts to get this value as a map.
    pub fn as_map(&self) -> Option<&HashMap<String, AttrValue>> {
        match self {
            AttrValue::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::String(s)
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::String(s.to_string())
    }
}

impl From<i64> for AttrValue {
    fn from(i: i64) -> Self {
        AttrValue::Int(i)
    }
}

impl From<f64> for AttrValue {
    fn from(f: f64) -> Self {
        AttrValue::Float(f)
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        AttrValue::Bool(b)
    }
}

impl From<Vec<AttrValue>> for AttrValue {
    fn from(items: Vec<AttrValue>) -> Self {
        AttrValue::List(items)
    }
}

impl From<serde_json::Value> for AttrValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => AttrValue::Null,
            serde_json::Value::Bool(b) => AttrValue::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    AttrValue::Int(i)
                } else {
                    AttrValue::Float(n.as_f64().unwrap_or_default())
                }
            }
            serde_json::Value::String(s) => AttrValue::String(s),
            serde_json::Value::Array(items) => {
                AttrValue::List(items.into_iter().map(AttrValue::from).collect())
            }
            serde_json::Value::Object(map) => {
                AttrValue::Map(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

impl From<AttrValue> for serde_json::Value {
    fn from(value: AttrValue) -> Self {
        match value {
            AttrValue::Null => serde_json::Value::Null,
            AttrValue::String(s) => serde_json::Value::String(s),
            AttrValue::Int(i) => serde_json::Value::from(i),
            AttrValue::Float(f) => serde_json::Value::from(f),
            AttrValue::Bool(b) => serde_json::Value::Bool(b),
            AttrValue::List(items) => {
                serde_json::Value::Array(items.into_iter().map(Into::into).collect())
            }
            AttrValue::Map(map) => serde_json::Value::Object(
                map.into_iter().map(|(k, v)| (k, v.into())).collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_primitives() {
        assert_eq!(AttrValue::from("host"), AttrValue::String("host".to_string()));
        assert_eq!(AttrValue::from(42i64), AttrValue::Int(42));
        assert_eq!(AttrValue::from(2.5), AttrValue::Float(2.5));
        assert_eq!(AttrValue::from(true), AttrValue::Bool(true));
    }

    #[test]
    fn test_accessors() {
        assert_eq!(AttrValue::from("a").as_str(), Some("a"));
        assert_eq!(AttrValue::from(7i64).as_int(), Some(7));
        assert_eq!(AttrValue::from(7i64).as_float(), Some(7.0));
        assert_eq!(AttrValue::from(false).as_bool(), Some(false));
        assert_eq!(AttrValue::from("a").as_int(), None);
        assert!(AttrValue::Null.is_null());
    }

    #[test]
    fn test_type_names() {
        assert_eq!(AttrValue::Null.type_name(), "null");
        assert_eq!(AttrValue::from("a").type_name(), "string");
        assert_eq!(AttrValue::from(1i64).type_name(), "int64");
        assert_eq!(AttrValue::from(1.0).type_name(), "float64");
    }

    #[test]
    fn test_json_interop() {
        let json = serde_json::json!({
            "endpoint": "https://example.com",
            "retries": 3,
            "tags": ["a", "b"],
        });

        let value = AttrValue::from(json.clone());
        let map = value.as_map().unwrap();
        assert_eq!(map["endpoint"].as_str(), Some("https://example.com"));
        assert_eq!(map["retries"].as_int(), Some(3));
        assert_eq!(map["tags"].as_list().unwrap().len(), 2);

        let back: serde_json::Value = value.into();
        assert_eq!(back, json);
    }

    #[test]
    fn test_clone_is_deep() {
        let original = AttrValue::List(vec![AttrValue::from("a")]);
        let mut copy = original.clone();
        if let AttrValue::List(items) = &mut copy {
            items.push(AttrValue::from("b"));
        }
        assert_eq!(original.as_list().unwrap().len(), 1);
        assert_eq!(copy.as_list().unwrap().len(), 2);
    }
}
