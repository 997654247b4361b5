//! Parameter value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric stand-in for the `LARGE` token of the FUNWAVE-TVD driver file.
pub const LARGE_VALUE: i64 = 99999;

/// Token the driver file uses for [`LARGE_VALUE`].
pub const LARGE_TOKEN: &str = "LARGE";

/// A dynamically typed parameter value.
///
/// Serialized untagged, so JSON documents hold plain scalars
/// (`true`, `12`, `0.5`, `"FLAT"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric view of integers and floats
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Convert a JSON scalar. `null` maps to `Ok(None)`; arrays and objects
    /// are rejected with a short reason.
    pub fn from_json(json: &serde_json::Value) -> Result<Option<Self>, &'static str> {
        match json {
            serde_json::Value::Null => Ok(None),
            serde_json::Value::Bool(b) => Ok(Some(Value::Bool(*b))),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Ok(Some(Value::Integer(i))),
                None => n
                    .as_f64()
                    .map(|f| Some(Value::Float(f)))
                    .ok_or("number out of range"),
            },
            serde_json::Value::String(s) => Ok(Some(Value::Text(s.clone()))),
            serde_json::Value::Array(_) => Err("expected a scalar, got an array"),
            serde_json::Value::Object(_) => Err("expected a scalar, got an object"),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Integer(i) => serde_json::Value::from(*i),
            Value::Float(f) => serde_json::Value::from(*f),
            Value::Text(s) => serde_json::Value::String(s.clone()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialize_untagged_scalars() {
        assert_eq!(serde_json::to_string(&Value::Bool(true)).unwrap(), "true");
        assert_eq!(serde_json::to_string(&Value::Integer(12)).unwrap(), "12");
        assert_eq!(serde_json::to_string(&Value::Float(0.5)).unwrap(), "0.5");
        assert_eq!(
            serde_json::to_string(&Value::from("FLAT")).unwrap(),
            "\"FLAT\""
        );
    }

    #[test]
    fn test_deserialize_prefers_integer() {
        let value: Value = serde_json::from_str("3").unwrap();
        assert_eq!(value, Value::Integer(3));
        let value: Value = serde_json::from_str("3.25").unwrap();
        assert_eq!(value, Value::Float(3.25));
    }

    #[test]
    fn test_from_json_null_is_absent() {
        assert_eq!(Value::from_json(&json!(null)), Ok(None));
        assert_eq!(Value::from_json(&json!(7)), Ok(Some(Value::Integer(7))));
    }

    #[test]
    fn test_from_json_rejects_containers() {
        assert!(Value::from_json(&json!([1, 2])).is_err());
        assert!(Value::from_json(&json!({"a": 1})).is_err());
    }

    #[test]
    fn test_numeric_views() {
        assert_eq!(Value::Integer(4).as_f64(), Some(4.0));
        assert_eq!(Value::Float(4.5).as_i64(), None);
        assert_eq!(Value::from("x").as_str(), Some("x"));
        assert_eq!(Value::Bool(false).as_bool(), Some(false));
    }
}
