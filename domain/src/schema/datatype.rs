//! Parameter datatypes and their driver-file rendering

use crate::core::value::{LARGE_TOKEN, LARGE_VALUE, Value};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of value a parameter holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Datatype {
    /// Compile-time switch of the simulator. Never written to the driver file.
    Flag,
    Bool,
    Integer,
    Float,
    String,
    Path,
    /// One token out of a fixed list
    Enum,
    /// Switch for writing one 2D output field
    OutFlag,
}

impl Datatype {
    pub const ALL: [Datatype; 8] = [
        Datatype::Flag,
        Datatype::Bool,
        Datatype::Integer,
        Datatype::Float,
        Datatype::String,
        Datatype::Path,
        Datatype::Enum,
        Datatype::OutFlag,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Datatype::Flag => "FLAG",
            Datatype::Bool => "BOOL",
            Datatype::Integer => "INTEGER",
            Datatype::Float => "FLOAT",
            Datatype::String => "STRING",
            Datatype::Path => "PATH",
            Datatype::Enum => "ENUM",
            Datatype::OutFlag => "OUT_FLAG",
        }
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, Datatype::Flag | Datatype::Bool | Datatype::OutFlag)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Datatype::Integer | Datatype::Float)
    }

    /// Render an already validated value the way the simulator reads it:
    /// `T`/`F` for booleans, `LARGE` for the large sentinel, `%f` for floats.
    pub fn render(&self, value: &Value) -> String {
        match (self, value) {
            (_, Value::Bool(true)) => "T".to_string(),
            (_, Value::Bool(false)) => "F".to_string(),
            (_, Value::Integer(i)) if *i == LARGE_VALUE => LARGE_TOKEN.to_string(),
            (Datatype::Float, Value::Integer(i)) => format!("{:.6}", *i as f64),
            (_, Value::Integer(i)) => i.to_string(),
            (_, Value::Float(f)) if *f == LARGE_VALUE as f64 => LARGE_TOKEN.to_string(),
            (_, Value::Float(f)) => format!("{:.6}", f),
            (_, Value::Text(s)) => s.clone(),
        }
    }
}

impl fmt::Display for Datatype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_booleans_as_single_letters() {
        assert_eq!(Datatype::Bool.render(&Value::Bool(true)), "T");
        assert_eq!(Datatype::OutFlag.render(&Value::Bool(false)), "F");
    }

    #[test]
    fn test_render_numbers() {
        assert_eq!(Datatype::Integer.render(&Value::Integer(250)), "250");
        assert_eq!(Datatype::Float.render(&Value::Float(0.5)), "0.500000");
        assert_eq!(Datatype::Float.render(&Value::Integer(2)), "2.000000");
    }

    #[test]
    fn test_render_large_sentinel() {
        assert_eq!(Datatype::Integer.render(&Value::Integer(LARGE_VALUE)), "LARGE");
        assert_eq!(Datatype::Float.render(&Value::Float(99999.0)), "LARGE");
    }

    #[test]
    fn test_serialize_screaming_snake_case() {
        let json = serde_json::to_string(&Datatype::OutFlag).unwrap();
        assert_eq!(json, "\"OUT_FLAG\"");
    }

    #[test]
    fn test_boolean_kinds() {
        let booleans: Vec<_> = Datatype::ALL.iter().filter(|d| d.is_boolean()).collect();
        assert_eq!(booleans.len(), 3);
        assert!(!Datatype::Enum.is_boolean());
        assert!(Datatype::Float.is_numeric());
    }
}
