//! Value masks and the validator table.
//!
//! A `(Datatype, Mask)` pair selects exactly one [`Validator`]. The table is
//! closed: a pair that is not listed in [`validator`] cannot be used by any
//! parameter.
//!
//! | Datatype                   | Masks                                   |
//! |----------------------------|-----------------------------------------|
//! | `FLAG`, `BOOL`, `OUT_FLAG` | `NONE`                                  |
//! | `INTEGER`, `FLOAT`         | `NONE`, `POSITIVE`, `POSITIVE_DEFINITE`, `RANGE` |
//! | `ENUM`                     | `RANGE`                                 |
//! | `STRING`, `PATH`           | `NONE`                                  |

use super::datatype::Datatype;
use crate::core::value::{LARGE_TOKEN, LARGE_VALUE, Value};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Constraint applied on top of the datatype cast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mask {
    None,
    /// `>= 0`
    Positive,
    /// `> 0`
    PositiveDefinite,
    /// Inside `[min, max]`, or one of the legal tokens for `ENUM`
    Range,
}

impl Mask {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mask::None => "NONE",
            Mask::Positive => "POSITIVE",
            Mask::PositiveDefinite => "POSITIVE_DEFINITE",
            Mask::Range => "RANGE",
        }
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Data carried by a `RANGE` mask.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LegalValues {
    Bounds { min: f64, max: f64 },
    Tokens(Vec<String>),
}

impl LegalValues {
    pub fn bounds(min: f64, max: f64) -> Self {
        LegalValues::Bounds { min, max }
    }

    pub fn tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        LegalValues::Tokens(tokens.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for LegalValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LegalValues::Bounds { min, max } => write!(f, "[{}, {}]", min, max),
            LegalValues::Tokens(tokens) => write!(f, "[{}]", tokens.join(", ")),
        }
    }
}

/// Casts a raw value and checks it against the mask. `Err` carries the reason.
pub type Validator = fn(&Value, Option<&LegalValues>) -> Result<Value, String>;

/// Look up the validator registered for a `(datatype, mask)` pair.
pub fn validator(datatype: Datatype, mask: Mask) -> Option<Validator> {
    let found: Validator = match (datatype, mask) {
        (Datatype::Flag | Datatype::Bool | Datatype::OutFlag, Mask::None) => cast_bool,

        (Datatype::Integer, Mask::None) => cast_int,
        (Datatype::Integer, Mask::Positive) => cast_positive_int,
        (Datatype::Integer, Mask::PositiveDefinite) => cast_positive_definite_int,
        (Datatype::Integer, Mask::Range) => cast_int_in_range,

        (Datatype::Float, Mask::None) => cast_float,
        (Datatype::Float, Mask::Positive) => cast_positive_float,
        (Datatype::Float, Mask::PositiveDefinite) => cast_positive_definite_float,
        (Datatype::Float, Mask::Range) => cast_float_in_range,

        (Datatype::Enum, Mask::Range) => cast_token,

        (Datatype::String | Datatype::Path, Mask::None) => cast_text,

        _ => return None,
    };
    Some(found)
}

/// What kind of [`LegalValues`] a pair needs, if any.
pub(crate) fn expected_legal_values(datatype: Datatype, mask: Mask) -> Option<&'static str> {
    match (datatype, mask) {
        (Datatype::Enum, _) => Some("a list of legal tokens"),
        (_, Mask::Range) => Some("numeric [min, max] bounds"),
        _ => None,
    }
}

pub(crate) fn legal_values_match(datatype: Datatype, legal: &LegalValues) -> bool {
    match legal {
        LegalValues::Tokens(_) => datatype == Datatype::Enum,
        LegalValues::Bounds { min, max } => datatype.is_numeric() && min <= max,
    }
}

fn cast_bool(raw: &Value, _: Option<&LegalValues>) -> Result<Value, String> {
    match raw {
        Value::Bool(b) => Ok(Value::Bool(*b)),
        Value::Text(s) => match s.trim().to_lowercase().as_str() {
            "true" | "yes" | "t" | "y" => Ok(Value::Bool(true)),
            "false" | "no" | "f" | "n" => Ok(Value::Bool(false)),
            _ => Err("expected one of true/false/yes/no/t/f/y/n".to_string()),
        },
        _ => Err("expected a boolean".to_string()),
    }
}

fn parse_i64(raw: &Value) -> Result<i64, String> {
    match raw {
        Value::Integer(i) => Ok(*i),
        Value::Text(s) if s.trim() == LARGE_TOKEN => Ok(LARGE_VALUE),
        Value::Text(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| "expected an integer".to_string()),
        _ => Err("expected an integer".to_string()),
    }
}

fn parse_f64(raw: &Value) -> Result<f64, String> {
    let parsed = match raw {
        Value::Float(f) => *f,
        Value::Integer(i) => *i as f64,
        Value::Text(s) if s.trim() == LARGE_TOKEN => LARGE_VALUE as f64,
        Value::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| "expected a number".to_string())?,
        Value::Bool(_) => return Err("expected a number".to_string()),
    };
    if parsed.is_finite() {
        Ok(parsed)
    } else {
        Err("expected a finite number".to_string())
    }
}

fn check_bounds(x: f64, legal: Option<&LegalValues>) -> Result<(), String> {
    match legal {
        Some(LegalValues::Bounds { min, max }) if x >= *min && x <= *max => Ok(()),
        Some(LegalValues::Bounds { min, max }) => {
            Err(format!("must lie in [{}, {}]", min, max))
        }
        _ => Err("no numeric bounds registered".to_string()),
    }
}

fn cast_int(raw: &Value, _: Option<&LegalValues>) -> Result<Value, String> {
    parse_i64(raw).map(Value::Integer)
}

fn cast_positive_int(raw: &Value, _: Option<&LegalValues>) -> Result<Value, String> {
    match parse_i64(raw)? {
        i if i >= 0 => Ok(Value::Integer(i)),
        _ => Err("must be >= 0".to_string()),
    }
}

fn cast_positive_definite_int(raw: &Value, _: Option<&LegalValues>) -> Result<Value, String> {
    match parse_i64(raw)? {
        i if i > 0 => Ok(Value::Integer(i)),
        _ => Err("must be > 0".to_string()),
    }
}

fn cast_int_in_range(raw: &Value, legal: Option<&LegalValues>) -> Result<Value, String> {
    let i = parse_i64(raw)?;
    check_bounds(i as f64, legal)?;
    Ok(Value::Integer(i))
}

fn cast_float(raw: &Value, _: Option<&LegalValues>) -> Result<Value, String> {
    parse_f64(raw).map(Value::Float)
}

fn cast_positive_float(raw: &Value, _: Option<&LegalValues>) -> Result<Value, String> {
    match parse_f64(raw)? {
        x if x >= 0.0 => Ok(Value::Float(x)),
        _ => Err("must be >= 0".to_string()),
    }
}

fn cast_positive_definite_float(raw: &Value, _: Option<&LegalValues>) -> Result<Value, String> {
    match parse_f64(raw)? {
        x if x > 0.0 => Ok(Value::Float(x)),
        _ => Err("must be > 0".to_string()),
    }
}

fn cast_float_in_range(raw: &Value, legal: Option<&LegalValues>) -> Result<Value, String> {
    let x = parse_f64(raw)?;
    check_bounds(x, legal)?;
    Ok(Value::Float(x))
}

fn cast_token(raw: &Value, legal: Option<&LegalValues>) -> Result<Value, String> {
    let Value::Text(token) = raw else {
        return Err("expected a text token".to_string());
    };
    match legal {
        Some(LegalValues::Tokens(tokens)) if tokens.iter().any(|t| t == token) => {
            Ok(Value::Text(token.clone()))
        }
        Some(legal @ LegalValues::Tokens(_)) => Err(format!("must be one of {}", legal)),
        _ => Err("no legal tokens registered".to_string()),
    }
}

fn cast_text(raw: &Value, _: Option<&LegalValues>) -> Result<Value, String> {
    match raw {
        Value::Text(s) => Ok(Value::Text(s.clone())),
        _ => Err("expected text".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(datatype: Datatype, mask: Mask, raw: impl Into<Value>) -> Result<Value, String> {
        let validate = validator(datatype, mask).expect("registered pair");
        validate(&raw.into(), None)
    }

    #[test]
    fn test_every_boolean_token() {
        for token in ["true", "TRUE", "yes", "t", "Y", " y "] {
            assert_eq!(run(Datatype::Bool, Mask::None, token), Ok(Value::Bool(true)));
        }
        for token in ["false", "No", "f", "N"] {
            assert_eq!(run(Datatype::Flag, Mask::None, token), Ok(Value::Bool(false)));
        }
        assert!(run(Datatype::OutFlag, Mask::None, "maybe").is_err());
        assert!(run(Datatype::Bool, Mask::None, 1).is_err());
    }

    #[test]
    fn test_large_token_maps_to_sentinel() {
        assert_eq!(
            run(Datatype::Integer, Mask::PositiveDefinite, "LARGE"),
            Ok(Value::Integer(LARGE_VALUE))
        );
        assert_eq!(
            run(Datatype::Float, Mask::None, " LARGE "),
            Ok(Value::Float(99999.0))
        );
    }

    #[test]
    fn test_integer_masks() {
        assert_eq!(run(Datatype::Integer, Mask::Positive, "0"), Ok(Value::Integer(0)));
        assert!(run(Datatype::Integer, Mask::PositiveDefinite, 0).is_err());
        assert!(run(Datatype::Integer, Mask::None, 1.5).is_err());
        assert!(run(Datatype::Integer, Mask::None, "1.0").is_err());
    }

    #[test]
    fn test_float_masks() {
        assert_eq!(run(Datatype::Float, Mask::Positive, 3), Ok(Value::Float(3.0)));
        assert_eq!(run(Datatype::Float, Mask::None, "-0.531"), Ok(Value::Float(-0.531)));
        assert!(run(Datatype::Float, Mask::PositiveDefinite, 0.0).is_err());
        assert!(run(Datatype::Float, Mask::Positive, "-1e-3").is_err());
        assert!(run(Datatype::Float, Mask::None, f64::NAN).is_err());
    }

    #[test]
    fn test_range_is_inclusive() {
        let bounds = LegalValues::bounds(-90.0, 90.0);
        let validate = validator(Datatype::Float, Mask::Range).unwrap();
        assert!(validate(&Value::Float(90.0), Some(&bounds)).is_ok());
        assert!(validate(&Value::Float(-90.0), Some(&bounds)).is_ok());
        assert!(validate(&Value::Float(90.5), Some(&bounds)).is_err());

        let validate = validator(Datatype::Integer, Mask::Range).unwrap();
        assert!(validate(&Value::Integer(3), Some(&LegalValues::bounds(1.0, 3.0))).is_ok());
    }

    #[test]
    fn test_enum_requires_exact_member() {
        let legal = LegalValues::tokens(["A", "B"]);
        let validate = validator(Datatype::Enum, Mask::Range).unwrap();
        assert_eq!(
            validate(&Value::from("A"), Some(&legal)),
            Ok(Value::from("A"))
        );
        assert!(validate(&Value::from("X"), Some(&legal)).is_err());
        assert!(validate(&Value::from("a"), Some(&legal)).is_err());
    }

    #[test]
    fn test_text_is_not_coerced() {
        assert_eq!(
            run(Datatype::Path, Mask::None, "depth.txt"),
            Ok(Value::from("depth.txt"))
        );
        assert!(run(Datatype::String, Mask::None, 12).is_err());
    }

    #[test]
    fn test_unregistered_pairs() {
        assert!(validator(Datatype::Enum, Mask::None).is_none());
        assert!(validator(Datatype::Bool, Mask::Range).is_none());
        assert!(validator(Datatype::Path, Mask::Positive).is_none());
    }

    #[test]
    fn test_legal_values_kind_check() {
        assert!(legal_values_match(Datatype::Enum, &LegalValues::tokens(["A"])));
        assert!(!legal_values_match(Datatype::Float, &LegalValues::tokens(["A"])));
        assert!(!legal_values_match(Datatype::Float, &LegalValues::bounds(2.0, 1.0)));
    }
}
