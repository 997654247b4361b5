//! Schema primitives: datatypes, masks, categories and the cast contract.
//!
//! - [`datatype::Datatype`]: closed set of field kinds
//! - [`mask::Mask`]: closed set of value constraints
//! - [`category::Category`]: grouping tag with the essential subset
//! - [`cast`]: validate a raw value for a `(datatype, mask)` pair

pub mod category;
pub mod datatype;
pub mod mask;

pub use category::Category;
pub use datatype::Datatype;
pub use mask::{LegalValues, Mask, Validator, validator};

use crate::core::value::Value;
use thiserror::Error;

/// Failure of [`cast`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CastError {
    #[error("no validator for combination ({datatype}, {mask})")]
    Unsupported { datatype: Datatype, mask: Mask },

    #[error("cannot cast '{value}': {reason}")]
    Rejected { value: String, reason: String },
}

/// Cast `raw` for a `(datatype, mask)` pair, checking it against `legal`.
pub fn cast(
    datatype: Datatype,
    mask: Mask,
    raw: &Value,
    legal: Option<&LegalValues>,
) -> Result<Value, CastError> {
    let validate = validator(datatype, mask).ok_or(CastError::Unsupported { datatype, mask })?;
    validate(raw, legal).map_err(|reason| CastError::Rejected {
        value: raw.to_string(),
        reason,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::value::LARGE_VALUE;

    #[test]
    fn test_large_positive_definite_integer() {
        let value = cast(
            Datatype::Integer,
            Mask::PositiveDefinite,
            &Value::from("LARGE"),
            None,
        );
        assert_eq!(value, Ok(Value::Integer(LARGE_VALUE)));
    }

    #[test]
    fn test_single_letter_bool() {
        let value = cast(Datatype::Bool, Mask::None, &Value::from("t"), None);
        assert_eq!(value, Ok(Value::Bool(true)));
    }

    #[test]
    fn test_enum_outside_legal_tokens() {
        let legal = LegalValues::tokens(["A", "B"]);
        let value = cast(Datatype::Enum, Mask::Range, &Value::from("X"), Some(&legal));
        assert!(matches!(value, Err(CastError::Rejected { .. })));
    }

    #[test]
    fn test_unsupported_pair() {
        let value = cast(Datatype::String, Mask::Range, &Value::from("X"), None);
        assert_eq!(
            value,
            Err(CastError::Unsupported {
                datatype: Datatype::String,
                mask: Mask::Range
            })
        );
    }
}
