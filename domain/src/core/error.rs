//! Domain error types
//!
//! Errors are split by when they can happen:
//!
//! - [`SchemaError`]: registry construction (duplicate names, dangling
//!   dependencies, unsupported datatype/mask pairs). Fatal.
//! - [`ValidationError`]: assigning a value. Recoverable, the previous
//!   value is kept.
//! - [`SerializationError`]: reading a mapping or JSON document back.
//!
//! Non-fatal state warnings are not errors; see
//! [`ParameterState`](crate::parameter::state::ParameterState).

use crate::schema::{Datatype, Mask};
use thiserror::Error;

/// Construction-time errors. A registry that produced one of these is never
/// handed out.
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("parameter '{name}' has already been added")]
    DuplicateName { name: String },

    #[error("parameter '{parameter}' depends on unknown parameter '{dependency}'")]
    UnknownDependency {
        parameter: String,
        dependency: String,
    },

    #[error("parameter '{parameter}' depends on itself")]
    SelfDependency { parameter: String },

    #[error("parameter '{parameter}': no validator for combination ({datatype}, {mask})")]
    UnsupportedMask {
        parameter: String,
        datatype: Datatype,
        mask: Mask,
    },

    #[error("parameter '{parameter}': mask {mask} on {datatype} needs {expected}")]
    MissingLegalValues {
        parameter: String,
        datatype: Datatype,
        mask: Mask,
        expected: &'static str,
    },

    #[error("parameter '{parameter}': default value does not satisfy its mask: {source}")]
    InvalidDefault {
        parameter: String,
        #[source]
        source: ValidationError,
    },

    #[error(
        "parameter '{parameter}': dependency on '{dependency}' requires an invalid value: {source}"
    )]
    InvalidDependencyValue {
        parameter: String,
        dependency: String,
        #[source]
        source: ValidationError,
    },

    #[error("parameter '{name}' has already been linked")]
    AlreadyLinked { name: String },

    #[error("parameter '{name}' is not part of the registry being linked")]
    ForeignParameter { name: String },
}

/// Value assignment errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("invalid value '{value}' for parameter '{name}': {reason}")]
    InvalidValue {
        name: String,
        value: String,
        reason: String,
    },

    #[error("unknown parameter '{name}'")]
    UnknownParameter { name: String },
}

impl ValidationError {
    pub fn invalid(name: impl Into<String>, value: impl ToString, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            name: name.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Name of the parameter the error refers to
    pub fn name(&self) -> &str {
        match self {
            Self::InvalidValue { name, .. } | Self::UnknownParameter { name } => name,
        }
    }
}

/// Errors while reading a mapping or JSON document into a registry.
#[derive(Error, Debug)]
pub enum SerializationError {
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown parameter '{name}'")]
    UnknownParameter { name: String },

    #[error("unknown category '{name}'")]
    UnknownCategory { name: String },

    #[error("unexpected shape for '{key}': {reason}")]
    UnexpectedShape { key: String, reason: String },

    #[error(transparent)]
    InvalidValue(ValidationError),
}

impl From<ValidationError> for SerializationError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::UnknownParameter { name } => Self::UnknownParameter { name },
            other => Self::InvalidValue(other),
        }
    }
}

/// Any error produced by the domain layer
#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Serialization(#[from] SerializationError),
}

impl DomainError {
    /// Schema errors mean the catalog itself is broken, not the user's input
    pub fn is_fatal(&self) -> bool {
        matches!(self, DomainError::Schema(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_names_field_and_value() {
        let error = ValidationError::invalid("DX", -1.0, "must be > 0");
        assert_eq!(
            error.to_string(),
            "invalid value '-1' for parameter 'DX': must be > 0"
        );
        assert_eq!(error.name(), "DX");
    }

    #[test]
    fn test_unknown_dependency_display() {
        let error = SchemaError::UnknownDependency {
            parameter: "PX".to_string(),
            dependency: "PARALEL".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "parameter 'PX' depends on unknown parameter 'PARALEL'"
        );
    }

    #[test]
    fn test_unknown_parameter_maps_to_serialization_variant() {
        let error: SerializationError = ValidationError::UnknownParameter {
            name: "NOPE".to_string(),
        }
        .into();
        assert!(matches!(
            error,
            SerializationError::UnknownParameter { ref name } if name == "NOPE"
        ));
    }

    #[test]
    fn test_is_fatal_check() {
        let schema: DomainError = SchemaError::DuplicateName {
            name: "DX".to_string(),
        }
        .into();
        assert!(schema.is_fatal());

        let validation: DomainError = ValidationError::UnknownParameter {
            name: "DX".to_string(),
        }
        .into();
        assert!(!validation.is_fatal());
    }
}
