//! Built-in FUNWAVE-TVD parameter catalog.
//!
//! [`input_file`] declares and links every driver-file parameter. The
//! `from_*` helpers build the catalog and apply a mapping on top.

mod funwave;

pub use funwave::declarations;

use crate::core::error::{DomainError, SchemaError};
use crate::parameter::entity::Parameter;
use crate::registry::{Registry, RegistryBuilder, mapping::Mapping};

/// Fresh, linked registry of the FUNWAVE-TVD driver parameters.
pub fn input_file() -> Result<Registry, SchemaError> {
    let mut builder = RegistryBuilder::new();
    for spec in declarations() {
        builder.add(Parameter::new(spec)?)?;
    }
    builder.link()
}

/// Catalog with `mapping` applied (flat, grouped or detailed).
pub fn from_dict(mapping: &Mapping) -> Result<Registry, DomainError> {
    Ok(input_file()?.with_dict(mapping)?)
}

/// Catalog with a JSON object applied.
pub fn from_json_str(json: &str) -> Result<Registry, DomainError> {
    let mut registry = input_file()?;
    registry.apply_json(json)?;
    Ok(registry)
}
