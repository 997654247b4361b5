//! Domain layer for funwave-tools
//!
//! This crate contains the parameter model of a FUNWAVE-TVD driver file:
//! typed, validated fields, their conditional dependencies, and the views
//! that turn a set of fields into JSON or driver-file text. It has no
//! dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Parameters
//!
//! A [`Parameter`] carries a [`Datatype`], a [`Mask`] constraining its
//! values, and a [`Category`]. Every assignment goes through the validator
//! registered for the `(datatype, mask)` pair.
//!
//! ## Registry
//!
//! Parameters are collected by a [`RegistryBuilder`] and linked into a
//! [`Registry`] in one step, resolving every dependency by name. The
//! registry provides:
//!
//! - **Filtering**: minimal (only what must be set) or full views
//! - **Mappings**: flat, grouped or detailed JSON
//! - **Driver files**: aligned `NAME = VALUE` sections
//! - **State**: per-field and aggregate validity
//!
//! The FUNWAVE-TVD parameter set itself lives in [`catalog`].

pub mod catalog;
pub mod core;
pub mod parameter;
pub mod registry;
pub mod schema;
pub mod text;

// Re-export commonly used types
pub use core::{
    error::{DomainError, SchemaError, SerializationError, ValidationError},
    value::{LARGE_TOKEN, LARGE_VALUE, Value},
};
pub use parameter::{
    dependency::{Dependency, DependencySpec, ParamId, Requirement},
    entity::{Parameter, ParameterSpec},
    state::{ParameterState, State, StateReport},
};
pub use registry::{
    InputOptions, MappingOptions, Registry, RegistryBuilder,
    mapping::{Mapping, ParameterDetail},
    native::banner,
};
pub use schema::{Category, Datatype, LegalValues, Mask, Validator, cast, validator};
pub use text::{Justify, JustifyError, JustifyLines};
