//! Core domain concepts shared across all subdomains.
//!
//! - [`value::Value`]: dynamically typed parameter value
//! - [`error`]: schema, validation and serialization errors

pub mod error;
pub mod value;
