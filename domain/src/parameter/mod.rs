//! Parameter subdomain.
//!
//! - [`entity::Parameter`]: one typed, validated configuration field
//! - [`dependency`]: declared and linked conditional dependencies
//! - [`state`]: per-field validity and registry-wide reports

pub mod dependency;
pub mod entity;
pub mod state;
