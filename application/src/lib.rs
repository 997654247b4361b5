//! Application layer for funwave-tools
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{ExportParams, RenderParams};
pub use ports::parameter_store::{ParameterStore, StoreError};
pub use use_cases::check_config::{
    CheckConfigError, CheckConfigInput, CheckConfigOutput, CheckConfigUseCase,
};
pub use use_cases::export::{ExportError, ExportInput, ExportOutput, ExportUseCase};
pub use use_cases::render_input::{
    RenderInputError, RenderInputInput, RenderInputOutput, RenderInputUseCase,
};
