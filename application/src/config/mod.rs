//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`RenderParams`]: driver-file rendering (view, layout, strictness)
//! - [`ExportParams`]: mapping/JSON export shape

pub mod output_params;

pub use output_params::{ExportParams, RenderParams};
