//! Infrastructure layer for funwave-tools
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod report;
pub mod store;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigIssueCode, ConfigLoader, FileConfig, FileInputConfig, FileJsonConfig,
    Severity,
};
pub use report::{ERROR_REPORT_FILE, ErrorReport};
pub use store::FileParameterStore;
