//! Failure reports written next to simulation outputs.

mod error_report;

pub use error_report::{ERROR_REPORT_FILE, ErrorReport};
