//! Presentation layer for funwave-tools
//!
//! This crate contains CLI definitions and output formatters.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, ReportFormat};
pub use output::console::ConsoleFormatter;
