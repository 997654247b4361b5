//! Configuration file loading for funwave-tools
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./funwave.toml` or `./.funwave.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/funwave-tools/config.toml`
//! 4. Environment: `FUNWAVE_<SECTION>__<KEY>`
//! 5. Default values

mod file_config;
mod issue;
mod loader;

pub use file_config::{FileConfig, FileInputConfig, FileJsonConfig};
pub use issue::{ConfigIssue, ConfigIssueCode, Severity};
pub use loader::ConfigLoader;
