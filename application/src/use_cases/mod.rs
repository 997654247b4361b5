//! Use cases (application services)

pub mod check_config;
pub mod export;
pub mod render_input;
mod shared;
