//! Render driver file use case
//!
//! Turns a JSON configuration into FUNWAVE-TVD driver-file text:
//!
//! 1. **Load** - Read the mapping and apply it to a fresh catalog
//! 2. **Check** - Collect the state report of the selected view
//! 3. **Render** - Produce the banner sections
//! 4. **Write** - Save the text when an output path is given

use crate::config::RenderParams;
use crate::ports::parameter_store::{ParameterStore, StoreError};
use crate::use_cases::shared::load_registry;
use funwave_domain::{State, StateReport};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while rendering a driver file.
#[derive(Error, Debug)]
pub enum RenderInputError {
    /// Strict rendering was requested and the configuration has errors.
    ///
    /// Carries the number of offending parameters and the first report.
    #[error("configuration has {count} error(s), first: {first}")]
    InvalidConfiguration { count: usize, first: String },

    /// Reading the configuration or writing the driver file failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Input for the RenderInput use case.
#[derive(Debug, Clone)]
pub struct RenderInputInput {
    /// JSON configuration to apply; `None` renders the bare catalog.
    pub source: Option<PathBuf>,
    /// Driver file to write.
    pub output: Option<PathBuf>,
    pub params: RenderParams,
}

impl RenderInputInput {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: Some(source.into()),
            output: None,
            params: RenderParams::default(),
        }
    }

    /// Render the catalog without applying any configuration.
    pub fn empty() -> Self {
        Self {
            source: None,
            output: None,
            params: RenderParams::default(),
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_params(mut self, params: RenderParams) -> Self {
        self.params = params;
        self
    }
}

/// Output from the RenderInput use case.
#[derive(Debug, Clone)]
pub struct RenderInputOutput {
    /// Rendered driver-file text.
    pub text: String,
    /// Number of banner sections in `text`.
    pub sections: usize,
    /// Worst state of the rendered view.
    pub overall: State,
    /// Non-valid parameters of the rendered view, errors first.
    pub issues: Vec<StateReport>,
    /// Where the text was written, if anywhere.
    pub written_to: Option<PathBuf>,
}

/// Use case for rendering a driver file
pub struct RenderInputUseCase {
    store: Arc<dyn ParameterStore>,
}

impl RenderInputUseCase {
    pub fn new(store: Arc<dyn ParameterStore>) -> Self {
        Self { store }
    }

    pub fn execute(&self, input: RenderInputInput) -> Result<RenderInputOutput, RenderInputError> {
        let registry = load_registry(self.store.as_ref(), input.source.as_deref())?;
        let options = input.params.input_options();

        let issues = registry.report(options.is_minimal, &options.modules);
        let overall = State::combine(issues.iter().map(|report| report.state));
        for report in issues.iter().filter(|r| r.state == State::Warning) {
            warn!("{}", report.message);
        }

        if input.params.strict && overall == State::Error {
            let errors: Vec<&StateReport> =
                issues.iter().filter(|r| r.state == State::Error).collect();
            return Err(RenderInputError::InvalidConfiguration {
                count: errors.len(),
                first: errors
                    .first()
                    .map(|r| r.message.clone())
                    .unwrap_or_default(),
            });
        }

        let sections = registry.input_sections(&options);
        for (category, lines) in &sections {
            // banner (3) + trailing blank line
            debug!(
                "Rendered {} with {} parameter(s)",
                category,
                lines.len().saturating_sub(4)
            );
        }
        let text: String = sections
            .iter()
            .flat_map(|(_, lines)| lines)
            .map(|line| format!("{line}\n"))
            .collect();

        let written_to = match input.output {
            Some(path) => {
                self.store.write(&path, &text)?;
                info!("Wrote driver file to {}", path.display());
                Some(path)
            }
            None => None,
        };

        Ok(RenderInputOutput {
            text,
            sections: sections.len(),
            overall,
            issues,
            written_to,
        })
    }
}
