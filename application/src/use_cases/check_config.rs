//! Check configuration use case
//!
//! Loads a JSON configuration and reports every parameter of the selected
//! view that is not VALID, without producing any file.

use crate::ports::parameter_store::{ParameterStore, StoreError};
use crate::use_cases::shared::load_registry;
use funwave_domain::{Category, State, StateReport};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum CheckConfigError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Input for the CheckConfig use case.
#[derive(Debug, Clone)]
pub struct CheckConfigInput {
    pub source: PathBuf,
    pub is_minimal: bool,
    pub modules: Vec<Category>,
}

impl CheckConfigInput {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            is_minimal: true,
            modules: Vec::new(),
        }
    }

    pub fn with_minimal(mut self, is_minimal: bool) -> Self {
        self.is_minimal = is_minimal;
        self
    }

    pub fn with_modules(mut self, modules: impl IntoIterator<Item = Category>) -> Self {
        self.modules = modules.into_iter().collect();
        self
    }
}

/// Output from the CheckConfig use case.
#[derive(Debug, Clone)]
pub struct CheckConfigOutput {
    pub overall: State,
    /// Non-valid parameters, errors first.
    pub issues: Vec<StateReport>,
    /// Number of parameters in the checked view.
    pub checked: usize,
    /// Number of parameters with an assigned value.
    pub assigned: usize,
}

impl CheckConfigOutput {
    pub fn count(&self, state: State) -> usize {
        self.issues.iter().filter(|r| r.state == state).count()
    }
}

/// Use case for validating a configuration
pub struct CheckConfigUseCase {
    store: Arc<dyn ParameterStore>,
}

impl CheckConfigUseCase {
    pub fn new(store: Arc<dyn ParameterStore>) -> Self {
        Self { store }
    }

    pub fn execute(&self, input: CheckConfigInput) -> Result<CheckConfigOutput, CheckConfigError> {
        let registry = load_registry(self.store.as_ref(), Some(&input.source))?;

        let checked = registry.filter(input.is_minimal, &input.modules).len();
        let assigned = registry.iter().filter(|p| p.is_set()).count();
        let issues = registry.report(input.is_minimal, &input.modules);
        let overall = State::combine(issues.iter().map(|r| r.state));

        for report in issues.iter().filter(|r| r.state == State::Warning) {
            warn!("{}", report.message);
        }
        info!(
            "Checked {} parameter(s) of {}: {}",
            checked,
            input.source.display(),
            overall
        );

        Ok(CheckConfigOutput {
            overall,
            issues,
            checked,
            assigned,
        })
    }
}
