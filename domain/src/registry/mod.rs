//! Registry of linked parameters.
//!
//! A [`Registry`] is only ever produced by [`RegistryBuilder::link`], so
//! every parameter it holds has its dependencies resolved.
//!
//! Submodules add the views on top of the registry:
//!
//! - [`filter`]: minimal / full selection in category order
//! - [`mapping`]: name → value mappings and JSON
//! - [`native`]: the FUNWAVE-TVD driver-file text

pub mod builder;
pub mod filter;
pub mod mapping;
pub mod native;

pub use builder::RegistryBuilder;
pub use mapping::MappingOptions;
pub use native::InputOptions;

use crate::core::error::ValidationError;
use crate::core::value::Value;
use crate::parameter::dependency::ParamId;
use crate::parameter::entity::Parameter;
use crate::parameter::state::{ParameterState, State, StateReport};
use crate::schema::Category;
use std::collections::{BTreeMap, HashMap};

/// Linked set of parameters, indexed by name and grouped by category.
#[derive(Debug, Clone)]
pub struct Registry {
    parameters: Vec<Parameter>,
    index: HashMap<String, ParamId>,
    categories: BTreeMap<Category, Vec<ParamId>>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// All parameters in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter()
    }

    /// Parameter behind an id handed out by this registry.
    ///
    /// # Panics
    ///
    /// Panics if `id` comes from a different registry with more parameters.
    pub fn parameter(&self, id: ParamId) -> &Parameter {
        &self.parameters[id.index()]
    }

    pub fn id(&self, name: &str) -> Option<ParamId> {
        self.index.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.id(name).map(|id| self.parameter(id))
    }

    /// Look up several parameters at once; fails on the first unknown name.
    pub fn get_many<'a, I>(&self, names: I) -> Result<Vec<&Parameter>, ValidationError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        names.into_iter().map(|name| self.require(name)).collect()
    }

    /// Effective value (assigned, else default)
    pub fn value(&self, name: &str) -> Result<Option<&Value>, ValidationError> {
        Ok(self.require(name)?.effective_value())
    }

    /// Validate and assign a single value.
    pub fn set(&mut self, name: &str, raw: impl Into<Value>) -> Result<(), ValidationError> {
        let id = self.require_id(name)?;
        self.parameters[id.index()].set_value(raw)
    }

    /// Validate every value first and assign only when all of them pass.
    pub fn set_values<I, S, V>(&mut self, values: I) -> Result<(), ValidationError>
    where
        I: IntoIterator<Item = (S, V)>,
        S: AsRef<str>,
        V: Into<Value>,
    {
        let validated = values
            .into_iter()
            .map(|(name, raw)| {
                let id = self.require_id(name.as_ref())?;
                let value = self.parameter(id).validate(&raw.into())?;
                Ok((id, Some(value)))
            })
            .collect::<Result<Vec<_>, ValidationError>>()?;
        self.assign(validated);
        Ok(())
    }

    /// Drop the assigned value of `name`, returning it.
    pub fn clear(&mut self, name: &str) -> Result<Option<Value>, ValidationError> {
        let id = self.require_id(name)?;
        Ok(self.parameters[id.index()].clear_value())
    }

    /// Drop every assigned value.
    pub fn clear_all(&mut self) {
        self.parameters.iter_mut().for_each(|p| {
            p.clear_value();
        });
    }

    /// Parameters of one category in insertion order
    pub fn category(&self, category: Category) -> Vec<&Parameter> {
        self.categories
            .get(&category)
            .map(|ids| ids.iter().map(|id| self.parameter(*id)).collect())
            .unwrap_or_default()
    }

    /// Categories holding at least one parameter, in enumeration order
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.categories.keys().copied()
    }

    /// Parameters that declared a dependency on `name`
    pub fn dependents(&self, name: &str) -> Result<Vec<&Parameter>, ValidationError> {
        Ok(self
            .require(name)?
            .dependents()
            .iter()
            .map(|id| self.parameter(*id))
            .collect())
    }

    /// Parameters `name` depends on, in declaration order
    pub fn dependencies(&self, name: &str) -> Result<Vec<&Parameter>, ValidationError> {
        Ok(self
            .require(name)?
            .dependencies()
            .iter()
            .map(|link| self.parameter(link.target()))
            .collect())
    }

    pub fn is_applicable(&self, name: &str) -> Result<bool, ValidationError> {
        Ok(self.require(name)?.is_applicable(self))
    }

    pub fn state(&self, name: &str) -> Result<ParameterState, ValidationError> {
        Ok(self.require(name)?.state(self))
    }

    /// Non-valid parameters among the selected view, errors first.
    ///
    /// Parameters whose dependencies are all unmet do not take part in the
    /// run, so a missing required value is only reported when applicable.
    pub fn report(&self, is_minimal: bool, modules: &[Category]) -> Vec<StateReport> {
        let mut reports: Vec<StateReport> = self
            .filter(is_minimal, modules)
            .into_iter()
            .filter(|param| param.is_set() || param.is_applicable(self))
            .filter_map(|param| {
                let ParameterState { state, message } = param.state(self);
                message.map(|message| StateReport {
                    name: param.name().to_string(),
                    category: param.category(),
                    state,
                    message,
                })
            })
            .collect();
        reports.sort_by(|a, b| b.state.cmp(&a.state));
        reports
    }

    /// Worst state of [`Registry::report`]
    pub fn overall_state(&self, is_minimal: bool, modules: &[Category]) -> State {
        State::combine(
            self.report(is_minimal, modules)
                .into_iter()
                .map(|report| report.state),
        )
    }

    fn require_id(&self, name: &str) -> Result<ParamId, ValidationError> {
        self.id(name).ok_or_else(|| ValidationError::UnknownParameter {
            name: name.to_string(),
        })
    }

    fn require(&self, name: &str) -> Result<&Parameter, ValidationError> {
        self.require_id(name).map(|id| self.parameter(id))
    }

    /// Store already validated values; `None` clears.
    pub(crate) fn assign(&mut self, values: Vec<(ParamId, Option<Value>)>) {
        for (id, value) in values {
            let param = &mut self.parameters[id.index()];
            match value {
                Some(value) => param.assign_validated(value),
                None => {
                    param.clear_value();
                }
            }
        }
    }
}
