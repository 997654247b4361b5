//! Two-phase registry construction.
//!
//! Parameters are collected first and linked in one pass afterwards, so
//! declaration order does not matter and a dependency may point forward.

use super::Registry;
use crate::core::error::SchemaError;
use crate::parameter::dependency::ParamId;
use crate::parameter::entity::Parameter;
use crate::schema::Category;
use std::collections::{BTreeMap, HashMap};

/// Collects parameters until [`RegistryBuilder::link`] turns them into a
/// [`Registry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    parameters: Vec<Parameter>,
    index: HashMap<String, ParamId>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Register a parameter. Names are unique and case-sensitive.
    pub fn add(&mut self, parameter: Parameter) -> Result<ParamId, SchemaError> {
        if self.index.contains_key(parameter.name()) {
            return Err(SchemaError::DuplicateName {
                name: parameter.name().to_string(),
            });
        }
        if parameter.is_linked() {
            return Err(SchemaError::AlreadyLinked {
                name: parameter.name().to_string(),
            });
        }

        let id = ParamId(self.parameters.len());
        self.index.insert(parameter.name().to_string(), id);
        self.parameters.push(parameter);
        Ok(id)
    }

    /// Chaining form of [`RegistryBuilder::add`]
    pub fn with(mut self, parameter: Parameter) -> Result<Self, SchemaError> {
        self.add(parameter)?;
        Ok(self)
    }

    /// Resolve every dependency name, then attach links and reverse edges.
    ///
    /// Nothing is attached unless every parameter resolves.
    pub fn link(self) -> Result<Registry, SchemaError> {
        let Self {
            mut parameters,
            index,
        } = self;

        let resolved = {
            let lookup = |name: &str| index.get(name).map(|id| (*id, &parameters[id.index()]));
            parameters
                .iter()
                .map(|param| param.resolve_links(lookup))
                .collect::<Result<Vec<_>, _>>()?
        };

        let mut edges = Vec::new();
        for (position, (param, links)) in parameters.iter_mut().zip(resolved).enumerate() {
            edges.extend(links.iter().map(|link| (link.target(), ParamId(position))));
            param.attach_links(links)?;
        }
        for (target, dependent) in edges {
            parameters[target.index()].add_dependent(dependent);
        }

        let mut categories: BTreeMap<Category, Vec<ParamId>> = BTreeMap::new();
        for (position, param) in parameters.iter().enumerate() {
            categories
                .entry(param.category())
                .or_default()
                .push(ParamId(position));
        }

        Ok(Registry {
            parameters,
            index,
            categories,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::value::Value;
    use crate::parameter::dependency::Requirement;
    use crate::parameter::entity::ParameterSpec;
    use crate::schema::{Datatype, Mask};

    fn wavemaker() -> Parameter {
        Parameter::new(
            ParameterSpec::new("WAVEMAKER", Datatype::Enum, Category::WaveMaker)
                .tokens(["INI_SOL", "WK_REG", "WK_IRR"]),
        )
        .unwrap()
    }

    fn tperiod() -> Parameter {
        Parameter::new(
            ParameterSpec::new("Tperiod", Datatype::Float, Category::WaveMaker)
                .required()
                .mask(Mask::PositiveDefinite)
                .depends_on("WAVEMAKER", "WK_REG"),
        )
        .unwrap()
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut builder = RegistryBuilder::new();
        builder.add(wavemaker()).unwrap();
        let err = builder.add(wavemaker()).unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateName { ref name } if name == "WAVEMAKER"));
        assert_eq!(builder.len(), 1);
    }

    #[test]
    fn test_forward_reference_links() {
        let registry = RegistryBuilder::new()
            .with(tperiod())
            .unwrap()
            .with(wavemaker())
            .unwrap()
            .link()
            .unwrap();

        let tperiod = registry.get("Tperiod").unwrap();
        assert!(tperiod.is_linked());
        let link = &tperiod.dependencies()[0];
        assert_eq!(link.name(), "WAVEMAKER");
        assert_eq!(registry.parameter(link.target()).name(), "WAVEMAKER");
        assert_eq!(
            link.requirement(),
            &Requirement::Equals(Value::Text("WK_REG".into()))
        );
        assert_eq!(registry.get("WAVEMAKER").unwrap().dependents().len(), 1);
    }

    #[test]
    fn test_unknown_dependency_fails_link() {
        let err = RegistryBuilder::new()
            .with(tperiod())
            .unwrap()
            .link()
            .unwrap_err();
        assert!(matches!(
            err,
            SchemaError::UnknownDependency { ref parameter, ref dependency }
                if parameter == "Tperiod" && dependency == "WAVEMAKER"
        ));
    }

    #[test]
    fn test_dependency_value_outside_target_domain_fails_link() {
        let amp = Parameter::new(
            ParameterSpec::new("AMP_WK", Datatype::Float, Category::WaveMaker)
                .mask(Mask::PositiveDefinite)
                .depends_on("WAVEMAKER", "LEFT_SOL"),
        )
        .unwrap();
        let err = RegistryBuilder::new()
            .with(wavemaker())
            .unwrap()
            .with(amp)
            .unwrap()
            .link()
            .unwrap_err();
        assert!(matches!(err, SchemaError::InvalidDependencyValue { .. }));
    }

    #[test]
    fn test_self_dependency_fails_link() {
        let looped = Parameter::new(
            ParameterSpec::new("HOT_START", Datatype::Bool, Category::HotStart)
                .default_value(false)
                .depends_on("HOT_START", true),
        )
        .unwrap();
        let err = RegistryBuilder::new().with(looped).unwrap().link().unwrap_err();
        assert!(matches!(err, SchemaError::SelfDependency { .. }));
    }

    #[test]
    fn test_linked_parameter_cannot_be_added_again() {
        let registry = RegistryBuilder::new().with(wavemaker()).unwrap().link().unwrap();
        let linked = registry.get("WAVEMAKER").unwrap().clone();
        let err = RegistryBuilder::new().with(linked).unwrap_err();
        assert!(matches!(err, SchemaError::AlreadyLinked { .. }));
    }

    #[test]
    fn test_empty_builder_links() {
        let registry = RegistryBuilder::new().link().unwrap();
        assert!(registry.is_empty());
        assert_eq!(registry.categories().count(), 0);
    }
}
