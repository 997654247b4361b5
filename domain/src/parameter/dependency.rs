//! Conditional applicability between parameters.
//!
//! A parameter declares its dependencies by name ([`DependencySpec`]). The
//! registry resolves each name exactly once while linking and replaces the
//! spec with a [`Dependency`] pointing at the target's [`ParamId`].
//!
//! A parameter with several dependencies is applicable as soon as **any**
//! of them is met.

use super::entity::Parameter;
use crate::core::error::SchemaError;
use crate::core::value::Value;
use crate::schema::{Mask, validator};
use serde::Serialize;
use std::fmt;

/// Position of a parameter inside its registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParamId(pub(crate) usize);

impl ParamId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// What the other parameter's effective value has to look like.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Requirement {
    Equals(Value),
    AnyOf(Vec<Value>),
    /// The value passes the given mask for the target's datatype
    Satisfies(Mask),
    /// The target has been assigned a value
    Defined,
}

impl Requirement {
    pub fn any_of<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Requirement::AnyOf(values.into_iter().map(Into::into).collect())
    }

    /// Cast the declared values through the target's validator so that
    /// comparisons later happen between values of the same type.
    pub(crate) fn resolve(&self, owner: &str, target: &Parameter) -> Result<Self, SchemaError> {
        let cast = |value: &Value| {
            target
                .validate(value)
                .map_err(|source| SchemaError::InvalidDependencyValue {
                    parameter: owner.to_string(),
                    dependency: target.name().to_string(),
                    source,
                })
        };

        match self {
            Requirement::Equals(value) => Ok(Requirement::Equals(cast(value)?)),
            Requirement::AnyOf(values) => values
                .iter()
                .map(cast)
                .collect::<Result<Vec<_>, _>>()
                .map(Requirement::AnyOf),
            Requirement::Satisfies(mask) => match validator(target.datatype(), *mask) {
                Some(_) => Ok(Requirement::Satisfies(*mask)),
                None => Err(SchemaError::UnsupportedMask {
                    parameter: owner.to_string(),
                    datatype: target.datatype(),
                    mask: *mask,
                }),
            },
            Requirement::Defined => Ok(Requirement::Defined),
        }
    }

    /// Whether `target` currently fulfils the requirement
    pub fn is_met_by(&self, target: &Parameter) -> bool {
        match self {
            Requirement::Defined => target.is_set(),
            Requirement::Equals(expected) => target.effective_value() == Some(expected),
            Requirement::AnyOf(expected) => target
                .effective_value()
                .is_some_and(|value| expected.contains(value)),
            Requirement::Satisfies(mask) => {
                let (Some(value), Some(validate)) =
                    (target.effective_value(), validator(target.datatype(), *mask))
                else {
                    return false;
                };
                validate(value, target.legal_values()).is_ok()
            }
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Requirement::Equals(value) => write!(f, "= {}", value),
            Requirement::AnyOf(values) => {
                let values: Vec<String> = values.iter().map(|v| v.to_string()).collect();
                write!(f, "in [{}]", values.join(", "))
            }
            Requirement::Satisfies(mask) => write!(f, "satisfying {}", mask),
            Requirement::Defined => write!(f, "set"),
        }
    }
}

impl From<Value> for Requirement {
    fn from(value: Value) -> Self {
        Requirement::Equals(value)
    }
}

impl From<bool> for Requirement {
    fn from(b: bool) -> Self {
        Requirement::Equals(Value::Bool(b))
    }
}

impl From<&str> for Requirement {
    fn from(s: &str) -> Self {
        Requirement::Equals(Value::from(s))
    }
}

impl<const N: usize> From<[&str; N]> for Requirement {
    fn from(values: [&str; N]) -> Self {
        Requirement::any_of(values)
    }
}

impl From<Mask> for Requirement {
    fn from(mask: Mask) -> Self {
        Requirement::Satisfies(mask)
    }
}

/// A dependency as declared, before linking.
#[derive(Debug, Clone, PartialEq)]
pub struct DependencySpec {
    pub name: String,
    pub requirement: Requirement,
}

impl DependencySpec {
    pub fn new(name: impl Into<String>, requirement: impl Into<Requirement>) -> Self {
        Self {
            name: name.into(),
            requirement: requirement.into(),
        }
    }
}

/// A linked dependency.
#[derive(Debug, Clone, PartialEq)]
pub struct Dependency {
    target: ParamId,
    name: String,
    requirement: Requirement,
}

impl Dependency {
    pub(crate) fn new(target: ParamId, name: impl Into<String>, requirement: Requirement) -> Self {
        Self {
            target,
            name: name.into(),
            requirement,
        }
    }

    pub fn target(&self) -> ParamId {
        self.target
    }

    /// Name of the parameter depended upon
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn requirement(&self) -> &Requirement {
        &self.requirement
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.requirement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameter::entity::ParameterSpec;
    use crate::schema::{Category, Datatype};

    fn stations() -> Parameter {
        Parameter::new(
            ParameterSpec::new("NumberStations", Datatype::Integer, Category::Stations)
                .mask(Mask::Positive)
                .default_value(0),
        )
        .unwrap()
    }

    #[test]
    fn test_resolve_casts_declared_value() {
        let flag = Parameter::new(
            ParameterSpec::new("PARALLEL", Datatype::Flag, Category::Parallel).default_value(false),
        )
        .unwrap();
        let resolved = Requirement::from("T").resolve("PX", &flag).unwrap();
        assert_eq!(resolved, Requirement::Equals(Value::Bool(true)));
    }

    #[test]
    fn test_resolve_rejects_value_outside_target_domain() {
        let err = Requirement::from("maybe")
            .resolve("PX", &stations())
            .unwrap_err();
        assert!(matches!(
            err,
            SchemaError::InvalidDependencyValue { ref parameter, ref dependency, .. }
                if parameter == "PX" && dependency == "NumberStations"
        ));
    }

    #[test]
    fn test_mask_requirement_follows_effective_value() {
        let mut target = stations();
        let requirement = Requirement::Satisfies(Mask::PositiveDefinite);
        assert!(!requirement.is_met_by(&target));

        target.set_value(Value::Integer(3)).unwrap();
        assert!(requirement.is_met_by(&target));
    }

    #[test]
    fn test_defined_requires_assignment() {
        let mut target = stations();
        assert!(target.effective_value().is_some());
        assert!(!Requirement::Defined.is_met_by(&target));
        target.set_value(Value::Integer(0)).unwrap();
        assert!(Requirement::Defined.is_met_by(&target));
    }

    #[test]
    fn test_any_of_display() {
        let requirement = Requirement::from(["WK_IRR", "JON_2D"]);
        assert_eq!(requirement.to_string(), "in [WK_IRR, JON_2D]");
        assert_eq!(Requirement::from(true).to_string(), "= true");
    }
}
