//! Parameter entity

use super::dependency::{Dependency, DependencySpec, ParamId, Requirement};
use super::state::ParameterState;
use crate::core::error::{SchemaError, ValidationError};
use crate::core::value::Value;
use crate::registry::Registry;
use crate::schema::mask::{expected_legal_values, legal_values_match};
use crate::schema::{Category, Datatype, LegalValues, Mask, Validator, validator};

/// Declaration of a parameter (builder pattern).
///
/// ```
/// use funwave_domain::{Category, Datatype, Mask, Parameter, ParameterSpec};
///
/// let dx = Parameter::new(
///     ParameterSpec::new("DX", Datatype::Float, Category::Grid)
///         .required()
///         .mask(Mask::PositiveDefinite)
///         .description("Spatial resolution in the x direction"),
/// )
/// .unwrap();
/// assert!(dx.is_minimal());
/// ```
#[derive(Debug, Clone)]
pub struct ParameterSpec {
    name: String,
    full_name: Option<String>,
    datatype: Datatype,
    category: Category,
    is_required: bool,
    description: String,
    mask: Mask,
    legal_values: Option<LegalValues>,
    default_value: Option<Value>,
    dependencies: Vec<DependencySpec>,
}

impl ParameterSpec {
    pub fn new(name: impl Into<String>, datatype: Datatype, category: Category) -> Self {
        Self {
            name: name.into(),
            full_name: None,
            datatype,
            category,
            is_required: false,
            description: String::new(),
            mask: Mask::None,
            legal_values: None,
            default_value: None,
            dependencies: Vec::new(),
        }
    }

    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    pub fn required(mut self) -> Self {
        self.is_required = true;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn mask(mut self, mask: Mask) -> Self {
        self.mask = mask;
        self
    }

    /// `RANGE` mask with inclusive numeric bounds
    pub fn bounds(mut self, min: f64, max: f64) -> Self {
        self.mask = Mask::Range;
        self.legal_values = Some(LegalValues::bounds(min, max));
        self
    }

    /// `RANGE` mask with a list of legal tokens (for `ENUM`)
    pub fn tokens<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mask = Mask::Range;
        self.legal_values = Some(LegalValues::tokens(tokens));
        self
    }

    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn depends_on(mut self, name: impl Into<String>, requirement: impl Into<Requirement>) -> Self {
        self.dependencies.push(DependencySpec::new(name, requirement));
        self
    }
}

#[derive(Debug, Clone)]
enum Links {
    Pending(Vec<DependencySpec>),
    Linked(Vec<Dependency>),
}

/// One configuration field.
///
/// Descriptive attributes are fixed at construction. The only mutable part
/// is the assigned value, which is validated on every assignment.
#[derive(Debug, Clone)]
pub struct Parameter {
    name: String,
    full_name: String,
    datatype: Datatype,
    category: Category,
    is_required: bool,
    description: String,
    mask: Mask,
    legal_values: Option<LegalValues>,
    default_value: Option<Value>,
    links: Links,
    dependents: Vec<ParamId>,
    value: Option<Value>,
    validator: Validator,
}

impl Parameter {
    /// Build a parameter, validating its default value.
    pub fn new(spec: ParameterSpec) -> Result<Self, SchemaError> {
        let validator =
            validator(spec.datatype, spec.mask).ok_or_else(|| SchemaError::UnsupportedMask {
                parameter: spec.name.clone(),
                datatype: spec.datatype,
                mask: spec.mask,
            })?;

        if let Some(expected) = expected_legal_values(spec.datatype, spec.mask) {
            let matches = spec
                .legal_values
                .as_ref()
                .is_some_and(|legal| legal_values_match(spec.datatype, legal));
            if !matches {
                return Err(SchemaError::MissingLegalValues {
                    parameter: spec.name,
                    datatype: spec.datatype,
                    mask: spec.mask,
                    expected,
                });
            }
        }

        let mut parameter = Self {
            full_name: spec.full_name.unwrap_or_else(|| spec.name.clone()),
            name: spec.name,
            datatype: spec.datatype,
            category: spec.category,
            is_required: spec.is_required,
            description: spec.description,
            mask: spec.mask,
            legal_values: spec.legal_values,
            default_value: None,
            links: Links::Pending(spec.dependencies),
            dependents: Vec::new(),
            value: None,
            validator,
        };

        if let Some(default) = spec.default_value {
            let default = parameter
                .validate(&default)
                .map_err(|source| SchemaError::InvalidDefault {
                    parameter: parameter.name.clone(),
                    source,
                })?;
            parameter.default_value = Some(default);
        }

        Ok(parameter)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn datatype(&self) -> Datatype {
        self.datatype
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn is_required(&self) -> bool {
        self.is_required
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn mask(&self) -> Mask {
        self.mask
    }

    pub fn legal_values(&self) -> Option<&LegalValues> {
        self.legal_values.as_ref()
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    /// Assigned value, ignoring the default
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Assigned value, else the default
    pub fn effective_value(&self) -> Option<&Value> {
        self.value.as_ref().or(self.default_value.as_ref())
    }

    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    pub fn has_default_value(&self) -> bool {
        self.default_value.is_some()
    }

    /// Part of the minimal view: assigned, or required without a default.
    pub fn is_minimal(&self) -> bool {
        self.is_set() || (self.is_required && !self.has_default_value())
    }

    /// Compile-time flags are not written to the driver file.
    pub fn is_flag(&self) -> bool {
        self.datatype == Datatype::Flag
    }

    pub fn is_linked(&self) -> bool {
        matches!(self.links, Links::Linked(_))
    }

    /// Cast `raw` with this parameter's validator without storing it.
    pub fn validate(&self, raw: &Value) -> Result<Value, ValidationError> {
        (self.validator)(raw, self.legal_values.as_ref())
            .map_err(|reason| ValidationError::invalid(&self.name, raw, reason))
    }

    /// Validate and assign. On error the previous value is kept.
    pub fn set_value(&mut self, raw: impl Into<Value>) -> Result<(), ValidationError> {
        let value = self.validate(&raw.into())?;
        self.value = Some(value);
        Ok(())
    }

    /// Store a value that already went through [`Parameter::validate`].
    pub(crate) fn assign_validated(&mut self, value: Value) {
        self.value = Some(value);
    }

    /// Drop the assigned value, returning it
    pub fn clear_value(&mut self) -> Option<Value> {
        self.value.take()
    }

    /// Effective value in driver-file notation; empty when there is none.
    pub fn native_value(&self) -> String {
        self.effective_value()
            .map(|value| self.datatype.render(value))
            .unwrap_or_default()
    }

    /// Linked dependencies. Empty until the owning registry is linked.
    pub fn dependencies(&self) -> &[Dependency] {
        match &self.links {
            Links::Linked(links) => links,
            Links::Pending(_) => &[],
        }
    }

    /// Dependencies as `(name, requirement)` pairs, linked or not
    pub fn declared_dependencies(&self) -> Vec<(&str, &Requirement)> {
        match &self.links {
            Links::Pending(specs) => specs
                .iter()
                .map(|spec| (spec.name.as_str(), &spec.requirement))
                .collect(),
            Links::Linked(links) => links
                .iter()
                .map(|link| (link.name(), link.requirement()))
                .collect(),
        }
    }

    /// Parameters that declared a dependency on this one
    pub fn dependents(&self) -> &[ParamId] {
        &self.dependents
    }

    /// Resolve every pending dependency name through `lookup`.
    ///
    /// `lookup` must know this parameter too, otherwise it is being linked
    /// against a registry it was never added to.
    pub(crate) fn resolve_links<'r>(
        &self,
        lookup: impl Fn(&str) -> Option<(ParamId, &'r Parameter)>,
    ) -> Result<Vec<Dependency>, SchemaError> {
        let specs = match &self.links {
            Links::Pending(specs) => specs,
            Links::Linked(_) => {
                return Err(SchemaError::AlreadyLinked {
                    name: self.name.clone(),
                });
            }
        };

        if lookup(self.name.as_str()).is_none() {
            return Err(SchemaError::ForeignParameter {
                name: self.name.clone(),
            });
        }

        specs
            .iter()
            .map(|spec| {
                if spec.name == self.name {
                    return Err(SchemaError::SelfDependency {
                        parameter: self.name.clone(),
                    });
                }
                let (id, target) =
                    lookup(spec.name.as_str()).ok_or_else(|| SchemaError::UnknownDependency {
                        parameter: self.name.clone(),
                        dependency: spec.name.clone(),
                    })?;
                let requirement = spec.requirement.resolve(&self.name, target)?;
                Ok(Dependency::new(id, target.name(), requirement))
            })
            .collect()
    }

    /// Replace the pending specs with resolved links. One shot.
    pub(crate) fn attach_links(&mut self, links: Vec<Dependency>) -> Result<(), SchemaError> {
        if self.is_linked() {
            return Err(SchemaError::AlreadyLinked {
                name: self.name.clone(),
            });
        }
        self.links = Links::Linked(links);
        Ok(())
    }

    pub(crate) fn add_dependent(&mut self, dependent: ParamId) {
        if !self.dependents.contains(&dependent) {
            self.dependents.push(dependent);
        }
    }

    /// No dependencies, or at least one of them met.
    pub fn is_applicable(&self, registry: &Registry) -> bool {
        let links = self.dependencies();
        links.is_empty()
            || links
                .iter()
                .any(|link| link.requirement().is_met_by(registry.parameter(link.target())))
    }

    /// Current state, following the precedence `ERROR > WARNING > VALID`.
    pub fn state(&self, registry: &Registry) -> ParameterState {
        let requirement = if self.is_required && !self.is_set() && !self.has_default_value() {
            ParameterState::error(format!(
                "{} does not have a default value and requires a value",
                self.name
            ))
        } else {
            ParameterState::valid()
        };

        let dependency = if self.is_set() && !self.is_applicable(registry) {
            let wanted: Vec<String> = self.dependencies().iter().map(|d| d.to_string()).collect();
            let wanted = match wanted.as_slice() {
                [single] => single.clone(),
                many => format!("one of: {}", many.join(", ")),
            };
            ParameterState::warning(format!(
                "{} has a value assigned, but requires {}",
                self.name, wanted
            ))
        } else {
            ParameterState::valid()
        };

        requirement.merge(dependency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dx() -> Parameter {
        Parameter::new(
            ParameterSpec::new("DX", Datatype::Float, Category::Grid)
                .required()
                .mask(Mask::PositiveDefinite),
        )
        .unwrap()
    }

    #[test]
    fn test_full_name_defaults_to_name() {
        assert_eq!(dx().full_name(), "DX");
        let named = Parameter::new(
            ParameterSpec::new("CFL", Datatype::Float, Category::Numerics)
                .full_name("Courant number")
                .mask(Mask::PositiveDefinite)
                .default_value(0.5),
        )
        .unwrap();
        assert_eq!(named.full_name(), "Courant number");
    }

    #[test]
    fn test_default_is_cast_at_construction() {
        let param = Parameter::new(
            ParameterSpec::new("DISPERSION", Datatype::Bool, Category::Physics).default_value("T"),
        )
        .unwrap();
        assert_eq!(param.default_value(), Some(&Value::Bool(true)));
        assert_eq!(param.effective_value(), Some(&Value::Bool(true)));
        assert!(!param.is_set());
    }

    #[test]
    fn test_invalid_default_is_schema_error() {
        let err = Parameter::new(
            ParameterSpec::new("CFL", Datatype::Float, Category::Numerics)
                .mask(Mask::PositiveDefinite)
                .default_value(-0.5),
        )
        .unwrap_err();
        assert!(matches!(err, SchemaError::InvalidDefault { ref parameter, .. } if parameter == "CFL"));
    }

    #[test]
    fn test_unsupported_mask_is_schema_error() {
        let err = Parameter::new(
            ParameterSpec::new("TITLE", Datatype::String, Category::General)
                .mask(Mask::Positive),
        )
        .unwrap_err();
        assert!(matches!(err, SchemaError::UnsupportedMask { .. }));
    }

    #[test]
    fn test_range_without_legal_values_is_schema_error() {
        let err = Parameter::new(
            ParameterSpec::new("Lat_South", Datatype::Float, Category::Grid).mask(Mask::Range),
        )
        .unwrap_err();
        assert!(matches!(err, SchemaError::MissingLegalValues { .. }));

        let err = Parameter::new(
            ParameterSpec::new("DEPTH_TYPE", Datatype::Enum, Category::Bathymetry)
                .bounds(0.0, 1.0),
        )
        .unwrap_err();
        assert!(matches!(err, SchemaError::MissingLegalValues { .. }));
    }

    #[test]
    fn test_rejected_assignment_keeps_previous_value() {
        let mut param = dx();
        param.set_value(0.5).unwrap();

        let err = param.set_value(-1.0).unwrap_err();
        assert_eq!(err.name(), "DX");
        assert_eq!(param.value(), Some(&Value::Float(0.5)));
    }

    #[test]
    fn test_is_minimal() {
        let mut param = dx();
        assert!(param.is_minimal());
        param.set_value("0.25").unwrap();
        assert!(param.is_minimal());

        let optional = Parameter::new(
            ParameterSpec::new("CFL", Datatype::Float, Category::Numerics)
                .mask(Mask::PositiveDefinite)
                .default_value(0.5),
        )
        .unwrap();
        assert!(!optional.is_minimal());
    }

    #[test]
    fn test_clear_value_falls_back_to_default() {
        let mut param = Parameter::new(
            ParameterSpec::new("CFL", Datatype::Float, Category::Numerics)
                .mask(Mask::PositiveDefinite)
                .default_value(0.5),
        )
        .unwrap();
        param.set_value(0.3).unwrap();
        assert_eq!(param.clear_value(), Some(Value::Float(0.3)));
        assert_eq!(param.effective_value(), Some(&Value::Float(0.5)));
    }

    #[test]
    fn test_native_value() {
        let mut param = dx();
        assert_eq!(param.native_value(), "");
        param.set_value(2).unwrap();
        assert_eq!(param.native_value(), "2.000000");
    }

    #[test]
    fn test_declared_dependencies_before_linking() {
        let param = Parameter::new(
            ParameterSpec::new("PX", Datatype::Integer, Category::Parallel)
                .mask(Mask::PositiveDefinite)
                .default_value(1)
                .depends_on("PARALLEL", true),
        )
        .unwrap();
        assert!(!param.is_linked());
        assert!(param.dependencies().is_empty());
        let declared = param.declared_dependencies();
        assert_eq!(declared.len(), 1);
        assert_eq!(declared[0].0, "PARALLEL");
    }
}
