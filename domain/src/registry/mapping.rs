//! Name → value mappings and JSON documents.
//!
//! A mapping is written flat (`{"DX": 1.0}`), grouped by category
//! (`{"GRID": {"DX": 1.0}}`) and optionally detailed, where every value is
//! replaced by an object describing the parameter. Reading accepts all of
//! these shapes back.

use super::Registry;
use crate::core::error::SerializationError;
use crate::core::value::Value;
use crate::parameter::dependency::{ParamId, Requirement};
use crate::parameter::entity::Parameter;
use crate::schema::{Category, Datatype, LegalValues, Mask};
use serde::Serialize;
use serde_json::json;

/// JSON object preserving insertion order
pub type Mapping = serde_json::Map<String, serde_json::Value>;

/// Options for [`Registry::to_dict`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingOptions {
    pub is_minimal: bool,
    /// Nest parameters under their category name
    pub is_grouped: bool,
    /// Describe each parameter instead of only giving its value
    pub is_detailed: bool,
    /// Non-essential categories to include even when untouched
    pub modules: Vec<Category>,
}

impl Default for MappingOptions {
    fn default() -> Self {
        Self {
            is_minimal: true,
            is_grouped: false,
            is_detailed: false,
            modules: Vec::new(),
        }
    }
}

impl MappingOptions {
    pub fn minimal() -> Self {
        Self::default()
    }

    pub fn full() -> Self {
        Self {
            is_minimal: false,
            ..Self::default()
        }
    }

    pub fn grouped(mut self) -> Self {
        self.is_grouped = true;
        self
    }

    pub fn detailed(mut self) -> Self {
        self.is_detailed = true;
        self
    }

    pub fn with_modules(mut self, modules: impl IntoIterator<Item = Category>) -> Self {
        self.modules = modules.into_iter().collect();
        self
    }
}

/// Detailed description of one parameter.
#[derive(Debug, Serialize)]
pub struct ParameterDetail<'a> {
    pub name: &'a str,
    pub full_name: &'a str,
    pub datatype: Datatype,
    pub category: Category,
    pub is_required: bool,
    pub description: &'a str,
    pub mask: Mask,
    pub legal_values: Option<&'a LegalValues>,
    pub default_value: Option<&'a Value>,
    pub dependencies: Vec<DependencyDetail<'a>>,
    pub value: Option<&'a Value>,
}

#[derive(Debug, Serialize)]
pub struct DependencyDetail<'a> {
    pub name: &'a str,
    pub requirement: &'a Requirement,
}

impl<'a> From<&'a Parameter> for ParameterDetail<'a> {
    fn from(param: &'a Parameter) -> Self {
        Self {
            name: param.name(),
            full_name: param.full_name(),
            datatype: param.datatype(),
            category: param.category(),
            is_required: param.is_required(),
            description: param.description(),
            mask: param.mask(),
            legal_values: param.legal_values(),
            default_value: param.default_value(),
            dependencies: param
                .declared_dependencies()
                .into_iter()
                .map(|(name, requirement)| DependencyDetail { name, requirement })
                .collect(),
            value: param.effective_value(),
        }
    }
}

/// Key of a detailed object that carries the value
const VALUE_KEY: &str = "value";

/// Keys that tell a detailed object apart from a category group
const DETAIL_KEYS: [&str; 2] = ["datatype", VALUE_KEY];

impl Registry {
    /// Mapping of the filtered parameters to their effective values
    /// (`null` when there is none).
    pub fn to_dict(&self, options: &MappingOptions) -> Mapping {
        let mut mapping = Mapping::new();
        for (category, param) in self.filter_grouped(options.is_minimal, &options.modules) {
            let entry = if options.is_detailed {
                describe(param)
            } else {
                param
                    .effective_value()
                    .map(Value::to_json)
                    .unwrap_or(serde_json::Value::Null)
            };

            if options.is_grouped {
                let group = mapping
                    .entry(category.as_str())
                    .or_insert_with(|| json!({}));
                if let serde_json::Value::Object(group) = group {
                    group.insert(param.name().to_string(), entry);
                }
            } else {
                mapping.insert(param.name().to_string(), entry);
            }
        }
        mapping
    }

    pub fn to_json(&self, options: &MappingOptions, pretty: bool) -> Result<String, SerializationError> {
        let mapping = serde_json::Value::Object(self.to_dict(options));
        let json = if pretty {
            serde_json::to_string_pretty(&mapping)?
        } else {
            serde_json::to_string(&mapping)?
        };
        Ok(json)
    }

    /// Assign every value of `mapping`.
    ///
    /// Flat, grouped and detailed mappings are accepted; `null` unassigns.
    /// All values are validated before the first one is stored, so a failing
    /// mapping leaves the registry untouched.
    pub fn apply_dict(&mut self, mapping: &Mapping) -> Result<(), SerializationError> {
        let entries = if is_grouped(mapping) {
            let mut entries = Vec::new();
            for (group, params) in mapping {
                if let serde_json::Value::Object(params) = params {
                    entries.extend(params.iter().map(|(name, value)| (name.as_str(), value)));
                } else {
                    return Err(SerializationError::UnexpectedShape {
                        key: group.clone(),
                        reason: "expected an object of parameters".to_string(),
                    });
                }
            }
            entries
        } else {
            mapping
                .iter()
                .map(|(name, value)| (name.as_str(), value))
                .collect()
        };

        let staged = entries
            .into_iter()
            .map(|(name, json)| self.stage(name, json))
            .collect::<Result<Vec<_>, _>>()?;
        self.assign(staged);
        Ok(())
    }

    /// Parse a JSON object and apply it with [`Registry::apply_dict`].
    pub fn apply_json(&mut self, json: &str) -> Result<(), SerializationError> {
        match serde_json::from_str::<serde_json::Value>(json)? {
            serde_json::Value::Object(mapping) => self.apply_dict(&mapping),
            other => Err(SerializationError::UnexpectedShape {
                key: "<document>".to_string(),
                reason: format!("expected a JSON object, got {}", json_kind(&other)),
            }),
        }
    }

    /// Consuming form of [`Registry::apply_dict`]
    pub fn with_dict(mut self, mapping: &Mapping) -> Result<Self, SerializationError> {
        self.apply_dict(mapping)?;
        Ok(self)
    }

    fn stage(
        &self,
        name: &str,
        json: &serde_json::Value,
    ) -> Result<(ParamId, Option<Value>), SerializationError> {
        let id = self.id(name).ok_or_else(|| SerializationError::UnknownParameter {
            name: name.to_string(),
        })?;

        let json = match json {
            serde_json::Value::Object(detail) if is_detail(detail) => &detail[VALUE_KEY],
            other => other,
        };
        let raw = Value::from_json(json).map_err(|reason| SerializationError::UnexpectedShape {
            key: name.to_string(),
            reason: reason.to_string(),
        })?;

        let value = match raw {
            Some(raw) => Some(self.parameter(id).validate(&raw)?),
            None => None,
        };
        Ok((id, value))
    }
}

fn describe(param: &Parameter) -> serde_json::Value {
    // ParameterDetail only holds plain data and string-keyed maps.
    serde_json::to_value(ParameterDetail::from(param)).unwrap_or(serde_json::Value::Null)
}

fn is_detail(object: &Mapping) -> bool {
    DETAIL_KEYS.iter().all(|key| object.contains_key(*key))
}

/// Every key names a category and every value is an object of parameters.
fn is_grouped(mapping: &Mapping) -> bool {
    !mapping.is_empty()
        && mapping.iter().all(|(key, value)| {
            key.parse::<Category>().is_ok()
                && matches!(value, serde_json::Value::Object(inner) if !is_detail(inner))
        })
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
