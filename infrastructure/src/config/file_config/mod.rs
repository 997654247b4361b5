//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Category names stay strings here so a typo becomes a [`ConfigIssue`]
//! instead of a parse failure.

mod input;
mod json;

pub use input::FileInputConfig;
pub use json::FileJsonConfig;

use super::issue::{ConfigIssue, ConfigIssueCode, Severity};
use funwave_domain::Category;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Driver-file rendering
    pub input: FileInputConfig,
    /// Mapping/JSON export
    pub json: FileJsonConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.input.to_render_params().1);
        issues.extend(self.json.to_export_params().1);
        issues
    }
}

/// Parse category names, skipping (and reporting) the unknown ones.
pub(crate) fn parse_modules(field: &str, names: &[String]) -> (Vec<Category>, Vec<ConfigIssue>) {
    let mut modules = Vec::new();
    let mut issues = Vec::new();
    for name in names {
        match name.parse::<Category>() {
            Ok(category) => modules.push(category),
            Err(_) => issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::UnknownModule {
                    field: field.to_string(),
                    value: name.clone(),
                },
                message: format!("{field}: unknown category '{name}', ignoring it"),
            }),
        }
    }
    (modules, issues)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[input]
minimal = false
width = 60
banner_char = "="
with_desc = true
modules = ["SPONGE_LAYER", "wave_maker"]

[json]
grouped = true
pretty = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(!config.input.minimal);
        assert_eq!(config.input.width, 60);
        assert_eq!(config.input.banner_char, "=");
        assert!(config.input.with_desc);
        assert!(config.json.grouped);
        assert!(!config.json.pretty);
        assert!(config.validate().is_empty());

        let (params, _) = config.input.to_render_params();
        assert_eq!(params.modules, vec![Category::SpongeLayer, Category::WaveMaker]);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[input]
width = 50
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.input.width, 50);
        // Defaults should apply
        assert!(config.input.minimal);
        assert_eq!(config.input.banner_char, "-");
        assert_eq!(config.json, FileJsonConfig::default());
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_collects_from_both_sections() {
        let mut config = FileConfig::default();
        config.input.modules = vec!["SPONGE".to_string()];
        config.json.modules = vec!["TIDE".to_string()];

        let issues = config.validate();
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.severity == Severity::Warning));
        assert_eq!(
            issues[1].code,
            ConfigIssueCode::UnknownModule {
                field: "json.modules".to_string(),
                value: "TIDE".to_string(),
            }
        );
    }
}
