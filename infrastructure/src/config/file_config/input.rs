//! Driver-file rendering configuration from TOML (`[input]` section)

use super::parse_modules;
use crate::config::issue::{ConfigIssue, ConfigIssueCode, Severity};
use funwave_application::RenderParams;
use funwave_domain::Category;
use funwave_domain::registry::native::{DEFAULT_BANNER_CHAR, DEFAULT_WIDTH};
use serde::{Deserialize, Serialize};

/// Raw rendering configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileInputConfig {
    /// Only the parameters that must be set
    pub minimal: bool,
    /// Banner width, not counting the leading `# `
    pub width: usize,
    /// Single fill character of the banners
    pub banner_char: String,
    /// Append descriptions as a trailing comment column
    pub with_desc: bool,
    /// Optional categories to always include
    pub modules: Vec<String>,
    /// Refuse to render configurations with errors
    pub strict: bool,
}

impl Default for FileInputConfig {
    fn default() -> Self {
        Self {
            minimal: true,
            width: DEFAULT_WIDTH,
            banner_char: DEFAULT_BANNER_CHAR.to_string(),
            with_desc: false,
            modules: Vec::new(),
            strict: false,
        }
    }
}

impl FileInputConfig {
    /// Smallest width that still leaves fill around every category title.
    pub fn minimum_width() -> usize {
        Category::ALL
            .iter()
            .map(|c| c.as_str().len() + 4)
            .max()
            .unwrap_or(DEFAULT_WIDTH)
    }

    pub fn parse_banner_char(&self) -> (char, Vec<ConfigIssue>) {
        let mut chars = self.banner_char.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => (c, Vec::new()),
            _ => (
                DEFAULT_BANNER_CHAR,
                vec![ConfigIssue {
                    severity: Severity::Error,
                    code: ConfigIssueCode::InvalidBannerChar {
                        value: self.banner_char.clone(),
                    },
                    message: format!(
                        "input.banner_char: expected a single character, got '{}'",
                        self.banner_char
                    ),
                }],
            ),
        }
    }

    pub fn to_render_params(&self) -> (RenderParams, Vec<ConfigIssue>) {
        let (banner_char, mut issues) = self.parse_banner_char();
        let (modules, module_issues) = parse_modules("input.modules", &self.modules);
        issues.extend(module_issues);

        let minimum = Self::minimum_width();
        if self.width < minimum {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::WidthTooSmall {
                    width: self.width,
                    minimum,
                },
                message: format!(
                    "input.width: {} leaves some banner titles without fill (minimum {})",
                    self.width, minimum
                ),
            });
        }

        let params = RenderParams::default()
            .with_minimal(self.minimal)
            .with_modules(modules)
            .with_desc(self.with_desc)
            .with_width(self.width)
            .with_banner_char(banner_char)
            .with_strict(self.strict);
        (params, issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_render_params() {
        let (params, issues) = FileInputConfig::default().to_render_params();
        assert!(issues.is_empty());
        assert_eq!(params, RenderParams::default());
    }

    #[test]
    fn test_multi_character_banner_is_an_error() {
        let config = FileInputConfig {
            banner_char: "=-".to_string(),
            ..Default::default()
        };
        let (params, issues) = config.to_render_params();
        assert_eq!(params.banner_char, DEFAULT_BANNER_CHAR);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
    }

    #[test]
    fn test_narrow_width_is_a_warning() {
        let config = FileInputConfig {
            width: 10,
            ..Default::default()
        };
        let (params, issues) = config.to_render_params();
        assert_eq!(params.width, 10);
        assert!(matches!(
            issues[0].code,
            ConfigIssueCode::WidthTooSmall { width: 10, .. }
        ));
        assert_eq!(issues[0].severity, Severity::Warning);
    }

    #[test]
    fn test_section_deserialize() {
        let toml_str = r#"
[input]
banner_char = "*"
strict = true
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        let (params, issues) = config.input.to_render_params();
        assert!(issues.is_empty());
        assert_eq!(params.banner_char, '*');
        assert!(params.strict);
    }
}
