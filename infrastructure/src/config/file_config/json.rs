//! Mapping/JSON export configuration from TOML (`[json]` section)

use super::parse_modules;
use crate::config::issue::ConfigIssue;
use funwave_application::ExportParams;
use serde::{Deserialize, Serialize};

/// Raw export configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileJsonConfig {
    pub minimal: bool,
    /// Nest parameters under their category
    pub grouped: bool,
    /// Emit parameter metadata next to each value
    pub detailed: bool,
    pub modules: Vec<String>,
    pub pretty: bool,
}

impl Default for FileJsonConfig {
    fn default() -> Self {
        Self {
            minimal: false,
            grouped: false,
            detailed: false,
            modules: Vec::new(),
            pretty: true,
        }
    }
}

impl FileJsonConfig {
    pub fn to_export_params(&self) -> (ExportParams, Vec<ConfigIssue>) {
        let (modules, issues) = parse_modules("json.modules", &self.modules);
        let params = ExportParams::default()
            .with_minimal(self.minimal)
            .with_grouped(self.grouped)
            .with_detailed(self.detailed)
            .with_modules(modules)
            .with_pretty(self.pretty);
        (params, issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_export_params() {
        let (params, issues) = FileJsonConfig::default().to_export_params();
        assert!(issues.is_empty());
        assert_eq!(params, ExportParams::default());
    }

    #[test]
    fn test_unknown_module_is_skipped() {
        let config = FileJsonConfig {
            modules: vec!["STATIONS".to_string(), "NOPE".to_string()],
            ..Default::default()
        };
        let (params, issues) = config.to_export_params();
        assert_eq!(params.modules, vec![funwave_domain::Category::Stations]);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("'NOPE'"));
    }
}
