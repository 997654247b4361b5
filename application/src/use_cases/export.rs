//! Export use case
//!
//! Re-emits a configuration as JSON in any of the mapping shapes (flat,
//! grouped, detailed). Without a source it exports the untouched catalog,
//! which is how configuration templates are produced.

use crate::config::ExportParams;
use crate::ports::parameter_store::{ParameterStore, StoreError};
use crate::use_cases::shared::load_registry;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Input for the Export use case.
#[derive(Debug, Clone, Default)]
pub struct ExportInput {
    /// Configuration to re-export; `None` exports the catalog defaults.
    pub source: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub params: ExportParams,
}

impl ExportInput {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: Some(source.into()),
            ..Self::default()
        }
    }

    /// Export a fresh catalog.
    pub fn template() -> Self {
        Self::default()
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_params(mut self, params: ExportParams) -> Self {
        self.params = params;
        self
    }
}

/// Output from the Export use case.
#[derive(Debug, Clone)]
pub struct ExportOutput {
    pub json: String,
    /// Number of top-level entries in the document.
    pub entries: usize,
    pub written_to: Option<PathBuf>,
}

/// Use case for exporting a configuration as JSON
pub struct ExportUseCase {
    store: Arc<dyn ParameterStore>,
}

impl ExportUseCase {
    pub fn new(store: Arc<dyn ParameterStore>) -> Self {
        Self { store }
    }

    pub fn execute(&self, input: ExportInput) -> Result<ExportOutput, ExportError> {
        let registry = load_registry(self.store.as_ref(), input.source.as_deref())?;
        let options = input.params.mapping_options();

        let entries = registry.to_dict(&options).len();
        let json = registry
            .to_json(&options, input.params.pretty)
            .map_err(StoreError::from)?;

        let written_to = match input.output {
            Some(path) => {
                self.store.write(&path, &json)?;
                info!("Exported {} entries to {}", entries, path.display());
                Some(path)
            }
            None => None,
        };

        Ok(ExportOutput {
            json,
            entries,
            written_to,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::parameter_store::memory::MemoryStore;

    #[test]
    fn test_template_is_minimal_catalog() {
        let store = Arc::new(MemoryStore::default());
        let output = ExportUseCase::new(store.clone())
            .execute(
                ExportInput::template()
                    .with_output("template.json")
                    .with_params(ExportParams::default().with_minimal(true).with_pretty(false)),
            )
            .unwrap();

        let document: serde_json::Value = serde_json::from_str(&output.json).unwrap();
        let object = document.as_object().unwrap();
        assert_eq!(object.len(), output.entries);
        assert_eq!(object.get("DX"), Some(&serde_json::Value::Null));
        assert_eq!(store.file("template.json"), Some(output.json));
    }

    #[test]
    fn test_grouped_export_round_trips() {
        let store = Arc::new(
            MemoryStore::default()
                .with_file("run.json", r#"{"Mglob": 64, "DX": 0.5, "PERIODIC": true}"#),
        );
        let use_case = ExportUseCase::new(store.clone());
        use_case
            .execute(
                ExportInput::new("run.json")
                    .with_output("grouped.json")
                    .with_params(ExportParams::default().with_grouped(true)),
            )
            .unwrap();

        let grouped: serde_json::Value =
            serde_json::from_str(&store.file("grouped.json").unwrap()).unwrap();
        assert_eq!(grouped["GRID"]["Mglob"], 64);
        assert_eq!(grouped["PERIODIC"]["PERIODIC"], true);

        let flat = use_case.execute(ExportInput::new("grouped.json")).unwrap();
        let flat: serde_json::Value = serde_json::from_str(&flat.json).unwrap();
        assert_eq!(flat["DX"], 0.5);
        assert_eq!(flat["PERIODIC"], true);
    }

    #[test]
    fn test_detailed_export_carries_metadata() {
        let store = Arc::new(MemoryStore::default());
        let output = ExportUseCase::new(store)
            .execute(ExportInput::template().with_params(ExportParams::default().with_detailed(true)))
            .unwrap();
        let document: serde_json::Value = serde_json::from_str(&output.json).unwrap();
        assert_eq!(document["DX"]["datatype"], "FLOAT");
        assert_eq!(document["DX"]["category"], "GRID");
        assert_eq!(document["DX"]["value"], serde_json::Value::Null);
    }
}
