//! Local file system parameter store
//!
//! [`FileParameterStore`] implements [`ParameterStore`] on plain files and
//! adds the path-bound forms of the registry serializers:
//!
//! - [`FileParameterStore::from_json`]: catalog with a JSON file applied
//! - [`FileParameterStore::to_json`]: mapping written as JSON
//! - [`FileParameterStore::to_input`]: FUNWAVE-TVD driver file
//!
//! Every call opens, writes or reads, and closes its file before returning.

use funwave_application::{ParameterStore, StoreError};
use funwave_domain::{InputOptions, Mapping, MappingOptions, Registry, SerializationError, catalog};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Parameter store backed by the local file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileParameterStore;

impl FileParameterStore {
    pub fn new() -> Self {
        Self
    }

    /// FUNWAVE-TVD catalog with the JSON configuration at `path` applied.
    pub fn from_json(&self, path: &Path) -> Result<Registry, StoreError> {
        let mapping = self.load_mapping(path)?;
        Ok(catalog::from_dict(&mapping)?)
    }

    pub fn to_json(
        &self,
        registry: &Registry,
        path: &Path,
        options: &MappingOptions,
        pretty: bool,
    ) -> Result<(), StoreError> {
        let json = registry.to_json(options, pretty)?;
        self.write(path, &json)
    }

    pub fn to_input(
        &self,
        registry: &Registry,
        path: &Path,
        options: &InputOptions,
    ) -> Result<(), StoreError> {
        self.write(path, &registry.to_input_string(options))
    }
}

impl ParameterStore for FileParameterStore {
    fn load_mapping(&self, path: &Path) -> Result<Mapping, StoreError> {
        let contents = fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
        debug!("Read {} bytes from {}", contents.len(), path.display());

        match serde_json::from_str(&contents).map_err(SerializationError::from)? {
            serde_json::Value::Object(mapping) => Ok(mapping),
            _ => Err(SerializationError::UnexpectedShape {
                key: "<document>".to_string(),
                reason: format!("{} does not hold a JSON object", path.display()),
            }
            .into()),
        }
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), StoreError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }
        fs::write(path, contents).map_err(|e| StoreError::io(path, e))?;
        info!("Wrote {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use funwave_domain::Value;

    #[test]
    fn test_json_round_trip_through_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let store = FileParameterStore::new();

        let mut registry = catalog::input_file().unwrap();
        registry
            .set_values([("Mglob", Value::from(320)), ("DX", Value::from(0.5))])
            .unwrap();
        store
            .to_json(&registry, &path, &MappingOptions::full(), true)
            .unwrap();

        let restored = store.from_json(&path).unwrap();
        assert_eq!(restored.value("Mglob").unwrap(), Some(&Value::Integer(320)));
        assert_eq!(restored.value("DX").unwrap(), Some(&Value::Float(0.5)));
    }

    #[test]
    fn test_to_input_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run").join("input.txt");
        let store = FileParameterStore::new();

        let mut registry = catalog::input_file().unwrap();
        registry.set("Mglob", 320).unwrap();
        store
            .to_input(&registry, &path, &InputOptions::default())
            .unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, registry.to_input_string(&InputOptions::default()));
        assert!(text.lines().any(|line| line.starts_with("Mglob") && line.ends_with("= 320")));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = FileParameterStore::new().from_json(&path).unwrap_err();
        assert!(matches!(err, StoreError::Io { path: ref p, .. } if *p == path));
    }

    #[test]
    fn test_non_object_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.json");
        fs::write(&path, "[1, 2, 3]").unwrap();
        let err = FileParameterStore::new().load_mapping(&path).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Serialization(SerializationError::UnexpectedShape { .. })
        ));
    }
}
