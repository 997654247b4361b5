//! Parameter store port
//!
//! Defines how use cases read configuration mappings and write rendered
//! documents. Each call opens, reads or writes, and closes its file.

use funwave_domain::{DomainError, Mapping, SchemaError, SerializationError};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised by a [`ParameterStore`].
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Serialization(#[from] SerializationError),

    #[error(transparent)]
    Schema(#[from] SchemaError),
}

impl StoreError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<DomainError> for StoreError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Schema(e) => Self::Schema(e),
            DomainError::Serialization(e) => Self::Serialization(e),
            DomainError::Validation(e) => Self::Serialization(e.into()),
        }
    }
}

/// Storage for parameter documents
///
/// This port defines how the application layer reaches JSON configuration
/// files and driver files.
pub trait ParameterStore: Send + Sync {
    /// Read a JSON object document.
    fn load_mapping(&self, path: &Path) -> Result<Mapping, StoreError>;

    /// Write `contents`, replacing whatever was at `path`.
    fn write(&self, path: &Path, contents: &str) -> Result<(), StoreError>;
}

#[cfg(test)]
pub(crate) mod memory {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory store used by the use case tests.
    #[derive(Default)]
    pub(crate) struct MemoryStore {
        files: Mutex<HashMap<PathBuf, String>>,
    }

    impl MemoryStore {
        pub(crate) fn with_file(self, path: &str, contents: &str) -> Self {
            self.files
                .lock()
                .unwrap()
                .insert(PathBuf::from(path), contents.to_string());
            self
        }

        pub(crate) fn file(&self, path: &str) -> Option<String> {
            self.files.lock().unwrap().get(Path::new(path)).cloned()
        }
    }

    impl ParameterStore for MemoryStore {
        fn load_mapping(&self, path: &Path) -> Result<Mapping, StoreError> {
            let files = self.files.lock().unwrap();
            let contents = files.get(path).ok_or_else(|| {
                StoreError::io(path, std::io::Error::from(std::io::ErrorKind::NotFound))
            })?;
            let document: serde_json::Value =
                serde_json::from_str(contents).map_err(SerializationError::from)?;
            match document {
                serde_json::Value::Object(mapping) => Ok(mapping),
                _ => Err(SerializationError::UnexpectedShape {
                    key: "<document>".to_string(),
                    reason: "expected a JSON object".to_string(),
                }
                .into()),
            }
        }

        fn write(&self, path: &Path, contents: &str) -> Result<(), StoreError> {
            self.files
                .lock()
                .unwrap()
                .insert(path.to_path_buf(), contents.to_string());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use funwave_domain::ValidationError;

    #[test]
    fn test_validation_error_becomes_serialization() {
        let err: StoreError = DomainError::from(ValidationError::invalid("DX", -1, "must be > 0")).into();
        assert!(matches!(
            err,
            StoreError::Serialization(SerializationError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_io_error_names_path() {
        let err = StoreError::io(
            "run/config.json",
            std::io::Error::from(std::io::ErrorKind::NotFound),
        );
        assert!(err.to_string().starts_with("run/config.json: "));
    }
}
