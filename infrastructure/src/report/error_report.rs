//! JSON error report
//!
//! A failed run leaves `error.json` in the requested directory so batch
//! drivers can pick up what went wrong:
//!
//! ```json
//! {
//!   "message": "invalid value '-1' for parameter 'DX': must be > 0",
//!   "type": "StoreError",
//!   "chain": []
//! }
//! ```

use funwave_application::StoreError;
use serde::Serialize;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const ERROR_REPORT_FILE: &str = "error.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    pub message: String,
    /// Short name of the failing error type
    #[serde(rename = "type")]
    pub kind: String,
    /// Messages of the underlying causes, outermost first
    pub chain: Vec<String>,
}

impl ErrorReport {
    pub fn new(kind: impl Into<String>, error: &(dyn Error + 'static)) -> Self {
        let mut chain = Vec::new();
        let mut source = error.source();
        while let Some(cause) = source {
            chain.push(cause.to_string());
            source = cause.source();
        }
        Self {
            message: error.to_string(),
            kind: kind.into(),
            chain,
        }
    }

    /// Write `error.json` into `dir`, creating it if needed.
    pub fn write_to_dir(&self, dir: &Path) -> Result<PathBuf, StoreError> {
        fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, e))?;
        let path = dir.join(ERROR_REPORT_FILE);
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| StoreError::Serialization(e.into()))?;
        fs::write(&path, json).map_err(|e| StoreError::io(&path, e))?;
        info!("Wrote error report to {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_lists_sources() {
        let err = StoreError::io(
            "config.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        let report = ErrorReport::new("StoreError", &err);
        assert_eq!(report.message, "config.json: no such file");
        assert_eq!(report.chain, vec!["no such file".to_string()]);
    }

    #[test]
    fn test_written_report_uses_type_key() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("reports");
        let err = std::io::Error::other("disk full");

        let path = ErrorReport::new("Unexpected", &err)
            .write_to_dir(&target)
            .unwrap();
        assert_eq!(path, target.join(ERROR_REPORT_FILE));

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["type"], "Unexpected");
        assert_eq!(json["message"], "disk full");
        assert_eq!(json["chain"], serde_json::json!([]));
    }
}
