//! Shared helpers for use cases.

use crate::ports::parameter_store::{ParameterStore, StoreError};
use funwave_domain::{Registry, catalog};
use std::path::Path;
use tracing::{debug, info};

/// Build the FUNWAVE-TVD catalog, with the mapping at `source` applied when
/// given.
pub(crate) fn load_registry(
    store: &dyn ParameterStore,
    source: Option<&Path>,
) -> Result<Registry, StoreError> {
    let registry = catalog::input_file()?;
    let Some(path) = source else {
        debug!("Using an empty FUNWAVE-TVD configuration");
        return Ok(registry);
    };

    let mapping = store.load_mapping(path)?;
    info!("Loaded {} entries from {}", mapping.len(), path.display());
    Ok(registry.with_dict(&mapping)?)
}
