//! Command handlers. Each translates parsed arguments into service calls and
//! prints the results; no synthesis logic lives here.

use std::path::Path;

use specimen_adapters::{LoadedCatalog, ManifestLoader};
use tracing::debug;

use crate::error::CliResult;

pub mod completions;
pub mod config;
pub mod render;
pub mod types;

/// Load the manifests both `render` and `types` start from.
fn load_catalog(manifest: &Path) -> CliResult<LoadedCatalog> {
    let catalog = ManifestLoader::new(manifest).load()?;
    debug!(
        types = catalog.registry.len(),
        hints = catalog.hints.len(),
        "catalog ready"
    );
    Ok(catalog)
}
