//! Filesystem manifest loader.
//!
//! Accepts either a single manifest file or a directory. Directories are
//! walked recursively in file-name order; every `*.toml` and `*.json` file is
//! treated as a manifest. A directory file that cannot be read, parsed or
//! converted emits a `WARN` log and is skipped; the others still load. A
//! single file given directly must load.

use std::{
    fs,
    path::{Path, PathBuf},
};

use specimen_core::{
    application::ApplicationError,
    domain::TypeRegistry,
    error::{SpecimenError, SpecimenResult},
};
use tracing::{debug, error, info, instrument, warn};
use walkdir::WalkDir;

use super::manifest::{ManifestFile, ManifestFormat, ManifestParts};
use crate::hints::SideTableHints;

/// Everything read from a set of manifests.
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    /// Built-in scalars and containers plus every manifest type.
    pub registry: TypeRegistry,
    /// Entries from `[[hints]]` sections.
    pub hints: SideTableHints,
}

/// Loads manifests into a [`TypeRegistry`].
///
/// # Example
///
/// ```no_run
/// use specimen_adapters::ManifestLoader;
///
/// let catalog = ManifestLoader::new("./types").load()?;
/// println!("Loaded {} types", catalog.registry.len());
/// # Ok::<(), specimen_core::error::SpecimenError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ManifestLoader {
    root: PathBuf,
}

impl ManifestLoader {
    /// The path does not need to exist until [`load`](Self::load) is called.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load every manifest under the root.
    ///
    /// # Errors
    ///
    /// - the root does not exist
    /// - the root is a file that cannot be loaded
    /// - two manifests define the same type differently
    /// - an `extends` chain loops
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn load(&self) -> SpecimenResult<LoadedCatalog> {
        if !self.root.exists() {
            return Err(manifest_error(&self.root, "path does not exist").into());
        }

        let manifests = if self.root.is_dir() {
            self.discover()
        } else {
            vec![(self.root.clone(), load_file(&self.root)?)]
        };

        let mut registry = TypeRegistry::with_builtins();
        let builtins = registry.len();
        let hints = SideTableHints::new();

        for (path, parts) in manifests {
            debug!(
                path = %path.display(),
                types = parts.types.len(),
                hints = parts.hints.len(),
                "applying manifest"
            );
            for descriptor in parts.types {
                registry.insert(descriptor).map_err(|e| {
                    error!(path = %path.display(), error = %e, "conflicting type definition");
                    SpecimenError::from(e)
                })?;
            }
            for (declaring, field, hint) in parts.hints {
                hints.insert(declaring, field, hint);
            }
        }

        registry.validate()?;
        for missing in registry.dangling_references() {
            warn!(type_name = %missing, "referenced type has no descriptor");
        }

        info!(
            types = registry.len() - builtins,
            hints = hints.len(),
            "manifests loaded"
        );
        Ok(LoadedCatalog { registry, hints })
    }

    /// Collect the loadable manifests of a directory tree.
    fn discover(&self) -> Vec<(PathBuf, ManifestParts)> {
        let mut manifests = Vec::new();

        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "skipping unreadable directory entry");
                    continue;
                }
            };
            let path = entry.path();
            if !entry.file_type().is_file() || ManifestFormat::from_path(path).is_none() {
                continue;
            }

            match load_file(path) {
                Ok(parts) => manifests.push((path.to_path_buf(), parts)),
                Err(e) => {
                    // One bad manifest must not block the others.
                    warn!(
                        path  = %path.display(),
                        error = %e,
                        "skipping manifest due to load error"
                    );
                }
            }
        }

        if manifests.is_empty() {
            warn!(root = %self.root.display(), "no manifests found");
        }
        manifests
    }
}

/// Read, parse and convert one manifest file.
fn load_file(path: &Path) -> Result<ManifestParts, ApplicationError> {
    let format = ManifestFormat::from_path(path)
        .ok_or_else(|| manifest_error(path, "expected a .toml or .json file"))?;
    let raw = fs::read_to_string(path)
        .map_err(|e| manifest_error(path, &format!("failed to read: {e}")))?;
    let manifest = ManifestFile::parse(&raw, format)
        .map_err(|e| manifest_error(path, &format!("failed to parse: {e}")))?;

    manifest
        .into_parts()
        .map_err(|e| manifest_error(path, &e.to_string()))
}

fn manifest_error(path: &Path, reason: &str) -> ApplicationError {
    ApplicationError::ManifestFailed {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}
