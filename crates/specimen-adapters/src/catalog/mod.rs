//! Type catalogs read from TOML or JSON manifests.

mod loader;
pub mod manifest;

pub use loader::{LoadedCatalog, ManifestLoader};
pub use manifest::{ManifestFile, ManifestFormat};
