//! Infrastructure adapters for Specimen.
//!
//! This crate implements the ports defined in `specimen-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod catalog;
pub mod hints;
pub mod renderer;

// Re-export commonly used adapters
pub use catalog::{LoadedCatalog, ManifestLoader};
pub use hints::SideTableHints;
pub use renderer::{JsonRenderer, SerializationPolicy};
