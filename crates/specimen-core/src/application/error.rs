//! Application layer errors.
//!
//! These errors represent failures at the service boundary. Synthesis itself
//! never fails; it degrades to `Null` or partial values instead.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur around synthesis: lookup, rendering, manifest loading.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The requested root type has no descriptor in the catalog.
    #[error("Unknown type: {name}")]
    UnknownType { name: String },

    /// Rendering the example tree failed.
    #[error("Rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// A type manifest could not be read or parsed.
    #[error("Manifest error at {path}: {reason}")]
    ManifestFailed { path: PathBuf, reason: String },

    /// The configured depth ceiling is unusable.
    #[error("Invalid maximum depth {depth}: must be at least 1")]
    InvalidMaxDepth { depth: usize },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownType { name } => vec![
                format!("No descriptor is registered for '{}'", name),
                "Try: specimen types to see registered types".into(),
                "Type names are matched exactly, including module paths".into(),
            ],
            Self::ManifestFailed { path, .. } => vec![
                format!("Failed to load: {}", path.display()),
                "Check the manifest syntax (TOML or JSON)".into(),
                "Every [[types]] entry needs a name".into(),
            ],
            Self::InvalidMaxDepth { .. } => vec![
                "Use a maximum depth of 1 or more (the default is 5)".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownType { .. } => ErrorCategory::NotFound,
            Self::RenderingFailed { .. } => ErrorCategory::Internal,
            Self::ManifestFailed { .. } => ErrorCategory::Validation,
            Self::InvalidMaxDepth { .. } => ErrorCategory::Configuration,
        }
    }
}
