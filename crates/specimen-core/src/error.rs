//! Crate-level error type.
//!
//! Synthesis itself never fails. `SpecimenError` covers the operations around
//! it: registering descriptors, looking types up by name, loading manifests
//! and rendering text.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::{self, DomainError};

#[derive(Debug, Error, Clone)]
pub enum SpecimenError {
    /// Invalid or conflicting type metadata.
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Lookup, loading or rendering failed.
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl SpecimenError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "Please report this issue at: https://github.com/cosecruz/specimen/issues".into(),
            ],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category().into(),
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Coarse classification, used by front ends to pick exit codes and styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    NotFound,
    Configuration,
    Internal,
}

impl From<domain::ErrorCategory> for ErrorCategory {
    fn from(category: domain::ErrorCategory) -> Self {
        match category {
            domain::ErrorCategory::Validation => Self::Validation,
            domain::ErrorCategory::Conflict => Self::Conflict,
            domain::ErrorCategory::NotFound => Self::NotFound,
            domain::ErrorCategory::Internal => Self::Internal,
        }
    }
}

pub type SpecimenResult<T> = Result<T, SpecimenError>;

/// Turn a foreign error into [`SpecimenError::Internal`] with a short prefix.
pub trait Context<T> {
    fn context(self, msg: impl Into<String>) -> SpecimenResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: impl Into<String>) -> SpecimenResult<T> {
        self.map_err(|e| SpecimenError::Internal {
            message: format!("{}: {e}", msg.into()),
        })
    }
}
