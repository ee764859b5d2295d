// ============================================================================
// domain/error.rs - TYPE MODEL ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they travel through registries and loaders)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid type name: {0:?}")]
    InvalidTypeName(String),

    #[error("Invalid descriptor for '{name}': {reason}")]
    InvalidDescriptor { name: String, reason: String },

    #[error("Type '{type_name}' declares field '{field}' more than once")]
    DuplicateField { type_name: String, field: String },

    #[error("Enum '{enum_name}' constant #{ordinal} has no usable name")]
    UnnamedEnumConstant { enum_name: String, ordinal: usize },

    // ========================================================================
    // Registry Errors
    // ========================================================================
    #[error("Type '{name}' is already registered")]
    DuplicateType { name: String },

    #[error("Inheritance cycle through '{name}'")]
    CyclicInheritance { name: String },

    #[error("Type not registered: {0}")]
    UnknownType(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidTypeName(name) => vec![
                format!("'{}' is not a valid type name", name),
                "Type names must be non-empty and carry no surrounding whitespace".into(),
            ],
            Self::DuplicateField { type_name, field } => vec![
                format!("Remove the second '{}' field from '{}'", field, type_name),
                "A field may shadow one from a supertype, but not one on the same level".into(),
            ],
            Self::DuplicateType { name } => vec![
                format!("'{}' appears in more than one manifest", name),
                "Keep one definition or rename one of the types".into(),
            ],
            Self::CyclicInheritance { name } => vec![
                format!("'{}' ends up extending itself", name),
                "Check the `extends` chain of the types involved".into(),
            ],
            Self::UnknownType(name) => vec![
                format!("No descriptor is registered for '{}'", name),
                "Try: specimen types --manifest <PATH> to list registered types".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidTypeName(_)
            | Self::InvalidDescriptor { .. }
            | Self::DuplicateField { .. }
            | Self::UnnamedEnumConstant { .. } => ErrorCategory::Validation,
            Self::DuplicateType { .. } | Self::CyclicInheritance { .. } => {
                ErrorCategory::Conflict
            }
            Self::UnknownType(_) => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    NotFound,
    Internal,
}
