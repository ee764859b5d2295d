//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `specimen-adapters` crate provides implementations.

use crate::domain::{ExampleValue, FieldDescriptor, TypeDescriptor, TypeName, TypeRegistry};
use crate::error::SpecimenResult;

/// Port for read-only descriptor lookup.
///
/// Implemented by:
/// - `specimen_core::domain::TypeRegistry` (in-process registry)
///
/// ## Design Notes
///
/// - Lookups are pure reads; implementations must not change between calls
///   that belong to one synthesis
/// - `Send + Sync` so one catalog can serve concurrent callers without locks
pub trait TypeCatalog: Send + Sync {
    /// Find the descriptor registered under `name`.
    fn lookup(&self, name: &TypeName) -> Option<&TypeDescriptor>;

    /// All registered names, in registration order.
    fn type_names(&self) -> Vec<TypeName>;
}

impl TypeCatalog for TypeRegistry {
    fn lookup(&self, name: &TypeName) -> Option<&TypeDescriptor> {
        self.get(name)
    }

    fn type_names(&self) -> Vec<TypeName> {
        self.names().cloned().collect()
    }
}

/// Port for documentation-hint queries on string fields.
///
/// Implemented by:
/// - `specimen_core::application::DescriptorHints` (hints carried on descriptors)
/// - `specimen_adapters::hints::SideTableHints` (hints registered per field)
#[cfg_attr(test, mockall::automock)]
pub trait HintResolver: Send + Sync {
    /// Whether a request-parameter hint is present.
    fn has_param_hint(&self, field: &FieldDescriptor) -> bool;

    /// The request-parameter hint's value (empty when absent).
    fn param_hint_value(&self, field: &FieldDescriptor) -> String;

    /// Whether a response-property hint is present.
    fn has_response_hint(&self, field: &FieldDescriptor) -> bool;

    /// The response-property hint's value (empty when absent).
    fn response_hint_value(&self, field: &FieldDescriptor) -> String;

    /// The response-property hint's example; blank when there is none.
    fn response_hint_example(&self, field: &FieldDescriptor) -> String;
}

/// Port for turning an example tree into text.
///
/// Implemented by:
/// - `specimen_adapters::renderer::JsonRenderer` (JSON with null coercions)
pub trait ValueRenderer: Send + Sync {
    fn render(&self, value: &ExampleValue) -> SpecimenResult<String>;
}
