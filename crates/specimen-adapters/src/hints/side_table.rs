//! Thread-safe side table of field hints.

use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
};

use specimen_core::{
    application::ports::HintResolver,
    domain::{DocHint, FieldDescriptor, TypeName},
};
use tracing::debug;

/// `(declaring type, field name)`
type FieldKey = (TypeName, String);

/// Hints keyed by field identity.
///
/// A table entry replaces the hint carried on the field descriptor; fields
/// without an entry fall back to their own hint.
#[derive(Debug, Clone, Default)]
pub struct SideTableHints {
    inner: Arc<RwLock<HashMap<FieldKey, DocHint>>>,
}

impl SideTableHints {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the hint for `declaring.field`.
    pub fn insert(&self, declaring: TypeName, field: impl Into<String>, hint: DocHint) {
        let field = field.into();
        debug!(type_name = %declaring, field = %field, "registered field hint");
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert((declaring, field), hint);
    }

    /// The hint registered for `declaring.field`, if any.
    pub fn get(&self, declaring: &TypeName, field: &str) -> Option<DocHint> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&(declaring.clone(), field.to_string()))
            .cloned()
    }

    /// Get the number of registered hints.
    pub fn len(&self) -> usize {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn resolve(&self, field: &FieldDescriptor) -> DocHint {
        self.get(field.declaring_type(), field.name())
            .unwrap_or_else(|| field.hint().clone())
    }
}

impl HintResolver for SideTableHints {
    fn has_param_hint(&self, field: &FieldDescriptor) -> bool {
        self.resolve(field).param.is_some()
    }

    fn param_hint_value(&self, field: &FieldDescriptor) -> String {
        self.resolve(field).param.unwrap_or_default()
    }

    fn has_response_hint(&self, field: &FieldDescriptor) -> bool {
        self.resolve(field).response.is_some()
    }

    fn response_hint_value(&self, field: &FieldDescriptor) -> String {
        self.resolve(field)
            .response
            .map(|r| r.value)
            .unwrap_or_default()
    }

    fn response_hint_example(&self, field: &FieldDescriptor) -> String {
        self.resolve(field)
            .response
            .and_then(|r| r.example)
            .unwrap_or_default()
    }
}
