//! Field Enumerator - flattens a type's fields across its inheritance chain.
//!
//! Fields are collected level by level from the most-derived type up to the
//! root, each level in declaration order. A field that shadows a supertype
//! field of the same name does not replace it: both entries are kept.

use std::collections::HashSet;

use tracing::warn;

use crate::application::ports::TypeCatalog;
use crate::domain::{FieldDescriptor, TypeDescriptor};

/// Flattens declared fields across the supertype chain.
#[derive(Clone, Copy)]
pub struct FieldEnumerator<'a> {
    catalog: &'a dyn TypeCatalog,
}

impl<'a> FieldEnumerator<'a> {
    pub fn new(catalog: &'a dyn TypeCatalog) -> Self {
        Self { catalog }
    }

    /// Every field of `ty` and its ancestors, most-derived level first.
    pub fn all_fields<'t>(&self, ty: &'t TypeDescriptor) -> Vec<&'t FieldDescriptor>
    where
        'a: 't,
    {
        Ancestry::new(self.catalog, ty)
            .flat_map(|level| level.declared_fields())
            .collect()
    }
}

/// Walks a descriptor and then each registered supertype in turn.
///
/// The walk stops at the root, at a supertype the catalog does not hold, or
/// if a chain loops back on a type already visited.
pub(crate) struct Ancestry<'t> {
    catalog: &'t dyn TypeCatalog,
    next: Option<&'t TypeDescriptor>,
    seen: HashSet<&'t str>,
}

impl<'t> Ancestry<'t> {
    pub(crate) fn new(catalog: &'t dyn TypeCatalog, ty: &'t TypeDescriptor) -> Self {
        Self {
            catalog,
            next: Some(ty),
            seen: HashSet::new(),
        }
    }
}

impl<'t> Iterator for Ancestry<'t> {
    type Item = &'t TypeDescriptor;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        if !self.seen.insert(current.name().as_str()) {
            warn!(type_name = %current.name(), "inheritance chain loops; stopping");
            return None;
        }

        self.next = current.supertype().and_then(|supertype| {
            let found = self.catalog.lookup(supertype);
            if found.is_none() {
                warn!(
                    type_name = %current.name(),
                    supertype = %supertype,
                    "supertype not registered; its fields are skipped"
                );
            }
            found
        });

        Some(current)
    }
}
