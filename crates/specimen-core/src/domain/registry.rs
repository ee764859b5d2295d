//! Type registry - the table of descriptors synthesis reads from.
//!
//! The registry is filled once (by `#[derive(Describe)]` registration or by a
//! manifest loader) and then shared read-only. It never changes during a
//! synthesis call.

use std::collections::HashSet;

use indexmap::IndexMap;
use tracing::debug;

use crate::domain::describe::Describe;
use crate::domain::entities::TypeDescriptor;
use crate::domain::error::DomainError;
use crate::domain::value_objects::{Capability, ScalarKind, TypeName};

/// Raw container identities pre-registered by [`TypeRegistry::with_builtins`].
pub const BUILTIN_COLLECTIONS: &[&str] = &["Vec", "VecDeque", "LinkedList", "HashSet", "BTreeSet"];

/// Raw map identities pre-registered by [`TypeRegistry::with_builtins`].
pub const BUILTIN_MAPS: &[&str] = &["HashMap", "BTreeMap"];

/// Insertion-ordered table of type descriptors keyed by [`TypeName`].
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: IndexMap<TypeName, TypeDescriptor>,
}

impl TypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every scalar identity plus the raw std
    /// collection and map types.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for kind in ScalarKind::ALL {
            for name in kind.type_names() {
                registry.ensure(TypeDescriptor::scalar(TypeName::new(*name)));
            }
        }
        for name in BUILTIN_COLLECTIONS {
            registry.ensure(TypeDescriptor::container(
                TypeName::new(*name),
                Capability::Collection,
            ));
        }
        for name in BUILTIN_MAPS {
            registry.ensure(TypeDescriptor::container(TypeName::new(*name), Capability::Map));
        }
        registry
    }

    /// Register `T` and everything it refers to.
    pub fn register<T: Describe + ?Sized>(&mut self) -> Result<TypeName, DomainError> {
        T::register(self)?;
        Ok(T::type_name())
    }

    /// Insert a descriptor, failing if the name is taken by a different one.
    ///
    /// Re-inserting an identical descriptor is a no-op.
    pub fn insert(&mut self, descriptor: TypeDescriptor) -> Result<(), DomainError> {
        match self.types.get(descriptor.name()) {
            Some(existing) if existing == &descriptor => Ok(()),
            Some(_) => Err(DomainError::DuplicateType {
                name: descriptor.name().to_string(),
            }),
            None => {
                debug!(type_name = %descriptor.name(), "registered type");
                self.types.insert(descriptor.name().clone(), descriptor);
                Ok(())
            }
        }
    }

    /// Insert unless the name is already present. Returns `true` if inserted.
    pub fn ensure(&mut self, descriptor: TypeDescriptor) -> bool {
        if self.types.contains_key(descriptor.name()) {
            return false;
        }
        self.types.insert(descriptor.name().clone(), descriptor);
        true
    }

    pub fn contains(&self, name: &TypeName) -> bool {
        self.types.contains_key(name)
    }

    pub fn get(&self, name: &TypeName) -> Option<&TypeDescriptor> {
        self.types.get(name)
    }

    /// Look up by name, failing with [`DomainError::UnknownType`].
    pub fn require(&self, name: &TypeName) -> Result<&TypeDescriptor, DomainError> {
        self.get(name)
            .ok_or_else(|| DomainError::UnknownType(name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.types.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &TypeName> {
        self.types.keys()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Merge another registry into this one.
    pub fn extend(&mut self, other: TypeRegistry) -> Result<(), DomainError> {
        for descriptor in other.types.into_values() {
            self.insert(descriptor)?;
        }
        Ok(())
    }

    /// Check that no supertype chain loops back on itself.
    ///
    /// Supertypes that are not registered end the chain; they are not an
    /// error here because synthesis degrades on them.
    pub fn validate(&self) -> Result<(), DomainError> {
        for descriptor in self.types.values() {
            let mut seen = HashSet::new();
            let mut current = Some(descriptor);
            while let Some(ty) = current {
                if !seen.insert(ty.name()) {
                    return Err(DomainError::CyclicInheritance {
                        name: ty.name().to_string(),
                    });
                }
                current = ty.supertype().and_then(|s| self.get(s));
            }
        }
        Ok(())
    }

    /// Type names referenced by fields, supertypes, components or type
    /// arguments that have no descriptor.
    pub fn dangling_references(&self) -> Vec<TypeName> {
        let mut missing: Vec<TypeName> = Vec::new();
        let mut note = |name: &TypeName| {
            if !self.contains(name) && !missing.contains(name) {
                missing.push(name.clone());
            }
        };
        for descriptor in self.types.values() {
            if let Some(supertype) = descriptor.supertype() {
                note(supertype);
            }
            if let Some(component) = descriptor.component() {
                note(component);
            }
            for field in descriptor.declared_fields() {
                note(field.type_name());
                field.type_args().iter().for_each(&mut note);
            }
        }
        missing
    }
}
