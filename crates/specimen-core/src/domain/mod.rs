//! Type model and example-value tree.
//!
//! Everything here is synchronous and free of I/O. Descriptors are immutable
//! once registered, and nothing in this layer ever holds an instance of a
//! described type: it works on shapes only.

pub mod describe;
pub mod entities;
pub mod error;
pub mod registry;
pub mod value_objects;

pub use describe::Describe;
pub use entities::{
    descriptor::{
        DocHint, EnumConstant, FieldDescriptor, ResponseHint, TypeDescriptor,
        TypeDescriptorBuilder,
    },
    example::{ExampleValue, FieldValue, Scalar},
};
pub use error::{DomainError, ErrorCategory};
pub use registry::{BUILTIN_COLLECTIONS, BUILTIN_MAPS, TypeRegistry};
pub use value_objects::{Capability, Category, ScalarKind, TypeName};

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Registration Tests
    // ========================================================================

    #[test]
    fn nested_containers_register_every_level() {
        let mut registry = TypeRegistry::new();
        registry
            .register::<std::collections::HashMap<String, Vec<[u8; 2]>>>()
            .unwrap();

        for name in ["HashMap", "String", "Vec", "[u8]", "u8"] {
            assert!(registry.contains(&TypeName::new(name)), "missing {name}");
        }
    }

    #[test]
    fn hand_built_hierarchy_round_trips_through_registry() {
        let mut registry = TypeRegistry::with_builtins();
        let base = TypeDescriptor::composite(TypeName::new("Base"))
            .simple_field("id", TypeName::new("i64"))
            .build()
            .unwrap();
        let derived = TypeDescriptor::composite(TypeName::new("Derived"))
            .extends(TypeName::new("Base"))
            .simple_field("id", TypeName::new("String"))
            .build()
            .unwrap();

        registry.insert(base).unwrap();
        registry.insert(derived).unwrap();

        registry.validate().unwrap();
        assert!(registry.dangling_references().is_empty());
        assert_eq!(
            registry
                .require(&TypeName::new("Derived"))
                .unwrap()
                .supertype(),
            Some(&TypeName::new("Base"))
        );
    }

    #[test]
    fn require_reports_unknown_type() {
        let registry = TypeRegistry::new();
        let err = registry.require(&TypeName::new("Ghost")).unwrap_err();

        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(!err.suggestions().is_empty());
    }
}
