//! Type Classifier - decides which value category a descriptor belongs to.
//!
//! Categories are checked in a fixed priority order and the first match wins:
//!
//! | # | Category   | Recognised by                                  |
//! |---|------------|------------------------------------------------|
//! | 1 | Scalar     | fixed type identity (`i32`, `String`, ...)      |
//! | 2 | Enum       | descriptor carries constants                   |
//! | 3 | Array      | descriptor carries a component type            |
//! | 4 | Collection | collection capability on the type or an ancestor |
//! | 5 | Map        | map capability on the type or an ancestor      |
//! | 6 | Composite  | anything else                                  |
//!
//! An enum that also declares a collection capability is still an enum.

use crate::application::ports::TypeCatalog;
use crate::application::services::field_enumerator::Ancestry;
use crate::domain::{Capability, Category, ScalarKind, TypeDescriptor, TypeName};

/// Pure, total classification over a catalog's descriptors.
#[derive(Clone, Copy)]
pub struct TypeClassifier<'a> {
    catalog: &'a dyn TypeCatalog,
}

impl<'a> TypeClassifier<'a> {
    pub fn new(catalog: &'a dyn TypeCatalog) -> Self {
        Self { catalog }
    }

    /// Assign exactly one category to `ty`.
    pub fn classify(&self, ty: &TypeDescriptor) -> Category {
        if let Some(kind) = ty.scalar_kind() {
            return Category::Scalar(kind);
        }
        if ty.is_enum() {
            return Category::Enum;
        }
        if ty.component().is_some() {
            return Category::Array;
        }
        if self.has_capability(ty, Capability::Collection) {
            return Category::Collection;
        }
        if self.has_capability(ty, Capability::Map) {
            return Category::Map;
        }
        Category::Composite
    }

    /// Whether `ty` or any registered ancestor declares `capability`.
    pub fn has_capability(&self, ty: &TypeDescriptor, capability: Capability) -> bool {
        Ancestry::new(self.catalog, ty).any(|level| level.declares(capability))
    }

    /// Whether `name` is one of the built-in scalar identities.
    pub fn is_base_type(name: &TypeName) -> bool {
        ScalarKind::from_type_name(name.as_str()).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{TypeDescriptor, TypeRegistry};

    fn registry() -> TypeRegistry {
        let mut registry = TypeRegistry::with_builtins();
        registry
            .insert(
                TypeDescriptor::collection(TypeName::new("PagedList"))
                    .simple_field("page", TypeName::new("i32"))
                    .build()
                    .unwrap(),
            )
            .unwrap();
        registry
            .insert(
                TypeDescriptor::composite(TypeName::new("UserList"))
                    .extends(TypeName::new("PagedList"))
                    .build()
                    .unwrap(),
            )
            .unwrap();
        registry
            .insert(
                TypeDescriptor::enumeration(TypeName::new("Flags"), ["A", "B"])
                    .capability(Capability::Collection)
                    .build()
                    .unwrap(),
            )
            .unwrap();
        registry
            .insert(
                TypeDescriptor::array(TypeName::new("[Flags]"), TypeName::new("Flags"))
                    .build()
                    .unwrap(),
            )
            .unwrap();
        registry
            .insert(
                TypeDescriptor::composite(TypeName::new("Person"))
                    .simple_field("age", TypeName::new("i32"))
                    .build()
                    .unwrap(),
            )
            .unwrap();
        registry
    }

    fn classify(registry: &TypeRegistry, name: &str) -> Category {
        let classifier = TypeClassifier::new(registry);
        classifier.classify(registry.get(&TypeName::new(name)).unwrap())
    }

    #[test]
    fn scalars_by_identity() {
        let registry = registry();
        assert_eq!(classify(&registry, "i32"), Category::Scalar(ScalarKind::Int));
        assert_eq!(classify(&registry, "u8"), Category::Scalar(ScalarKind::Byte));
        assert_eq!(classify(&registry, "u64"), Category::Scalar(ScalarKind::Long));
        assert_eq!(classify(&registry, "f64"), Category::Scalar(ScalarKind::Double));
        assert_eq!(classify(&registry, "char"), Category::Scalar(ScalarKind::Char));
        assert_eq!(classify(&registry, "String"), Category::Scalar(ScalarKind::String));
    }

    #[test]
    fn enum_wins_over_collection_capability() {
        assert_eq!(classify(&registry(), "Flags"), Category::Enum);
    }

    #[test]
    fn arrays_and_raw_containers() {
        let registry = registry();
        assert_eq!(classify(&registry, "[Flags]"), Category::Array);
        assert_eq!(classify(&registry, "Vec"), Category::Collection);
        assert_eq!(classify(&registry, "HashMap"), Category::Map);
    }

    #[test]
    fn capability_is_inherited_from_ancestors() {
        assert_eq!(classify(&registry(), "UserList"), Category::Collection);
    }

    #[test]
    fn composite_is_the_fallback() {
        assert_eq!(classify(&registry(), "Person"), Category::Composite);
    }

    #[test]
    fn base_type_check() {
        assert!(TypeClassifier::is_base_type(&TypeName::new("i16")));
        assert!(!TypeClassifier::is_base_type(&TypeName::new("Person")));
    }
}
