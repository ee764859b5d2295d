//! Compile-time type description.
//!
//! [`Describe`] is how Rust types enter the [`TypeRegistry`]. Scalars,
//! std containers and smart pointers are covered here; user models get it
//! from `#[derive(Describe)]`.
//!
//! # Type identity
//!
//! Containers are registered under their *raw* identity (`Vec`, `HashMap`),
//! and the element types travel as the field's type arguments. A bare `Vec`
//! reached without a field therefore has no element type, matching how raw
//! containers behave in synthesis.
//!
//! `Option<T>`, `Box<T>`, `Rc<T>` and `Arc<T>` are transparent: they describe
//! exactly as `T` does.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use crate::domain::entities::TypeDescriptor;
use crate::domain::error::DomainError;
use crate::domain::registry::TypeRegistry;
use crate::domain::value_objects::{Capability, TypeName};

/// A type that can describe its own shape to a [`TypeRegistry`].
pub trait Describe {
    /// The identity the type is registered under.
    fn type_name() -> TypeName;

    /// Generic arguments a field of this type carries (`Vec<T>` → `[T]`).
    fn type_args() -> Vec<TypeName> {
        Vec::new()
    }

    /// Insert this type's descriptor, and those of every type it refers to.
    ///
    /// Implementations must insert their own descriptor *before* recursing so
    /// that self-referential types terminate.
    fn register(registry: &mut TypeRegistry) -> Result<(), DomainError>;
}

macro_rules! describe_scalar {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl Describe for $ty {
                fn type_name() -> TypeName {
                    TypeName::new($name)
                }

                fn register(registry: &mut TypeRegistry) -> Result<(), DomainError> {
                    registry.ensure(TypeDescriptor::scalar(Self::type_name()));
                    Ok(())
                }
            }
        )*
    };
}

describe_scalar! {
    i8 => "i8", u8 => "u8",
    i16 => "i16", u16 => "u16",
    i32 => "i32", u32 => "u32", isize => "isize", usize => "usize",
    i64 => "i64", u64 => "u64", i128 => "i128", u128 => "u128",
    f32 => "f32", f64 => "f64",
    char => "char", bool => "bool",
    String => "String", str => "str",
}

macro_rules! describe_collection {
    ($($ty:ident => $name:literal),* $(,)?) => {
        $(
            impl<T: Describe> Describe for $ty<T> {
                fn type_name() -> TypeName {
                    TypeName::new($name)
                }

                fn type_args() -> Vec<TypeName> {
                    vec![T::type_name()]
                }

                fn register(registry: &mut TypeRegistry) -> Result<(), DomainError> {
                    registry.ensure(TypeDescriptor::container(
                        Self::type_name(),
                        Capability::Collection,
                    ));
                    T::register(registry)
                }
            }
        )*
    };
}

describe_collection! {
    Vec => "Vec",
    VecDeque => "VecDeque",
    LinkedList => "LinkedList",
    HashSet => "HashSet",
    BTreeSet => "BTreeSet",
}

macro_rules! describe_map {
    ($($ty:ident => $name:literal),* $(,)?) => {
        $(
            impl<K: Describe, V: Describe> Describe for $ty<K, V> {
                fn type_name() -> TypeName {
                    TypeName::new($name)
                }

                fn type_args() -> Vec<TypeName> {
                    vec![K::type_name(), V::type_name()]
                }

                fn register(registry: &mut TypeRegistry) -> Result<(), DomainError> {
                    registry.ensure(TypeDescriptor::container(Self::type_name(), Capability::Map));
                    K::register(registry)?;
                    V::register(registry)
                }
            }
        )*
    };
}

describe_map! {
    HashMap => "HashMap",
    BTreeMap => "BTreeMap",
}

macro_rules! describe_transparent {
    ($($ty:ident),* $(,)?) => {
        $(
            impl<T: Describe + ?Sized> Describe for $ty<T> {
                fn type_name() -> TypeName {
                    T::type_name()
                }

                fn type_args() -> Vec<TypeName> {
                    T::type_args()
                }

                fn register(registry: &mut TypeRegistry) -> Result<(), DomainError> {
                    T::register(registry)
                }
            }
        )*
    };
}

describe_transparent!(Box, Rc, Arc);

impl<T: Describe> Describe for Option<T> {
    fn type_name() -> TypeName {
        T::type_name()
    }

    fn type_args() -> Vec<TypeName> {
        T::type_args()
    }

    fn register(registry: &mut TypeRegistry) -> Result<(), DomainError> {
        T::register(registry)
    }
}

impl<T: Describe + ?Sized> Describe for &T {
    fn type_name() -> TypeName {
        T::type_name()
    }

    fn type_args() -> Vec<TypeName> {
        T::type_args()
    }

    fn register(registry: &mut TypeRegistry) -> Result<(), DomainError> {
        T::register(registry)
    }
}

/// Fixed-size arrays register as `[T]` with `T` as component type; the
/// length is not part of the identity.
impl<T: Describe, const N: usize> Describe for [T; N] {
    fn type_name() -> TypeName {
        TypeName::new(format!("[{}]", T::type_name()))
    }

    fn register(registry: &mut TypeRegistry) -> Result<(), DomainError> {
        let name = Self::type_name();
        if !registry.contains(&name) {
            registry.insert(TypeDescriptor::array(name, T::type_name()).build()?)?;
        }
        T::register(registry)
    }
}
