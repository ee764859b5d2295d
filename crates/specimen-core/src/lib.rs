//! Example values synthesized from type metadata.
//!
//! Given a type's shape (its fields, supertype, enum constants, container
//! capabilities), `specimen-core` builds a representative example value
//! without ever holding an instance of the type. Request and response models
//! of an API are the typical input.
//!
//! - [`domain`]: the type model ([`domain::TypeDescriptor`]), the example tree
//!   ([`domain::ExampleValue`]), the [`domain::TypeRegistry`] and the
//!   [`domain::Describe`] trait.
//! - [`application`]: the ports adapters implement (catalog, hints, renderer)
//!   and the services built on them: classifier, field enumerator,
//!   synthesizer and [`application::ExampleService`].
//!
//! Manifest loading and JSON rendering live in `specimen-adapters`.
//!
//! ## Usage
//!
//! ```rust
//! use specimen_core::prelude::*;
//!
//! #[derive(Describe)]
//! #[specimen(name = "Person")]
//! struct Person {
//!     #[specimen(param = "full name")]
//!     name: String,
//!     age: i32,
//!     tags: Vec<String>,
//! }
//!
//! let mut registry = TypeRegistry::with_builtins();
//! let person = registry.register::<Person>().unwrap();
//!
//! let hints = DescriptorHints;
//! let synthesizer = ExampleSynthesizer::new(&registry, &hints);
//! let value = synthesizer.synthesize_named(&person).unwrap();
//!
//! assert_eq!(value.get("name"), Some(&ExampleValue::str("full name")));
//! ```

// The derive emits `::specimen_core` paths; this lets them resolve inside the
// crate's own tests too.
extern crate self as specimen_core;

pub mod application;
pub mod domain;
pub mod error;

#[cfg(feature = "derive")]
pub use specimen_derive::Describe;

pub mod prelude {
    pub use crate::application::{
        DEFAULT_MAX_DEPTH, DescriptorHints, ExampleService, ExampleSynthesizer, FieldEnumerator,
        TypeClassifier,
        ports::{HintResolver, TypeCatalog, ValueRenderer},
    };
    pub use crate::domain::{
        Capability, Category, Describe, DocHint, ExampleValue, FieldDescriptor, FieldValue,
        Scalar, ScalarKind, TypeDescriptor, TypeName, TypeRegistry,
    };
    pub use crate::error::{SpecimenError, SpecimenResult};

    #[cfg(feature = "derive")]
    pub use specimen_derive::Describe;
}
