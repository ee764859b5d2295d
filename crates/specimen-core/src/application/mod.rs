//! Synthesis services and the ports they depend on.
//!
//! The classifier, field enumerator and synthesizer only need a
//! [`TypeCatalog`] and a [`HintResolver`]. [`ExampleService`] adds a
//! [`ValueRenderer`] and name lookup on top.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    DEFAULT_MAX_DEPTH, DescriptorHints, ExampleService, ExampleSynthesizer, FieldEnumerator,
    TypeClassifier, TypeSummary,
};

pub use ports::{HintResolver, TypeCatalog, ValueRenderer};

pub use error::ApplicationError;
