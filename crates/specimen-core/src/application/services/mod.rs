//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish high-level
//! use cases like "classify this type" or "render an example for this field".

pub mod classifier;
pub mod example_service;
pub mod field_enumerator;
pub mod hints;
pub mod synthesizer;

pub use classifier::TypeClassifier;
pub use example_service::{ExampleService, TypeSummary};
pub use field_enumerator::FieldEnumerator;
pub use hints::DescriptorHints;
pub use synthesizer::{DEFAULT_MAX_DEPTH, ExampleSynthesizer};
