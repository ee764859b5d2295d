//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `specimen-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `TypeCatalog`: Descriptor lookup
//!   - `HintResolver`: Documentation-hint queries for string fields
//!   - `ValueRenderer`: Example tree serialization

pub mod output;

pub use output::{HintResolver, TypeCatalog, ValueRenderer};

#[cfg(test)]
pub use output::MockHintResolver;
