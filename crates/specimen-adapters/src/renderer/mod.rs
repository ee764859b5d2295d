//! Example-tree renderers.

mod json;
mod policy;

pub use json::JsonRenderer;
pub use policy::SerializationPolicy;
