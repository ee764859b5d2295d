//! Hint resolvers.
//!
//! `specimen_core::application::DescriptorHints` covers hints carried on the
//! descriptors themselves. The side table here adds hints registered per
//! field from outside the type's definition.

mod side_table;

pub use side_table::SideTableHints;
