//! Derive macro for `specimen_core::domain::Describe`.
//!
//! `#[derive(Describe)]` turns a struct with named fields, or a fieldless
//! enum, into a type the registry can describe without ever constructing it.
//!
//! # Container Attributes
//!
//! - `#[specimen(name = "...")]` - Registered type name (defaults to the
//!   module path plus the type's identifier)
//!
//! # Field Attributes
//!
//! - `#[specimen(rename = "...")]` - Name the field is documented under
//! - `#[specimen(param = "...")]` - Request-parameter hint for string fields
//! - `#[specimen(response = "...", example = "...")]` - Response-property hint
//! - `#[specimen(extends)]` - The field's type becomes the supertype; its
//!   fields are inherited instead of nested
//! - `#[specimen(skip)]` - Leave the field out
//!
//! # Variant Attributes
//!
//! - `#[specimen(rename = "...")]` - Constant name used in the `|A|B|` listing
//!
//! # Example
//!
//! ```ignore
//! #[derive(Describe)]
//! pub struct UserVo {
//!     #[specimen(extends)]
//!     base: Entity,
//!     #[specimen(response = "用户ID", example = "1001")]
//!     id: String,
//!     tags: Vec<String>,
//! }
//! ```

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod attrs;
mod expand;
mod runtime_path;

#[proc_macro_derive(Describe, attributes(specimen))]
pub fn derive_describe(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand::expand_describe(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
