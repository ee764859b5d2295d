//! The synthesized example-value tree.
//!
//! An [`ExampleValue`] is fully owned by the caller and carries no link back
//! to the descriptor that produced it.

use std::fmt;

use crate::domain::value_objects::Category;

/// A scalar placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Int(i32),
    Short(i16),
    Byte(i8),
    Long(i64),
    Float(f32),
    Double(f64),
    Char(char),
    Bool(bool),
    Str(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Short(v) => write!(f, "{v}"),
            Self::Byte(v) => write!(f, "{v}"),
            Self::Long(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v:?}"),
            Self::Double(v) => write!(f, "{v:?}"),
            Self::Char(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Str(v) => f.write_str(v),
        }
    }
}

/// One entry of a composite: the field name, the category of its declared
/// type (absent when the type is unknown), and the synthesized value.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValue {
    pub name: String,
    pub category: Option<Category>,
    pub value: ExampleValue,
}

impl FieldValue {
    pub fn new(name: impl Into<String>, category: Option<Category>, value: ExampleValue) -> Self {
        Self {
            name: name.into(),
            category,
            value,
        }
    }
}

/// A synthesized example node.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ExampleValue {
    /// Documentation unavailable for this shape (depth cutoff, unresolved
    /// generics, unknown type).
    #[default]
    Null,
    Scalar(Scalar),
    /// The `|A|B|` listing of an enum's constants.
    Enum(String),
    Sequence(Vec<ExampleValue>),
    /// Key/value pairs; keys are example values themselves.
    Mapping(Vec<(ExampleValue, ExampleValue)>),
    /// Flattened fields in enumeration order. Names may repeat when a
    /// subtype shadows a supertype field.
    Composite(Vec<FieldValue>),
}

impl ExampleValue {
    pub fn str(value: impl Into<String>) -> Self {
        Self::Scalar(Scalar::Str(value.into()))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// First entry named `name` of a composite.
    pub fn get(&self, name: &str) -> Option<&ExampleValue> {
        match self {
            Self::Composite(entries) => entries.iter().find(|e| e.name == name).map(|e| &e.value),
            _ => None,
        }
    }

    /// Entry names of a composite in order, duplicates included.
    pub fn keys(&self) -> Vec<&str> {
        match self {
            Self::Composite(entries) => entries.iter().map(|e| e.name.as_str()).collect(),
            _ => Vec::new(),
        }
    }

    /// Nesting depth of composites along the first-field path.
    ///
    /// Handy for inspecting how far a self-referential type was expanded.
    pub fn composite_depth(&self) -> usize {
        match self {
            Self::Composite(entries) => {
                1 + entries.first().map_or(0, |e| e.value.composite_depth())
            }
            _ => 0,
        }
    }
}

impl From<Scalar> for ExampleValue {
    fn from(scalar: Scalar) -> Self {
        Self::Scalar(scalar)
    }
}
