//! Domain value objects: TypeName, ScalarKind, Capability, Category.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity beyond
//! their content. They know their string forms and how to parse them; all
//! traversal logic lives in the application services.

use crate::domain::entities::example::Scalar;
use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

// ── TypeName ─────────────────────────────────────────────────────────────────

/// The fixed identity of a type.
///
/// Scalars are recognised by this identity alone (`i32`, `String`, ...), and
/// the registry is keyed by it. Cloning is cheap.
///
/// Invariant: never empty or surrounded by whitespace. Enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeName(Arc<str>);

impl TypeName {
    /// Create a new type name.
    ///
    /// # Panics
    /// Panics if the name is blank (use `try_new` for fallible).
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        let name = name.into();
        assert!(
            is_valid_type_name(&name),
            "TypeName cannot be blank or padded: {:?}",
            name
        );
        Self(name)
    }

    /// Fallible constructor.
    pub fn try_new(name: impl Into<Arc<str>>) -> Result<Self, DomainError> {
        let name = name.into();
        if is_valid_type_name(&name) {
            Ok(Self(name))
        } else {
            Err(DomainError::InvalidTypeName(name.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The scalar kind this identity denotes, if any.
    pub fn scalar_kind(&self) -> Option<ScalarKind> {
        ScalarKind::from_type_name(&self.0)
    }
}

fn is_valid_type_name(name: &str) -> bool {
    !name.is_empty() && name.trim() == name
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TypeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TypeName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl FromStr for TypeName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_new(s)
    }
}

impl Serialize for TypeName {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TypeName {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::try_new(raw).map_err(serde::de::Error::custom)
    }
}

// ── ScalarKind ───────────────────────────────────────────────────────────────

/// A built-in scalar recognised by fixed type identity, never by shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarKind {
    Int,
    Short,
    Byte,
    Long,
    Float,
    Double,
    Char,
    Bool,
    String,
}

impl ScalarKind {
    /// Every scalar kind, in classification order.
    pub const ALL: [ScalarKind; 9] = [
        Self::Int,
        Self::Byte,
        Self::Long,
        Self::Double,
        Self::Float,
        Self::String,
        Self::Char,
        Self::Short,
        Self::Bool,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Short => "short",
            Self::Byte => "byte",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::Char => "char",
            Self::Bool => "bool",
            Self::String => "string",
        }
    }

    /// Map a type identity to its scalar kind.
    ///
    /// Only exact identities match; a type that merely wraps a scalar is not
    /// a scalar.
    pub fn from_type_name(name: &str) -> Option<Self> {
        match name {
            "i32" | "u32" | "isize" | "usize" => Some(Self::Int),
            "i16" | "u16" => Some(Self::Short),
            "i8" | "u8" => Some(Self::Byte),
            "i64" | "u64" | "i128" | "u128" => Some(Self::Long),
            "f32" => Some(Self::Float),
            "f64" => Some(Self::Double),
            "char" => Some(Self::Char),
            "bool" => Some(Self::Bool),
            "String" | "str" => Some(Self::String),
            _ => None,
        }
    }

    /// The canonical type identities registered for each kind.
    pub const fn type_names(&self) -> &'static [&'static str] {
        match self {
            Self::Int => &["i32", "u32", "isize", "usize"],
            Self::Short => &["i16", "u16"],
            Self::Byte => &["i8", "u8"],
            Self::Long => &["i64", "u64", "i128", "u128"],
            Self::Float => &["f32"],
            Self::Double => &["f64"],
            Self::Char => &["char"],
            Self::Bool => &["bool"],
            Self::String => &["String", "str"],
        }
    }

    /// The fixed zero/placeholder value for this kind.
    pub fn placeholder(&self) -> Scalar {
        match self {
            Self::Int => Scalar::Int(0),
            Self::Short => Scalar::Short(0),
            Self::Byte => Scalar::Byte(0),
            Self::Long => Scalar::Long(0),
            Self::Float => Scalar::Float(0.0),
            Self::Double => Scalar::Double(0.0),
            Self::Char => Scalar::Char('c'),
            Self::Bool => Scalar::Bool(false),
            Self::String => Scalar::Str(String::new()),
        }
    }

    pub const fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::Int | Self::Short | Self::Byte | Self::Long | Self::Float | Self::Double
        )
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Capability ───────────────────────────────────────────────────────────────

/// A container capability a type declares, inherited by its subtypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    /// Variable-size homogeneous sequence.
    Collection,
    /// Key/value associative container.
    Map,
}

impl Capability {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Collection => "collection",
            Self::Map => "map",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Capability {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "collection" | "list" | "set" => Ok(Self::Collection),
            "map" | "dict" => Ok(Self::Map),
            other => Err(DomainError::InvalidDescriptor {
                name: other.to_string(),
                reason: "unknown capability (expected collection or map)".into(),
            }),
        }
    }
}

// ── Category ─────────────────────────────────────────────────────────────────

/// The value category the classifier assigns to a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "category", content = "scalar", rename_all = "lowercase")]
pub enum Category {
    Scalar(ScalarKind),
    Enum,
    Array,
    Collection,
    Map,
    Composite,
}

impl Category {
    /// Whether values of this category render as a JSON array.
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Self::Array | Self::Collection)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(kind) => write!(f, "scalar:{kind}"),
            Self::Enum => f.write_str("enum"),
            Self::Array => f.write_str("array"),
            Self::Collection => f.write_str("collection"),
            Self::Map => f.write_str("map"),
            Self::Composite => f.write_str("composite"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_identity_is_exact() {
        assert_eq!(ScalarKind::from_type_name("i32"), Some(ScalarKind::Int));
        assert_eq!(ScalarKind::from_type_name("u8"), Some(ScalarKind::Byte));
        assert_eq!(ScalarKind::from_type_name("String"), Some(ScalarKind::String));
        assert_eq!(ScalarKind::from_type_name("string"), None);
        assert_eq!(ScalarKind::from_type_name("Wrapper<i32>"), None);
    }

    #[test]
    fn every_registered_identity_maps_back_to_its_kind() {
        for kind in ScalarKind::ALL {
            for name in kind.type_names() {
                assert_eq!(ScalarKind::from_type_name(name), Some(kind));
            }
        }
    }

    #[test]
    fn type_name_rejects_blank() {
        assert!(TypeName::try_new("").is_err());
        assert!(TypeName::try_new(" Padded").is_err());
        assert!(TypeName::try_new("acme::Person").is_ok());
    }

    #[test]
    #[should_panic]
    fn type_name_new_panics_on_blank() {
        TypeName::new("   ");
    }

    #[test]
    fn capability_parses_aliases() {
        assert_eq!("list".parse::<Capability>().unwrap(), Capability::Collection);
        assert_eq!("MAP".parse::<Capability>().unwrap(), Capability::Map);
        assert!("tree".parse::<Capability>().is_err());
    }

    #[test]
    fn category_display() {
        assert_eq!(Category::Scalar(ScalarKind::Long).to_string(), "scalar:long");
        assert_eq!(Category::Composite.to_string(), "composite");
    }
}
