//! Type and field descriptors.
//!
//! A [`TypeDescriptor`] describes the *shape* of a type, never an instance of
//! it. Descriptors refer to other types by [`TypeName`] only, so cyclic type
//! graphs (`Node { next: Node }`) need no special representation.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::value_objects::{Capability, ScalarKind, TypeName};

// ============================================================================
// DocHint
// ============================================================================

/// A response-side documentation hint: a description plus an optional example.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResponseHint {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

/// Author-supplied override metadata attached to a field.
///
/// Only consulted for string-typed fields of composite types.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DocHint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<ResponseHint>,
}

impl DocHint {
    /// A request-parameter hint: its value is used verbatim.
    pub fn param(value: impl Into<String>) -> Self {
        Self {
            param: Some(value.into()),
            response: None,
        }
    }

    /// A response-property hint without an example.
    pub fn response(value: impl Into<String>) -> Self {
        Self {
            param: None,
            response: Some(ResponseHint {
                value: value.into(),
                example: None,
            }),
        }
    }

    /// Attach an example to the response hint, creating an empty one if needed.
    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.response.get_or_insert_with(ResponseHint::default).example = Some(example.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.param.is_none() && self.response.is_none()
    }
}

// ============================================================================
// FieldDescriptor
// ============================================================================

/// One declared field: `(name, type, declaring type, type arguments, hint)`.
///
/// `type_args` holds the generic arguments of the field's declared type, e.g.
/// `tags: Vec<String>` has type `Vec` and arguments `[String]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    name: String,
    ty: TypeName,
    declaring: TypeName,
    type_args: Vec<TypeName>,
    hint: DocHint,
}

impl FieldDescriptor {
    pub fn new(declaring: TypeName, name: impl Into<String>, ty: TypeName) -> Self {
        Self {
            name: name.into(),
            ty,
            declaring,
            type_args: Vec::new(),
            hint: DocHint::default(),
        }
    }

    pub fn with_args(mut self, args: impl IntoIterator<Item = TypeName>) -> Self {
        self.type_args = args.into_iter().collect();
        self
    }

    pub fn with_hint(mut self, hint: DocHint) -> Self {
        self.hint = hint;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_name(&self) -> &TypeName {
        &self.ty
    }

    pub fn declaring_type(&self) -> &TypeName {
        &self.declaring
    }

    pub fn type_args(&self) -> &[TypeName] {
        &self.type_args
    }

    pub fn hint(&self) -> &DocHint {
        &self.hint
    }
}

// ============================================================================
// EnumConstant
// ============================================================================

/// A named constant of an enumeration, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumConstant {
    ordinal: usize,
    name: String,
}

impl EnumConstant {
    pub fn new(ordinal: usize, name: impl Into<String>) -> Self {
        Self {
            ordinal,
            name: name.into(),
        }
    }

    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// Retrieve the constant's name.
    ///
    /// Externally supplied metadata may carry constants without a usable
    /// name; those fail here instead of at load time.
    pub fn name(&self, enum_name: &TypeName) -> Result<&str, DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::UnnamedEnumConstant {
                enum_name: enum_name.to_string(),
                ordinal: self.ordinal,
            });
        }
        Ok(&self.name)
    }
}

// ============================================================================
// TypeDescriptor
// ============================================================================

/// Which structural facts a descriptor carries.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Shape {
    Scalar,
    Enum(Vec<EnumConstant>),
    Array(TypeName),
    Object,
}

/// Metadata handle describing a type's shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    name: TypeName,
    supertype: Option<TypeName>,
    capabilities: BTreeSet<Capability>,
    shape: Shape,
    fields: Vec<FieldDescriptor>,
}

impl TypeDescriptor {
    /// Descriptor for a built-in scalar identity (`i32`, `String`, ...).
    pub fn scalar(name: TypeName) -> Self {
        Self {
            name,
            supertype: None,
            capabilities: BTreeSet::new(),
            shape: Shape::Scalar,
            fields: Vec::new(),
        }
    }

    /// Start building a composite (struct/class) descriptor.
    pub fn composite(name: TypeName) -> TypeDescriptorBuilder {
        TypeDescriptorBuilder::new(name, Shape::Object)
    }

    /// Start building an enumeration with the given constants in order.
    pub fn enumeration<I, S>(name: TypeName, constants: I) -> TypeDescriptorBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let constants = constants
            .into_iter()
            .enumerate()
            .map(|(ordinal, c)| EnumConstant::new(ordinal, c))
            .collect();
        TypeDescriptorBuilder::new(name, Shape::Enum(constants))
    }

    /// Start building a fixed-size array with a known component type.
    pub fn array(name: TypeName, component: TypeName) -> TypeDescriptorBuilder {
        TypeDescriptorBuilder::new(name, Shape::Array(component))
    }

    /// Start building a raw collection type (element type comes from the field).
    pub fn collection(name: TypeName) -> TypeDescriptorBuilder {
        TypeDescriptorBuilder::new(name, Shape::Object).capability(Capability::Collection)
    }

    /// Start building a raw map type (key/value types come from the field).
    pub fn map(name: TypeName) -> TypeDescriptorBuilder {
        TypeDescriptorBuilder::new(name, Shape::Object).capability(Capability::Map)
    }

    /// A raw container with no fields and no supertype, which needs no
    /// validation.
    pub fn container(name: TypeName, capability: Capability) -> Self {
        Self {
            name,
            supertype: None,
            capabilities: BTreeSet::from([capability]),
            shape: Shape::Object,
            fields: Vec::new(),
        }
    }

    pub fn name(&self) -> &TypeName {
        &self.name
    }

    pub fn supertype(&self) -> Option<&TypeName> {
        self.supertype.as_ref()
    }

    /// Capabilities declared on this level only (not inherited ones).
    pub fn capabilities(&self) -> impl Iterator<Item = Capability> + '_ {
        self.capabilities.iter().copied()
    }

    pub fn declares(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }

    /// The scalar kind, if this descriptor's identity is a built-in scalar.
    pub fn scalar_kind(&self) -> Option<ScalarKind> {
        self.name.scalar_kind()
    }

    pub fn is_enum(&self) -> bool {
        matches!(self.shape, Shape::Enum(_))
    }

    /// Enum constants in declaration order; empty for non-enums.
    pub fn constants(&self) -> &[EnumConstant] {
        match &self.shape {
            Shape::Enum(constants) => constants,
            _ => &[],
        }
    }

    /// Component type for arrays.
    pub fn component(&self) -> Option<&TypeName> {
        match &self.shape {
            Shape::Array(component) => Some(component),
            _ => None,
        }
    }

    /// Fields declared on this level only, in declaration order.
    pub fn declared_fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Whether this descriptor was built as a scalar placeholder.
    pub fn is_scalar_shape(&self) -> bool {
        matches!(self.shape, Shape::Scalar)
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for [`TypeDescriptor`]; `build` validates structural invariants.
#[derive(Debug, Clone)]
pub struct TypeDescriptorBuilder {
    name: TypeName,
    supertype: Option<TypeName>,
    capabilities: BTreeSet<Capability>,
    shape: Shape,
    fields: Vec<FieldDescriptor>,
}

impl TypeDescriptorBuilder {
    fn new(name: TypeName, shape: Shape) -> Self {
        Self {
            name,
            supertype: None,
            capabilities: BTreeSet::new(),
            shape,
            fields: Vec::new(),
        }
    }

    pub fn extends(mut self, supertype: TypeName) -> Self {
        self.supertype = Some(supertype);
        self
    }

    pub fn capability(mut self, capability: Capability) -> Self {
        self.capabilities.insert(capability);
        self
    }

    /// Add a declared field. Its declaring type must be this type.
    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    /// Shorthand for a field without type arguments or hints.
    pub fn simple_field(self, name: impl Into<String>, ty: TypeName) -> Self {
        let declaring = self.name.clone();
        self.field(FieldDescriptor::new(declaring, name, ty))
    }

    pub fn build(self) -> Result<TypeDescriptor, DomainError> {
        if self.supertype.as_ref() == Some(&self.name) {
            return Err(DomainError::CyclicInheritance {
                name: self.name.to_string(),
            });
        }

        let mut seen = HashSet::new();
        for field in &self.fields {
            if field.declaring_type() != &self.name {
                return Err(DomainError::InvalidDescriptor {
                    name: self.name.to_string(),
                    reason: format!(
                        "field '{}' is declared by '{}'",
                        field.name(),
                        field.declaring_type()
                    ),
                });
            }
            if field.name().trim().is_empty() {
                return Err(DomainError::InvalidDescriptor {
                    name: self.name.to_string(),
                    reason: "field names cannot be blank".into(),
                });
            }
            if !seen.insert(field.name()) {
                return Err(DomainError::DuplicateField {
                    type_name: self.name.to_string(),
                    field: field.name().to_string(),
                });
            }
        }

        Ok(TypeDescriptor {
            name: self.name,
            supertype: self.supertype,
            capabilities: self.capabilities,
            shape: self.shape,
            fields: self.fields,
        })
    }
}
