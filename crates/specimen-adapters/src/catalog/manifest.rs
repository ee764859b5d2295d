//! Manifest file format.
//!
//! ```toml
//! [[types]]
//! name    = "Entity"
//!
//! [[types.fields]]
//! name = "id"
//! type = "i64"
//!
//! [[types]]
//! name    = "UserVo"
//! extends = "Entity"
//!
//! [[types.fields]]
//! name          = "id"
//! type          = "String"
//! response_hint = "用户ID"
//! example       = "1001"
//!
//! [[types.fields]]
//! name = "roles"
//! type = "Vec"
//! args = ["Role"]
//!
//! [[types]]
//! name      = "Role"
//! kind      = "enum"                # composite | enum | array | collection | map
//! constants = ["ADMIN", "GUEST"]
//!
//! # Hints for fields declared elsewhere, keyed by declaring type.
//! [[hints]]
//! type  = "Entity"
//! field = "id"
//! param = "primary key"
//! ```
//!
//! The same structure is accepted as JSON.

use std::path::Path;

use serde::Deserialize;
use specimen_core::domain::{
    Capability, DocHint, DomainError, FieldDescriptor, ResponseHint, TypeDescriptor, TypeName,
};

/// Encoding of a manifest file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Toml,
    Json,
}

impl ManifestFormat {
    /// `None` for files that are not manifests.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("toml") {
            Some(Self::Toml)
        } else if ext.eq_ignore_ascii_case("json") {
            Some(Self::Json)
        } else {
            None
        }
    }
}

/// One deserialised manifest file.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ManifestFile {
    #[serde(default)]
    pub types: Vec<TypeEntry>,
    #[serde(default)]
    pub hints: Vec<HintEntry>,
}

/// One `[[types]]` entry.
#[derive(Debug, Deserialize, Clone)]
pub struct TypeEntry {
    pub name: String,
    pub extends: Option<String>,
    #[serde(default)]
    pub kind: TypeKind,
    /// Enum constants in declaration order. Blank names are kept; synthesis
    /// stops the listing at the first one.
    #[serde(default)]
    pub constants: Vec<String>,
    /// Element type of an array.
    pub component: Option<String>,
    /// Extra capabilities (`"collection"`, `"map"`), inherited by subtypes.
    #[serde(default)]
    pub capabilities: Vec<String>,
    #[serde(default)]
    pub fields: Vec<FieldEntry>,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    #[default]
    Composite,
    Enum,
    Array,
    Collection,
    Map,
}

/// One `[[types.fields]]` entry.
#[derive(Debug, Deserialize, Clone)]
pub struct FieldEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    /// Type arguments for generic container fields (`Vec<T>` → `["T"]`).
    #[serde(default)]
    pub args: Vec<String>,
    pub param_hint: Option<String>,
    pub response_hint: Option<String>,
    /// Only meaningful next to `response_hint`.
    pub example: Option<String>,
}

/// One `[[hints]]` entry.
#[derive(Debug, Deserialize, Clone)]
pub struct HintEntry {
    #[serde(rename = "type")]
    pub type_name: String,
    pub field: String,
    pub param: Option<String>,
    pub response: Option<String>,
    pub example: Option<String>,
}

impl ManifestFile {
    pub fn parse(raw: &str, format: ManifestFormat) -> Result<Self, String> {
        match format {
            ManifestFormat::Toml => toml::from_str(raw).map_err(|e| e.to_string()),
            ManifestFormat::Json => serde_json::from_str(raw).map_err(|e| e.to_string()),
        }
    }

    /// Convert every entry, failing on the first invalid one.
    pub fn into_parts(self) -> Result<ManifestParts, DomainError> {
        let types = self
            .types
            .into_iter()
            .map(TypeEntry::into_descriptor)
            .collect::<Result<Vec<_>, _>>()?;
        let hints = self
            .hints
            .into_iter()
            .map(HintEntry::into_hint)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ManifestParts { types, hints })
    }
}

/// Validated content of one manifest file.
#[derive(Debug, Clone, Default)]
pub struct ManifestParts {
    pub types: Vec<TypeDescriptor>,
    /// `(declaring type, field, hint)`
    pub hints: Vec<(TypeName, String, DocHint)>,
}

impl TypeEntry {
    pub fn into_descriptor(self) -> Result<TypeDescriptor, DomainError> {
        let name = TypeName::try_new(self.name)?;
        let invalid = |reason: &str| DomainError::InvalidDescriptor {
            name: name.to_string(),
            reason: reason.to_string(),
        };

        if self.kind != TypeKind::Enum && !self.constants.is_empty() {
            return Err(invalid("`constants` requires kind = \"enum\""));
        }
        if self.kind != TypeKind::Array && self.component.is_some() {
            return Err(invalid("`component` requires kind = \"array\""));
        }

        let mut builder = match self.kind {
            TypeKind::Composite => TypeDescriptor::composite(name.clone()),
            TypeKind::Enum => TypeDescriptor::enumeration(name.clone(), self.constants),
            TypeKind::Array => {
                let component = self
                    .component
                    .ok_or_else(|| invalid("kind = \"array\" needs a `component`"))?;
                TypeDescriptor::array(name.clone(), TypeName::try_new(component)?)
            }
            TypeKind::Collection => TypeDescriptor::collection(name.clone()),
            TypeKind::Map => TypeDescriptor::map(name.clone()),
        };

        if let Some(supertype) = self.extends {
            builder = builder.extends(TypeName::try_new(supertype)?);
        }
        for capability in &self.capabilities {
            builder = builder.capability(capability.parse::<Capability>()?);
        }
        for field in self.fields {
            builder = builder.field(field.into_descriptor(&name)?);
        }

        builder.build()
    }
}

impl FieldEntry {
    fn into_descriptor(self, declaring: &TypeName) -> Result<FieldDescriptor, DomainError> {
        if self.example.is_some() && self.response_hint.is_none() {
            return Err(DomainError::InvalidDescriptor {
                name: declaring.to_string(),
                reason: format!("field '{}' has an `example` but no `response_hint`", self.name),
            });
        }

        let args = self
            .args
            .into_iter()
            .map(TypeName::try_new)
            .collect::<Result<Vec<_>, _>>()?;
        let hint = DocHint {
            param: self.param_hint,
            response: self.response_hint.map(|value| ResponseHint {
                value,
                example: self.example,
            }),
        };

        Ok(
            FieldDescriptor::new(declaring.clone(), self.name, TypeName::try_new(self.type_name)?)
                .with_args(args)
                .with_hint(hint),
        )
    }
}

impl HintEntry {
    fn into_hint(self) -> Result<(TypeName, String, DocHint), DomainError> {
        let declaring = TypeName::try_new(self.type_name)?;
        if self.example.is_some() && self.response.is_none() {
            return Err(DomainError::InvalidDescriptor {
                name: declaring.to_string(),
                reason: format!("hint for '{}' has an `example` but no `response`", self.field),
            });
        }

        let hint = DocHint {
            param: self.param,
            response: self.response.map(|value| ResponseHint {
                value,
                example: self.example,
            }),
        };
        Ok((declaring, self.field, hint))
    }
}
