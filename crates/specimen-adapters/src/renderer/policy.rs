//! Null-coercion policy applied when rendering composite entries.

use serde::{Deserialize, Serialize};
use specimen_core::domain::{Category, ExampleValue, Scalar, ScalarKind};

/// How `null` entries of a composite are written.
///
/// Synthesis leaves `null` behind for depth cutoffs, unresolved generics and
/// unknown types. Each switch replaces such a `null` based on the category of
/// the entry's declared type. Nulls inside sequences and maps, and entries
/// whose type is unknown, are never replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerializationPolicy {
    /// Write remaining null entries as `null` instead of leaving them out.
    pub write_nulls: bool,
    /// Array and collection entries render as `[]`.
    pub null_sequence_as_empty: bool,
    /// String and character entries render as `""`.
    pub null_string_as_empty: bool,
    /// Boolean entries render as `false`.
    pub null_bool_as_false: bool,
    /// Numeric entries render as `0`.
    pub null_number_as_zero: bool,
}

impl Default for SerializationPolicy {
    fn default() -> Self {
        Self {
            write_nulls: true,
            null_sequence_as_empty: true,
            null_string_as_empty: true,
            null_bool_as_false: true,
            null_number_as_zero: true,
        }
    }
}

impl SerializationPolicy {
    /// No coercions; nulls are written as they are.
    pub fn raw() -> Self {
        Self {
            write_nulls: true,
            null_sequence_as_empty: false,
            null_string_as_empty: false,
            null_bool_as_false: false,
            null_number_as_zero: false,
        }
    }

    /// The value written in place of a null entry of `category`, if any.
    pub fn null_replacement(&self, category: Option<Category>) -> Option<ExampleValue> {
        match category? {
            Category::Array | Category::Collection if self.null_sequence_as_empty => {
                Some(ExampleValue::Sequence(Vec::new()))
            }
            Category::Scalar(ScalarKind::String | ScalarKind::Char) if self.null_string_as_empty => {
                Some(ExampleValue::str(""))
            }
            Category::Scalar(ScalarKind::Bool) if self.null_bool_as_false => {
                Some(Scalar::Bool(false).into())
            }
            Category::Scalar(kind) if kind.is_numeric() && self.null_number_as_zero => {
                Some(Scalar::Int(0).into())
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_coerces_every_declared_category() {
        let policy = SerializationPolicy::default();

        assert_eq!(
            policy.null_replacement(Some(Category::Collection)),
            Some(ExampleValue::Sequence(vec![]))
        );
        assert_eq!(
            policy.null_replacement(Some(Category::Array)),
            Some(ExampleValue::Sequence(vec![]))
        );
        assert_eq!(
            policy.null_replacement(Some(Category::Scalar(ScalarKind::Char))),
            Some(ExampleValue::str(""))
        );
        assert_eq!(
            policy.null_replacement(Some(Category::Scalar(ScalarKind::Bool))),
            Some(Scalar::Bool(false).into())
        );
        assert_eq!(
            policy.null_replacement(Some(Category::Scalar(ScalarKind::Double))),
            Some(Scalar::Int(0).into())
        );
    }

    #[test]
    fn maps_composites_and_unknown_types_stay_null() {
        let policy = SerializationPolicy::default();

        assert_eq!(policy.null_replacement(Some(Category::Map)), None);
        assert_eq!(policy.null_replacement(Some(Category::Composite)), None);
        assert_eq!(policy.null_replacement(Some(Category::Enum)), None);
        assert_eq!(policy.null_replacement(None), None);
    }

    #[test]
    fn raw_policy_never_coerces() {
        let policy = SerializationPolicy::raw();

        assert_eq!(policy.null_replacement(Some(Category::Collection)), None);
        assert_eq!(
            policy.null_replacement(Some(Category::Scalar(ScalarKind::String))),
            None
        );
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let policy: SerializationPolicy =
            serde_json::from_str(r#"{ "null_bool_as_false": false }"#).unwrap();

        assert!(!policy.null_bool_as_false);
        assert!(policy.null_sequence_as_empty);
        assert!(policy.write_nulls);
    }
}
