//! JSON renderer for example trees.
//!
//! Serialization streams straight from the [`ExampleValue`] tree, so a
//! composite whose subtype shadows a supertype field keeps both entries in
//! the output text, in enumeration order.

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use specimen_core::{
    application::{ApplicationError, ports::ValueRenderer},
    domain::{ExampleValue, Scalar},
    error::SpecimenResult,
};
use tracing::debug;

use super::SerializationPolicy;

/// Renders example trees as JSON under a [`SerializationPolicy`].
#[derive(Debug, Clone, Default)]
pub struct JsonRenderer {
    policy: SerializationPolicy,
    pretty: bool,
}

impl JsonRenderer {
    /// Compact output with the default policy.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(mut self, policy: SerializationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Indent the output over multiple lines.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn policy(&self) -> &SerializationPolicy {
        &self.policy
    }
}

impl ValueRenderer for JsonRenderer {
    fn render(&self, value: &ExampleValue) -> SpecimenResult<String> {
        let view = PolicyView {
            value,
            policy: &self.policy,
        };
        let rendered = if self.pretty {
            serde_json::to_string_pretty(&view)
        } else {
            serde_json::to_string(&view)
        };

        let text = rendered.map_err(|e| ApplicationError::RenderingFailed {
            reason: e.to_string(),
        })?;
        debug!(bytes = text.len(), pretty = self.pretty, "rendered example as JSON");
        Ok(text)
    }
}

// ── Serialization ────────────────────────────────────────────────────────────

struct PolicyView<'a> {
    value: &'a ExampleValue,
    policy: &'a SerializationPolicy,
}

impl<'a> PolicyView<'a> {
    fn nested<'b>(&'b self, value: &'b ExampleValue) -> PolicyView<'b> {
        PolicyView {
            value,
            policy: self.policy,
        }
    }

    /// JSON object keys must be strings.
    fn key_text<E: serde::ser::Error>(&self, key: &ExampleValue) -> Result<String, E> {
        match key {
            ExampleValue::Null => Ok("null".into()),
            ExampleValue::Scalar(scalar) => Ok(scalar.to_string()),
            ExampleValue::Enum(listing) => Ok(listing.clone()),
            nested => serde_json::to_string(&self.nested(nested)).map_err(E::custom),
        }
    }
}

impl Serialize for PolicyView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.value {
            ExampleValue::Null => serializer.serialize_unit(),
            ExampleValue::Scalar(scalar) => serialize_scalar(scalar, serializer),
            ExampleValue::Enum(listing) => serializer.serialize_str(listing),
            ExampleValue::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(&self.nested(item))?;
                }
                seq.end()
            }
            ExampleValue::Mapping(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    let key = self.key_text::<S::Error>(key)?;
                    map.serialize_entry(&key, &self.nested(value))?;
                }
                map.end()
            }
            ExampleValue::Composite(entries) => {
                let mut map = serializer.serialize_map(None)?;
                for entry in entries {
                    if !entry.value.is_null() {
                        map.serialize_entry(&entry.name, &self.nested(&entry.value))?;
                        continue;
                    }
                    match self.policy.null_replacement(entry.category) {
                        Some(replacement) => {
                            map.serialize_entry(&entry.name, &self.nested(&replacement))?
                        }
                        None if self.policy.write_nulls => map.serialize_entry(&entry.name, &())?,
                        None => {}
                    }
                }
                map.end()
            }
        }
    }
}

fn serialize_scalar<S: Serializer>(scalar: &Scalar, serializer: S) -> Result<S::Ok, S::Error> {
    match scalar {
        Scalar::Int(v) => serializer.serialize_i32(*v),
        Scalar::Short(v) => serializer.serialize_i16(*v),
        Scalar::Byte(v) => serializer.serialize_i8(*v),
        Scalar::Long(v) => serializer.serialize_i64(*v),
        Scalar::Float(v) => serializer.serialize_f32(*v),
        Scalar::Double(v) => serializer.serialize_f64(*v),
        Scalar::Char(v) => serializer.serialize_char(*v),
        Scalar::Bool(v) => serializer.serialize_bool(*v),
        Scalar::Str(v) => serializer.serialize_str(v),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use specimen_core::domain::{Category, FieldValue, ScalarKind};

    fn render(value: &ExampleValue) -> String {
        JsonRenderer::new().render(value).unwrap()
    }

    fn entry(name: &str, category: Option<Category>, value: ExampleValue) -> FieldValue {
        FieldValue::new(name, category, value)
    }

    #[test]
    fn person_renders_compactly() {
        let value = ExampleValue::Composite(vec![
            entry(
                "name",
                Some(Category::Scalar(ScalarKind::String)),
                ExampleValue::str("full name"),
            ),
            entry("age", Some(Category::Scalar(ScalarKind::Int)), Scalar::Int(0).into()),
            entry(
                "tags",
                Some(Category::Collection),
                ExampleValue::Sequence(vec![ExampleValue::str("")]),
            ),
        ]);

        assert_eq!(render(&value), r#"{"name":"full name","age":0,"tags":[""]}"#);
    }

    #[test]
    fn scalars_render_as_json_primitives() {
        assert_eq!(render(&Scalar::Double(0.0).into()), "0.0");
        assert_eq!(render(&Scalar::Float(0.0).into()), "0.0");
        assert_eq!(render(&Scalar::Char('c').into()), r#""c""#);
        assert_eq!(render(&Scalar::Bool(false).into()), "false");
        assert_eq!(render(&ExampleValue::Enum("|A|B|".into())), r#""|A|B|""#);
        assert_eq!(render(&ExampleValue::Null), "null");
    }

    #[test]
    fn null_entries_are_coerced_by_category() {
        let value = ExampleValue::Composite(vec![
            entry("items", Some(Category::Collection), ExampleValue::Null),
            entry("label", Some(Category::Scalar(ScalarKind::String)), ExampleValue::Null),
            entry("flag", Some(Category::Scalar(ScalarKind::Bool)), ExampleValue::Null),
            entry("count", Some(Category::Scalar(ScalarKind::Long)), ExampleValue::Null),
            entry("lookup", Some(Category::Map), ExampleValue::Null),
            entry("next", Some(Category::Composite), ExampleValue::Null),
            entry("ghost", None, ExampleValue::Null),
        ]);

        assert_eq!(
            render(&value),
            r#"{"items":[],"label":"","flag":false,"count":0,"lookup":null,"next":null,"ghost":null}"#
        );
    }

    #[test]
    fn nulls_can_be_left_out() {
        let policy = SerializationPolicy {
            write_nulls: false,
            ..SerializationPolicy::raw()
        };
        let value = ExampleValue::Composite(vec![
            entry("a", Some(Category::Composite), ExampleValue::Null),
            entry("b", Some(Category::Scalar(ScalarKind::Int)), Scalar::Int(0).into()),
        ]);

        let text = JsonRenderer::new().with_policy(policy).render(&value).unwrap();
        assert_eq!(text, r#"{"b":0}"#);
    }

    #[test]
    fn shadowed_entries_are_both_written() {
        let value = ExampleValue::Composite(vec![
            entry("id", Some(Category::Scalar(ScalarKind::String)), ExampleValue::str("")),
            entry("id", Some(Category::Scalar(ScalarKind::Long)), Scalar::Long(0).into()),
        ]);

        assert_eq!(render(&value), r#"{"id":"","id":0}"#);
    }

    #[test]
    fn mapping_keys_are_stringified() {
        let value = ExampleValue::Mapping(vec![(Scalar::Long(0).into(), ExampleValue::str(""))]);
        assert_eq!(render(&value), r#"{"0":""}"#);

        let value = ExampleValue::Mapping(vec![(
            ExampleValue::Composite(vec![entry(
                "k",
                Some(Category::Scalar(ScalarKind::Int)),
                Scalar::Int(0).into(),
            )]),
            ExampleValue::Null,
        )]);
        assert_eq!(render(&value), r#"{"{\"k\":0}":null}"#);
    }

    #[test]
    fn nulls_inside_sequences_are_kept() {
        let value = ExampleValue::Sequence(vec![ExampleValue::Null]);
        assert_eq!(render(&value), "[null]");
    }

    #[test]
    fn pretty_output_spans_lines() {
        let value = ExampleValue::Composite(vec![entry(
            "age",
            Some(Category::Scalar(ScalarKind::Int)),
            Scalar::Int(0).into(),
        )]);

        let text = JsonRenderer::new().pretty(true).render(&value).unwrap();
        assert_eq!(text, "{\n  \"age\": 0\n}");
    }
}
