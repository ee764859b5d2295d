//! Example Synthesizer - recursive descent over a type's shape.
//!
//! Every node is classified, then handled by category:
//!
//! - scalars and enums produce a fixed placeholder
//! - arrays, collections and maps produce a single element (or entry)
//! - composites produce one entry per flattened field
//!
//! The depth counter is the only guard against cyclic type graphs. There is
//! no visited set, so `Node { next: Node }` expands to the ceiling and then
//! stops with `Null`. Deeply nested acyclic types are cut at the same point.
//!
//! Synthesis never fails. Unknown types, unresolved generics and unreadable
//! enum constants all degrade to `Null` or a partial value.

use tracing::{debug, error, trace, warn};

use crate::application::ApplicationError;
use crate::application::ports::{HintResolver, TypeCatalog};
use crate::application::services::{FieldEnumerator, TypeClassifier};
use crate::domain::{
    Category, ExampleValue, FieldDescriptor, FieldValue, ScalarKind, TypeDescriptor, TypeName,
};
use crate::error::SpecimenResult;

/// Nesting level at which synthesis stops and yields `Null`.
pub const DEFAULT_MAX_DEPTH: usize = 5;

/// Suffix wrapped around a response hint's example.
const EXAMPLE_OPEN: &str = "【如: ";
const EXAMPLE_CLOSE: &str = "】";

/// Stateless synthesizer borrowing a catalog and a hint resolver.
///
/// Each call to [`synthesize`](Self::synthesize) carries its own depth, so one
/// synthesizer can serve any number of calls, from any number of threads.
#[derive(Clone, Copy)]
pub struct ExampleSynthesizer<'a> {
    catalog: &'a dyn TypeCatalog,
    hints: &'a dyn HintResolver,
    max_depth: usize,
}

impl<'a> ExampleSynthesizer<'a> {
    pub fn new(catalog: &'a dyn TypeCatalog, hints: &'a dyn HintResolver) -> Self {
        Self {
            catalog,
            hints,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Override the depth ceiling.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Synthesize the type registered under `name`, starting at depth 0 with
    /// no field context.
    pub fn synthesize_named(&self, name: &TypeName) -> SpecimenResult<ExampleValue> {
        let ty = self.lookup(name)?;
        Ok(self.synthesize(None, ty, 0))
    }

    /// Synthesize a field's declared type, with the field supplying the
    /// generic arguments.
    pub fn synthesize_field(&self, field: &FieldDescriptor) -> SpecimenResult<ExampleValue> {
        let ty = self.lookup(field.type_name())?;
        Ok(self.synthesize(Some(field), ty, 0))
    }

    /// Build the example value for `ty` at `depth`.
    ///
    /// `field` is the field through which `ty` was reached, if any. Only
    /// collections and maps read it, for their element types.
    pub fn synthesize(
        &self,
        field: Option<&FieldDescriptor>,
        ty: &TypeDescriptor,
        depth: usize,
    ) -> ExampleValue {
        if depth >= self.max_depth {
            warn!(
                type_name = %ty.name(),
                max_depth = self.max_depth,
                "maximum nesting depth reached; deeper levels are omitted (check for cyclic references)"
            );
            return ExampleValue::Null;
        }
        let depth = depth + 1;
        trace!(type_name = %ty.name(), depth, "synthesizing");

        match TypeClassifier::new(self.catalog).classify(ty) {
            Category::Scalar(kind) => kind.placeholder().into(),
            Category::Enum => enum_listing(ty),
            Category::Array => match ty.component() {
                Some(component) => {
                    ExampleValue::Sequence(vec![self.synthesize_type(component, depth)])
                }
                None => ExampleValue::Null,
            },
            Category::Collection => match field.map(FieldDescriptor::type_args) {
                Some([element, ..]) => {
                    ExampleValue::Sequence(vec![self.synthesize_type(element, depth)])
                }
                _ => {
                    debug!(type_name = %ty.name(), "collection element type unresolved");
                    ExampleValue::Null
                }
            },
            Category::Map => match field.map(FieldDescriptor::type_args) {
                Some([key, value, ..]) => ExampleValue::Mapping(vec![(
                    self.synthesize_type(key, depth),
                    self.synthesize_type(value, depth),
                )]),
                _ => {
                    debug!(type_name = %ty.name(), "map key/value types unresolved");
                    ExampleValue::Null
                }
            },
            Category::Composite => self.composite(ty, depth),
        }
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn lookup(&self, name: &TypeName) -> Result<&'a TypeDescriptor, ApplicationError> {
        self.catalog
            .lookup(name)
            .ok_or_else(|| ApplicationError::UnknownType {
                name: name.to_string(),
            })
    }

    /// Synthesize an element type reached without a field.
    fn synthesize_type(&self, name: &TypeName, depth: usize) -> ExampleValue {
        match self.catalog.lookup(name) {
            Some(ty) => self.synthesize(None, ty, depth),
            None => {
                warn!(type_name = %name, "type not registered; using null");
                ExampleValue::Null
            }
        }
    }

    fn composite(&self, ty: &TypeDescriptor, depth: usize) -> ExampleValue {
        let classifier = TypeClassifier::new(self.catalog);
        let entries = FieldEnumerator::new(self.catalog)
            .all_fields(ty)
            .into_iter()
            .map(|field| {
                let Some(field_ty) = self.catalog.lookup(field.type_name()) else {
                    warn!(
                        type_name = %ty.name(),
                        field = field.name(),
                        field_type = %field.type_name(),
                        "field type not registered; using null"
                    );
                    return FieldValue::new(field.name(), None, ExampleValue::Null);
                };

                let category = classifier.classify(field_ty);
                let hinted = if category == Category::Scalar(ScalarKind::String) {
                    self.hinted_string(field)
                } else {
                    None
                };
                let value =
                    hinted.unwrap_or_else(|| self.synthesize(Some(field), field_ty, depth));

                FieldValue::new(field.name(), Some(category), value)
            })
            .collect();

        ExampleValue::Composite(entries)
    }

    /// The documented value of a string field, if it carries a hint.
    fn hinted_string(&self, field: &FieldDescriptor) -> Option<ExampleValue> {
        if self.hints.has_param_hint(field) {
            return Some(ExampleValue::str(self.hints.param_hint_value(field)));
        }
        if self.hints.has_response_hint(field) {
            let mut value = self.hints.response_hint_value(field);
            let example = self.hints.response_hint_example(field);
            if !example.trim().is_empty() {
                value.push_str(EXAMPLE_OPEN);
                value.push_str(&example);
                value.push_str(EXAMPLE_CLOSE);
            }
            return Some(ExampleValue::str(value));
        }
        None
    }
}

/// `|A|B|` for constants `A`, `B`. Stops at the first unreadable constant.
fn enum_listing(ty: &TypeDescriptor) -> ExampleValue {
    let mut listing = String::from("|");
    for constant in ty.constants() {
        match constant.name(ty.name()) {
            Ok(name) => {
                listing.push_str(name);
                listing.push('|');
            }
            Err(err) => {
                error!(error = %err, "failed to read enum constants; listing is partial");
                break;
            }
        }
    }
    ExampleValue::Enum(listing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockHintResolver;
    use crate::application::services::DescriptorHints;
    use crate::domain::{DocHint, Scalar, TypeRegistry};

    fn name(s: &str) -> TypeName {
        TypeName::new(s)
    }

    fn insert(registry: &mut TypeRegistry, descriptor: TypeDescriptor) {
        registry.insert(descriptor).unwrap();
    }

    fn field(declaring: &str, field: &str, ty: &str) -> FieldDescriptor {
        FieldDescriptor::new(name(declaring), field, name(ty))
    }

    fn synthesize(registry: &TypeRegistry, ty: &str) -> ExampleValue {
        ExampleSynthesizer::new(registry, &DescriptorHints)
            .synthesize_named(&name(ty))
            .unwrap()
    }

    /// `Person { name: String (param "full name"), age: i32, tags: Vec<String> }`
    fn person_registry() -> TypeRegistry {
        let mut registry = TypeRegistry::with_builtins();
        insert(
            &mut registry,
            TypeDescriptor::composite(name("Person"))
                .field(field("Person", "name", "String").with_hint(DocHint::param("full name")))
                .simple_field("age", name("i32"))
                .field(field("Person", "tags", "Vec").with_args([name("String")]))
                .build()
                .unwrap(),
        );
        registry
    }

    // ========================================================================
    // Scalars and Enums
    // ========================================================================

    #[test]
    fn scalars_produce_fixed_placeholders() {
        let registry = TypeRegistry::with_builtins();
        let cases = [
            ("i32", Scalar::Int(0)),
            ("u16", Scalar::Short(0)),
            ("u8", Scalar::Byte(0)),
            ("i64", Scalar::Long(0)),
            ("f32", Scalar::Float(0.0)),
            ("f64", Scalar::Double(0.0)),
            ("char", Scalar::Char('c')),
            ("bool", Scalar::Bool(false)),
            ("String", Scalar::Str(String::new())),
        ];

        for (ty, expected) in cases {
            assert_eq!(synthesize(&registry, ty), ExampleValue::Scalar(expected), "{ty}");
        }
    }

    #[test]
    fn scalar_ignores_field_context() {
        let registry = TypeRegistry::with_builtins();
        let synthesizer = ExampleSynthesizer::new(&registry, &DescriptorHints);
        let context = field("Holder", "count", "i32").with_args([name("String")]);
        let i32_ty = registry.get(&name("i32")).unwrap();

        assert_eq!(
            synthesizer.synthesize(Some(&context), i32_ty, 0),
            synthesizer.synthesize(None, i32_ty, 0)
        );
    }

    #[test]
    fn enum_lists_constants_with_pipes() {
        let mut registry = TypeRegistry::with_builtins();
        insert(
            &mut registry,
            TypeDescriptor::enumeration(name("Status"), ["ACTIVE", "LOCKED", "DELETED"])
                .build()
                .unwrap(),
        );

        assert_eq!(
            synthesize(&registry, "Status"),
            ExampleValue::Enum("|ACTIVE|LOCKED|DELETED|".into())
        );
    }

    #[test]
    fn enum_with_unreadable_constant_is_partial() {
        let mut registry = TypeRegistry::with_builtins();
        insert(
            &mut registry,
            TypeDescriptor::enumeration(name("Broken"), ["A", "", "C"])
                .build()
                .unwrap(),
        );

        assert_eq!(synthesize(&registry, "Broken"), ExampleValue::Enum("|A|".into()));
    }

    // ========================================================================
    // Containers
    // ========================================================================

    #[test]
    fn array_has_exactly_one_element() {
        let mut registry = TypeRegistry::with_builtins();
        insert(
            &mut registry,
            TypeDescriptor::array(name("[i64]"), name("i64")).build().unwrap(),
        );

        assert_eq!(
            synthesize(&registry, "[i64]"),
            ExampleValue::Sequence(vec![Scalar::Long(0).into()])
        );
    }

    #[test]
    fn raw_collection_without_field_is_null() {
        let registry = TypeRegistry::with_builtins();
        assert!(synthesize(&registry, "Vec").is_null());
        assert!(synthesize(&registry, "HashMap").is_null());
    }

    #[test]
    fn raw_and_parameterized_collection_fields() {
        let mut registry = TypeRegistry::with_builtins();
        insert(
            &mut registry,
            TypeDescriptor::composite(name("Holder"))
                .simple_field("raw", name("Vec"))
                .field(field("Holder", "ints", "Vec").with_args([name("i32")]))
                .build()
                .unwrap(),
        );

        let value = synthesize(&registry, "Holder");
        assert_eq!(value.get("raw"), Some(&ExampleValue::Null));
        assert_eq!(
            value.get("ints"),
            Some(&ExampleValue::Sequence(vec![Scalar::Int(0).into()]))
        );
    }

    #[test]
    fn map_field_has_one_entry() {
        let mut registry = TypeRegistry::with_builtins();
        insert(
            &mut registry,
            TypeDescriptor::composite(name("Lookup"))
                .field(field("Lookup", "scores", "HashMap").with_args([name("String"), name("f64")]))
                .build()
                .unwrap(),
        );

        assert_eq!(
            synthesize(&registry, "Lookup").get("scores"),
            Some(&ExampleValue::Mapping(vec![(
                ExampleValue::str(""),
                Scalar::Double(0.0).into()
            )]))
        );
    }

    #[test]
    fn nested_collection_element_has_no_field_context() {
        let mut registry = TypeRegistry::with_builtins();
        insert(
            &mut registry,
            TypeDescriptor::composite(name("Grid"))
                .field(field("Grid", "rows", "Vec").with_args([name("Vec")]))
                .build()
                .unwrap(),
        );

        assert_eq!(
            synthesize(&registry, "Grid").get("rows"),
            Some(&ExampleValue::Sequence(vec![ExampleValue::Null]))
        );
    }

    // ========================================================================
    // Composites
    // ========================================================================

    #[test]
    fn person_scenario() {
        let value = synthesize(&person_registry(), "Person");

        assert_eq!(value.keys(), ["name", "age", "tags"]);
        assert_eq!(value.get("name"), Some(&ExampleValue::str("full name")));
        assert_eq!(value.get("age"), Some(&Scalar::Int(0).into()));
        assert_eq!(
            value.get("tags"),
            Some(&ExampleValue::Sequence(vec![ExampleValue::str("")]))
        );
    }

    #[test]
    fn entries_carry_field_categories() {
        let value = synthesize(&person_registry(), "Person");
        let ExampleValue::Composite(entries) = value else {
            panic!("expected composite");
        };

        let categories: Vec<_> = entries.iter().map(|e| e.category).collect();
        assert_eq!(
            categories,
            [
                Some(Category::Scalar(ScalarKind::String)),
                Some(Category::Scalar(ScalarKind::Int)),
                Some(Category::Collection),
            ]
        );
    }

    #[test]
    fn response_hint_appends_example() {
        let mut registry = TypeRegistry::with_builtins();
        insert(
            &mut registry,
            TypeDescriptor::composite(name("UserVo"))
                .field(
                    field("UserVo", "id", "String")
                        .with_hint(DocHint::response("用户ID").with_example("1001")),
                )
                .field(field("UserVo", "nick", "String").with_hint(DocHint::response("昵称")))
                .field(
                    field("UserVo", "mail", "String")
                        .with_hint(DocHint::response("邮箱").with_example("  ")),
                )
                .build()
                .unwrap(),
        );

        let value = synthesize(&registry, "UserVo");
        assert_eq!(value.get("id"), Some(&ExampleValue::str("用户ID【如: 1001】")));
        assert_eq!(value.get("nick"), Some(&ExampleValue::str("昵称")));
        assert_eq!(value.get("mail"), Some(&ExampleValue::str("邮箱")));
    }

    #[test]
    fn param_hint_wins_over_response_hint() {
        let mut registry = TypeRegistry::with_builtins();
        let hint = DocHint {
            param: Some("request side".into()),
            ..DocHint::response("response side")
        };
        insert(
            &mut registry,
            TypeDescriptor::composite(name("Both"))
                .field(field("Both", "text", "String").with_hint(hint))
                .build()
                .unwrap(),
        );

        assert_eq!(
            synthesize(&registry, "Both").get("text"),
            Some(&ExampleValue::str("request side"))
        );
    }

    #[test]
    fn hints_are_ignored_on_non_string_fields() {
        let mut registry = TypeRegistry::with_builtins();
        insert(
            &mut registry,
            TypeDescriptor::composite(name("Counter"))
                .field(field("Counter", "count", "i32").with_hint(DocHint::param("ignored")))
                .build()
                .unwrap(),
        );

        assert_eq!(
            synthesize(&registry, "Counter").get("count"),
            Some(&Scalar::Int(0).into())
        );
    }

    #[test]
    fn only_string_fields_consult_the_resolver() {
        let registry = person_registry();
        let mut hints = MockHintResolver::new();
        hints
            .expect_has_param_hint()
            .withf(|f| f.name() == "name")
            .times(1)
            .return_const(false);
        hints
            .expect_has_response_hint()
            .withf(|f| f.name() == "name")
            .times(1)
            .return_const(true);
        hints
            .expect_response_hint_value()
            .times(1)
            .return_const("姓名".to_string());
        hints
            .expect_response_hint_example()
            .times(1)
            .return_const("张三".to_string());

        let value = ExampleSynthesizer::new(&registry, &hints)
            .synthesize_named(&name("Person"))
            .unwrap();

        assert_eq!(value.get("name"), Some(&ExampleValue::str("姓名【如: 张三】")));
    }

    #[test]
    fn shadowed_fields_appear_twice() {
        let mut registry = TypeRegistry::with_builtins();
        insert(
            &mut registry,
            TypeDescriptor::composite(name("Base"))
                .simple_field("id", name("i64"))
                .build()
                .unwrap(),
        );
        insert(
            &mut registry,
            TypeDescriptor::composite(name("Derived"))
                .extends(name("Base"))
                .simple_field("id", name("String"))
                .simple_field("extra", name("bool"))
                .build()
                .unwrap(),
        );

        let value = synthesize(&registry, "Derived");
        let ExampleValue::Composite(entries) = &value else {
            panic!("expected composite");
        };

        assert_eq!(value.keys(), ["id", "extra", "id"]);
        assert_eq!(entries[0].value, ExampleValue::str(""));
        assert_eq!(entries[2].value, Scalar::Long(0).into());
    }

    #[test]
    fn unknown_field_type_is_null_without_category() {
        let mut registry = TypeRegistry::with_builtins();
        insert(
            &mut registry,
            TypeDescriptor::composite(name("Order"))
                .simple_field("buyer", name("Customer"))
                .build()
                .unwrap(),
        );

        let ExampleValue::Composite(entries) = synthesize(&registry, "Order") else {
            panic!("expected composite");
        };
        assert_eq!(entries[0].category, None);
        assert!(entries[0].value.is_null());
    }

    // ========================================================================
    // Depth Ceiling
    // ========================================================================

    fn node_registry() -> TypeRegistry {
        let mut registry = TypeRegistry::with_builtins();
        insert(
            &mut registry,
            TypeDescriptor::composite(name("Node"))
                .simple_field("next", name("Node"))
                .build()
                .unwrap(),
        );
        registry
    }

    #[test]
    fn self_reference_stops_after_five_levels() {
        let value = synthesize(&node_registry(), "Node");
        assert_eq!(value.composite_depth(), 5);

        let mut cursor = &value;
        for _ in 0..5 {
            cursor = cursor.get("next").unwrap();
        }
        assert!(cursor.is_null());
    }

    #[test]
    fn at_ceiling_returns_null_immediately() {
        let registry = TypeRegistry::with_builtins();
        let synthesizer = ExampleSynthesizer::new(&registry, &DescriptorHints);
        let i32_ty = registry.get(&name("i32")).unwrap();

        assert!(synthesizer.synthesize(None, i32_ty, DEFAULT_MAX_DEPTH).is_null());
        assert!(!synthesizer.synthesize(None, i32_ty, DEFAULT_MAX_DEPTH - 1).is_null());
    }

    #[test]
    fn element_recursion_counts_towards_depth() {
        let mut registry = TypeRegistry::with_builtins();
        insert(
            &mut registry,
            TypeDescriptor::array(name("[i32]"), name("i32")).build().unwrap(),
        );
        let synthesizer = ExampleSynthesizer::new(&registry, &DescriptorHints);
        let array = registry.get(&name("[i32]")).unwrap();

        assert_eq!(
            synthesizer.synthesize(None, array, DEFAULT_MAX_DEPTH - 1),
            ExampleValue::Sequence(vec![ExampleValue::Null])
        );
    }

    #[test]
    fn custom_ceiling_is_honoured() {
        let registry = node_registry();
        let value = ExampleSynthesizer::new(&registry, &DescriptorHints)
            .with_max_depth(2)
            .synthesize_named(&name("Node"))
            .unwrap();

        assert_eq!(value.composite_depth(), 2);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let registry = node_registry();
        let synthesizer = ExampleSynthesizer::new(&registry, &DescriptorHints);

        let first = synthesizer.synthesize_named(&name("Node")).unwrap();
        let second = synthesizer.synthesize_named(&name("Node")).unwrap();
        assert_eq!(first, second);
    }

    // ========================================================================
    // Entry Points
    // ========================================================================

    #[test]
    fn unknown_root_type_is_an_error() {
        let registry = TypeRegistry::with_builtins();
        let result = ExampleSynthesizer::new(&registry, &DescriptorHints)
            .synthesize_named(&name("Ghost"));

        assert!(result.is_err());
    }

    #[test]
    fn field_entry_point_supplies_type_args() {
        let registry = TypeRegistry::with_builtins();
        let tags = field("Person", "tags", "Vec").with_args([name("String")]);

        let value = ExampleSynthesizer::new(&registry, &DescriptorHints)
            .synthesize_field(&tags)
            .unwrap();

        assert_eq!(value, ExampleValue::Sequence(vec![ExampleValue::str("")]));
    }
}
