//! Integration tests for specimen-core: derived descriptors through the real
//! synthesizer.

use std::collections::{BTreeMap, HashMap};

use specimen_core::prelude::*;

#[derive(Describe)]
#[specimen(name = "Person")]
#[allow(dead_code)]
struct Person {
    #[specimen(param = "full name")]
    name: String,
    age: i32,
    tags: Vec<String>,
}

#[derive(Describe)]
#[specimen(name = "Node")]
#[allow(dead_code)]
struct Node {
    next: Option<Box<Node>>,
}

#[derive(Describe)]
#[specimen(name = "Status")]
#[allow(dead_code)]
enum Status {
    Active,
    #[specimen(rename = "LOCKED")]
    Locked,
}

#[derive(Describe)]
#[specimen(name = "Entity")]
#[allow(dead_code)]
struct Entity {
    id: i64,
    created: u64,
}

#[derive(Describe)]
#[specimen(name = "UserVo")]
#[allow(dead_code)]
struct UserVo {
    #[specimen(extends)]
    base: Entity,
    #[specimen(response = "用户ID", example = "1001")]
    id: String,
    status: Status,
    scores: HashMap<String, f64>,
    #[specimen(rename = "avatar")]
    avatar_bytes: [u8; 4],
    #[specimen(skip)]
    cache: BTreeMap<String, String>,
}

#[derive(Describe)]
#[specimen(name = "Page")]
#[allow(dead_code)]
struct Page<T> {
    items: Vec<T>,
    total: usize,
}

#[derive(Describe)]
#[allow(dead_code)]
struct Unnamed {
    flag: bool,
}

fn registry_with<T: Describe>() -> (TypeRegistry, TypeName) {
    let mut registry = TypeRegistry::with_builtins();
    let name = registry.register::<T>().unwrap();
    (registry, name)
}

fn example<T: Describe>() -> ExampleValue {
    let (registry, name) = registry_with::<T>();
    ExampleSynthesizer::new(&registry, &DescriptorHints)
        .synthesize_named(&name)
        .unwrap()
}

#[test]
fn derived_person_matches_documented_example() {
    let value = example::<Person>();

    assert_eq!(value.keys(), ["name", "age", "tags"]);
    assert_eq!(value.get("name"), Some(&ExampleValue::str("full name")));
    assert_eq!(value.get("age"), Some(&Scalar::Int(0).into()));
    assert_eq!(
        value.get("tags"),
        Some(&ExampleValue::Sequence(vec![ExampleValue::str("")]))
    );
}

#[test]
fn self_referential_type_is_cut_at_default_depth() {
    let value = example::<Node>();
    assert_eq!(value.composite_depth(), DEFAULT_MAX_DEPTH);
}

#[test]
fn enum_variants_become_constants() {
    assert_eq!(example::<Status>(), ExampleValue::Enum("|Active|LOCKED|".into()));
}

#[test]
fn extends_flattens_the_base_after_own_fields() {
    let value = example::<UserVo>();

    assert_eq!(
        value.keys(),
        ["id", "status", "scores", "avatar", "id", "created"]
    );
    assert_eq!(value.get("id"), Some(&ExampleValue::str("用户ID【如: 1001】")));
    assert_eq!(value.get("status"), Some(&ExampleValue::Enum("|Active|LOCKED|".into())));
    assert_eq!(
        value.get("scores"),
        Some(&ExampleValue::Mapping(vec![(
            ExampleValue::str(""),
            Scalar::Double(0.0).into()
        )]))
    );
    assert_eq!(
        value.get("avatar"),
        Some(&ExampleValue::Sequence(vec![Scalar::Byte(0).into()]))
    );
}

#[test]
fn extends_records_the_supertype() {
    let (registry, name) = registry_with::<UserVo>();
    let descriptor = registry.get(&name).unwrap();

    assert_eq!(descriptor.supertype(), Some(&TypeName::new("Entity")));
    assert!(registry.contains(&TypeName::new("Entity")));
    assert!(registry.dangling_references().is_empty());
}

#[test]
fn generic_instantiations_are_distinct_types() {
    let mut registry = TypeRegistry::with_builtins();
    let people = registry.register::<Page<Person>>().unwrap();
    let statuses = registry.register::<Page<Status>>().unwrap();

    assert_eq!(people, TypeName::new("Page<Person>"));
    assert_eq!(statuses, TypeName::new("Page<Status>"));

    let value = ExampleSynthesizer::new(&registry, &DescriptorHints)
        .synthesize_named(&people)
        .unwrap();
    let items = value.get("items").unwrap();
    let ExampleValue::Sequence(elements) = items else {
        panic!("expected sequence, got {items:?}");
    };
    assert_eq!(elements[0].keys(), ["name", "age", "tags"]);
    assert_eq!(value.get("total"), Some(&Scalar::Int(0).into()));
}

#[test]
fn default_name_includes_module_path() {
    let name = <Unnamed as Describe>::type_name();
    assert!(name.as_str().ends_with("::Unnamed"), "{name}");
    assert_ne!(name.as_str(), "Unnamed");
}

#[test]
fn registration_is_idempotent() {
    let mut registry = TypeRegistry::with_builtins();
    registry.register::<UserVo>().unwrap();
    let before = registry.len();
    registry.register::<UserVo>().unwrap();

    assert_eq!(registry.len(), before);
}

#[test]
fn classification_of_derived_types() {
    let (registry, _) = registry_with::<UserVo>();
    let classifier = TypeClassifier::new(&registry);

    let category = |name: &str| classifier.classify(registry.get(&TypeName::new(name)).unwrap());
    assert_eq!(category("UserVo"), Category::Composite);
    assert_eq!(category("Status"), Category::Enum);
    assert_eq!(category("[u8]"), Category::Array);
    assert_eq!(category("HashMap"), Category::Map);
}

#[test]
fn synthesis_works_across_threads() {
    let (registry, name) = registry_with::<UserVo>();
    let registry = std::sync::Arc::new(registry);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let registry = registry.clone();
            let name = name.clone();
            std::thread::spawn(move || {
                ExampleSynthesizer::new(registry.as_ref(), &DescriptorHints)
                    .synthesize_named(&name)
                    .unwrap()
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results.windows(2).all(|w| w[0] == w[1]));
}
