//! Integration tests for building and rendering type trees

use std::thread;

use thrift_sig::builder::{signature_of, TypeBuilder};
use thrift_sig::classifier::{PrimitiveClassifier, TypeRegistry};
use thrift_sig::error::BuildError;
use thrift_sig::introspect::{DescriptionIntrospector, TypeDescription};
use thrift_sig::models::{GenericType, LeafType, TypeNode, TypeRef};
use thrift_sig::parser::{parse_type_expr, SynIntrospector};

fn registry() -> TypeRegistry {
    let mut registry = TypeRegistry::with_builtins();
    registry.register_struct("Order").unwrap();
    registry.register_struct("Customer").unwrap();
    registry.register_enum("Status").unwrap();
    registry
}

fn leaf_children(tree: &GenericType) -> Vec<&LeafType> {
    tree.children()
        .iter()
        .map(|child| match child {
            TypeNode::Leaf(leaf) => leaf,
            TypeNode::Generic(generic) => panic!("Expected leaf, got {:?}", generic),
        })
        .collect()
}

#[test]
fn test_plain_types_equal_prototypes() {
    let registry = registry();

    for expr in ["bool", "u8", "i16", "u32", "f32", "String", "Order", "Status"] {
        let tree = signature_of(expr, &registry).unwrap();
        let prototype = registry.classify(&TypeRef::new(expr)).unwrap();

        assert!(tree.is_leaf(), "{} should have no children", expr);
        assert_eq!(tree.as_leaf(), prototype);
        assert_eq!(tree.render_wire(), prototype.wire_name());
    }
}

#[test]
fn test_map_of_string_to_list() {
    let tree = signature_of("HashMap<String, Vec<i32>>", &registry()).unwrap();
    assert_eq!(tree.render_wire(), "map<string, list<i32>>");
}

#[test]
fn test_deep_nesting() {
    let tree = signature_of(
        "Vec<BTreeMap<String, HashSet<Vec<Order>>>>",
        &registry(),
    )
    .unwrap();

    assert_eq!(tree.render_wire(), "list<map<string, set<list<Order>>>>");
    assert_eq!(tree.render_display(), "<<String<<Order>>>>");
    assert_eq!(tree.depth(), 4);
}

#[test]
fn test_order_preserved_for_maps() {
    let registry = registry();
    let forward = signature_of("HashMap<Status, Order>", &registry).unwrap();
    let reverse = signature_of("HashMap<Order, Status>", &registry).unwrap();

    assert_eq!(forward.render_wire(), "map<Status, Order>");
    assert_eq!(reverse.render_wire(), "map<Order, Status>");
}

#[test]
fn test_display_form_has_no_separators() {
    let tree = signature_of("HashMap<i64, Order>", &registry()).unwrap();
    assert_eq!(tree.render_display(), "<i64Order>");

    let plain = signature_of("Order", &registry()).unwrap();
    assert_eq!(plain.render_display(), "<>");
}

#[test]
fn test_struct_positions_are_independent() {
    let registry = registry();
    let builder = TypeBuilder::new(DescriptionIntrospector, &registry);
    let ty = TypeDescription::parameterized(
        "HashMap",
        vec![
            TypeDescription::plain("crm::Order"),
            TypeDescription::plain("erp::Order"),
        ],
    );

    let tree = builder.build(&ty).unwrap();
    let leaves = leaf_children(&tree);

    assert_eq!(leaves[0].runtime_class(), Some(&TypeRef::new("crm::Order")));
    assert_eq!(leaves[1].runtime_class(), Some(&TypeRef::new("erp::Order")));
    assert_eq!(leaves[0].wire_name(), leaves[1].wire_name());
    assert_eq!(tree.render_wire(), "map<Order, Order>");

    // The shared prototype still points at the registered name
    let prototype = registry.classify(&TypeRef::new("Order")).unwrap();
    assert_eq!(prototype, &LeafType::structure("Order"));
}

#[test]
fn test_struct_leaves_diverge_across_trees() {
    let registry = registry();

    let first = signature_of("Vec<sales::Customer>", &registry).unwrap();
    let second = signature_of("Vec<support::Customer>", &registry).unwrap();

    let a = leaf_children(&first)[0];
    let b = leaf_children(&second)[0];

    assert_ne!(a.runtime_class(), b.runtime_class());
    assert_eq!(a.display_name(), "Customer");
    assert_eq!(b.display_name(), "Customer");
    assert_eq!(
        registry
            .classify(&TypeRef::new("Customer"))
            .unwrap()
            .runtime_class(),
        Some(&TypeRef::new("Customer"))
    );
}

#[test]
fn test_unclassifiable_argument_fails_whole_build() {
    let result = signature_of("HashMap<String, Vec<Invoice>>", &registry());

    match result {
        Err(BuildError::Classification { type_name }) => assert_eq!(type_name, "Invoice"),
        other => panic!("Expected Classification error, got {:?}", other),
    }
}

#[test]
fn test_unclassifiable_qualified_argument_keeps_path() {
    let err = signature_of("Vec<billing::Invoice>", &registry()).unwrap_err();
    assert_eq!(err.to_string(), "cannot map type `billing::Invoice` to a Thrift wire type");
}

#[test]
fn test_qualified_registration_matches_use_sites() {
    let mut registry = TypeRegistry::with_builtins();
    registry.register_struct("billing::Order").unwrap();
    registry.register_alias("uuid::Uuid", "string").unwrap();

    let tree = signature_of("HashMap<uuid::Uuid, Vec<billing::Order>>", &registry).unwrap();
    assert_eq!(tree.render_wire(), "map<string, list<Order>>");
}

#[test]
fn test_blank_alias_never_reaches_signatures() {
    let mut registry = TypeRegistry::with_builtins();

    assert!(registry.register_alias("Uuid", "").is_err());
    assert!(registry.register_struct("  ").is_err());

    let err = signature_of("Vec<Uuid>", &registry).unwrap_err();
    assert_eq!(err, BuildError::classification("Uuid"));
}

#[test]
fn test_depth_guard() {
    let registry = registry();
    let ty = parse_type_expr("Vec<Vec<Vec<Vec<i32>>>>").unwrap();

    let err = TypeBuilder::new(SynIntrospector, &registry)
        .with_max_depth(3)
        .build(&ty)
        .unwrap_err();

    assert_eq!(err, BuildError::DepthExceeded { limit: 3 });
}

#[test]
fn test_same_tree_from_both_introspectors() {
    let registry = registry();
    let from_syn = signature_of("HashMap<String, Vec<Order>>", &registry).unwrap();

    let description = TypeDescription::parameterized(
        "HashMap",
        vec![
            TypeDescription::plain("String"),
            TypeDescription::parameterized("Vec", vec![TypeDescription::plain("Order")]),
        ],
    );
    let from_description = TypeBuilder::new(DescriptionIntrospector, &registry)
        .build(&description)
        .unwrap();

    assert_eq!(from_syn, from_description);
}

#[test]
fn test_concurrent_builds_share_registry() {
    let registry = registry();

    let wires: Vec<String> = thread::scope(|scope| {
        let handles: Vec<_> = ["Vec<Order>", "HashSet<Status>", "HashMap<u64, Vec<Order>>"]
            .into_iter()
            .map(|expr| {
                let registry = &registry;
                scope.spawn(move || signature_of(expr, registry).unwrap().render_wire())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(wires, vec!["list<Order>", "set<Status>", "map<i64, list<Order>>"]);
}
