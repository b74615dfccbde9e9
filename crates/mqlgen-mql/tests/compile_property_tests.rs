use std::collections::{BTreeSet, HashSet};

use mqlgen_expr::{Edge, ExpressionGraph, Literal, NodeId, Value};
use mqlgen_mql::format::{format_literal, format_relation, format_reverse_relation};
use mqlgen_mql::{compile, MqlCompiler, MqlDialect, MqlObject, MqlValue};
use proptest::prelude::*;

fn relation() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("freebase:film.film.directed_by".to_string()),
        Just("freebase:film.film.starring".to_string()),
        Just("freebase:type.object.name".to_string()),
        Just("rdf:type".to_string()),
    ]
}

fn literal() -> impl Strategy<Value = Literal> {
    prop_oneof![
        "[a-z]{1,5}".prop_map(Literal::plain),
        "[a-z]{1,5}".prop_map(|v| Literal::tagged(v, "en")),
        Just(Literal::plain("freebase:film.film")),
    ]
}

fn random_graph() -> impl Strategy<Value = ExpressionGraph> {
    (1usize..9).prop_flat_map(|n| {
        let edge = (
            relation(),
            prop_oneof![
                (0..n as u32).prop_map(|t| Value::Node(NodeId(t))),
                literal().prop_map(Value::Literal),
            ],
        )
            .prop_map(|(rel, target)| Edge::new(rel, target));
        (
            proptest::collection::vec(proptest::collection::vec(edge, 0..4), n),
            0..n as u32,
        )
            .prop_map(|(nodes, root)| {
                ExpressionGraph::new(nodes, NodeId(root)).expect("targets are in range")
            })
    })
}

/// Scan-based traversal: incoming edges are found by walking every unvisited node.
fn reference_compile(
    graph: &ExpressionGraph,
    node: NodeId,
    dialect: &MqlDialect,
    visited: &mut HashSet<NodeId>,
) -> Option<MqlObject> {
    visited.insert(node);
    let mut object = MqlObject::new();
    for edge in graph.edges(node) {
        let value = match &edge.target {
            Value::Node(target) if visited.contains(target) => continue,
            Value::Node(target) => match reference_compile(graph, *target, dialect, visited) {
                Some(nested) => MqlValue::Objects(vec![nested]),
                None => continue,
            },
            Value::Literal(lit) => format_literal(dialect, lit).expect("valid literal"),
        };
        object.insert(format_relation(dialect, &edge.relation), value);
    }
    for source in graph.iter_nodes() {
        for edge in graph.edges(source) {
            if edge.target != Value::Node(node) || visited.contains(&source) {
                continue;
            }
            if let Some(nested) = reference_compile(graph, source, dialect, visited) {
                object.insert(
                    format_reverse_relation(dialect, &edge.relation),
                    MqlValue::Objects(vec![nested]),
                );
            }
        }
    }
    (!object.is_empty()).then_some(object)
}

/// Nodes connected to `root` ignoring edge direction.
fn weak_component(graph: &ExpressionGraph, root: NodeId) -> BTreeSet<NodeId> {
    let mut seen = BTreeSet::from([root]);
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        for other in graph.iter_nodes() {
            let linked = graph.edges(node).iter().any(|e| e.target == Value::Node(other))
                || graph.edges(other).iter().any(|e| e.target == Value::Node(node));
            if linked && seen.insert(other) {
                stack.push(other);
            }
        }
    }
    seen
}

fn assert_no_empty_objects(object: &MqlObject) -> Result<(), TestCaseError> {
    prop_assert!(!object.is_empty());
    for (key, value) in object.iter() {
        match value {
            MqlValue::Objects(objects) => {
                prop_assert!(!objects.is_empty());
                for nested in objects {
                    assert_no_empty_objects(nested)?;
                }
            }
            _ => prop_assert!(!key.starts_with('!'), "incoming key {} holds a literal", key),
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn each_node_is_visited_once(graph in random_graph()) {
        let out = MqlCompiler::new(&graph, &MqlDialect::default())
            .compile(graph.root())
            .expect("compile");
        let unique: HashSet<_> = out.visit_order.iter().copied().collect();
        prop_assert_eq!(unique.len(), out.visit_order.len());
    }

    #[test]
    fn traversal_covers_the_weak_component(graph in random_graph()) {
        let out = MqlCompiler::new(&graph, &MqlDialect::default())
            .compile(graph.root())
            .expect("compile");
        let visited: BTreeSet<_> = out.visit_order.into_iter().collect();
        prop_assert_eq!(visited, weak_component(&graph, graph.root()));
    }

    #[test]
    fn compilation_is_idempotent(graph in random_graph()) {
        let d = MqlDialect::default();
        let first = compile(&graph, graph.root(), &d).expect("compile");
        let second = compile(&graph, graph.root(), &d).expect("compile");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn documents_never_contain_empty_objects(graph in random_graph()) {
        if let Some(doc) = compile(&graph, graph.root(), &MqlDialect::default()).expect("compile") {
            assert_no_empty_objects(&doc)?;
        }
    }

    #[test]
    fn indexed_traversal_matches_full_scan(graph in random_graph()) {
        let d = MqlDialect::default();
        let indexed = compile(&graph, graph.root(), &d).expect("compile");
        let scanned = reference_compile(&graph, graph.root(), &d, &mut HashSet::new());
        prop_assert_eq!(indexed, scanned);
    }
}
