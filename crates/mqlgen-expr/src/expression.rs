//! Mutable expression builder and its composition operator.
//!
//! Grammar actions build questions out of small fragments ("is a film",
//! "directed by X", "has name Y"). Each fragment is an `Expression` with a
//! distinguished head node, and fragments are combined with `merge` / `+`:
//! the other expression's head is unified with this one's head, and all of
//! its other nodes are appended under fresh ids.
//!
//! `merge` is associative, and node numbering is identical for
//! `(a + b) + c` and `a + (b + c)`.

use std::ops::{Add, AddAssign};

use crate::graph::{Edge, ExpressionGraph, NodeId, Value};
use crate::literal::Literal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    nodes: Vec<Vec<Edge>>,
    head: NodeId,
}

impl Default for Expression {
    fn default() -> Self {
        Self::new()
    }
}

impl Expression {
    /// A single, relation-less head node.
    pub fn new() -> Self {
        Self {
            nodes: vec![Vec::new()],
            head: NodeId(0),
        }
    }

    pub fn head(&self) -> NodeId {
        self.head
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn iter_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(|i| NodeId(i as u32))
    }

    pub fn iter_edges(&self, node: NodeId) -> &[Edge] {
        self.nodes
            .get(node.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn add_node(&mut self) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Vec::new());
        id
    }

    fn add_edge(&mut self, source: NodeId, relation: String, target: Value) {
        self.nodes[source.index()].push(Edge { relation, target });
    }

    /// Attach a literal to the head.
    pub fn add_data(&mut self, relation: impl Into<String>, value: Literal) {
        let head = self.head;
        self.add_edge(head, relation.into(), Value::Literal(value));
    }

    /// Unify `other`'s head with this head and append its remaining nodes.
    pub fn merge(&mut self, other: Expression) {
        let mut translation = Vec::with_capacity(other.nodes.len());
        for node in other.iter_nodes() {
            if node == other.head {
                translation.push(self.head);
            } else {
                translation.push(self.add_node());
            }
        }
        for (node, edges) in other.nodes.into_iter().enumerate() {
            let source = translation[node];
            for edge in edges {
                let target = match edge.target {
                    Value::Node(dest) => Value::Node(translation[dest.index()]),
                    literal @ Value::Literal(_) => literal,
                };
                self.add_edge(source, edge.relation, target);
            }
        }
    }

    /// Move the head to a fresh node linked to the old one by `relation`.
    ///
    /// Forward: `new_head -relation-> old_head`. Reverse: `old_head -relation-> new_head`.
    pub fn decapitate(&mut self, relation: impl Into<String>, reverse: bool) {
        let old_head = self.head;
        let new_head = self.add_node();
        self.head = new_head;
        if reverse {
            self.add_edge(old_head, relation.into(), Value::Node(new_head));
        } else {
            self.add_edge(new_head, relation.into(), Value::Node(old_head));
        }
    }

    /// Freeze into an immutable graph rooted at the head.
    pub fn into_graph(self) -> ExpressionGraph {
        ExpressionGraph::from_parts_unchecked(self.nodes, self.head)
    }

    pub fn to_graph(&self) -> ExpressionGraph {
        self.clone().into_graph()
    }
}

impl AddAssign for Expression {
    fn add_assign(&mut self, other: Expression) {
        self.merge(other);
    }
}

impl Add for Expression {
    type Output = Expression;

    fn add(mut self, other: Expression) -> Expression {
        self.merge(other);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(ty: &str) -> Expression {
        let mut e = Expression::new();
        e.add_data("rdf:type", Literal::plain(ty));
        e
    }

    #[test]
    fn merge_unifies_heads() {
        let mut name = Expression::new();
        name.add_data("ns:name", Literal::tagged("Alien", "en"));
        let e = typed("ns:film") + name;

        assert_eq!(e.node_count(), 1);
        let relations: Vec<_> = e.iter_edges(e.head()).iter().map(|edge| edge.relation.as_str()).collect();
        assert_eq!(relations, vec!["rdf:type", "ns:name"]);
    }

    #[test]
    fn decapitate_forward_points_new_head_at_old() {
        let mut e = typed("ns:person");
        e.decapitate("ns:directed_by", false);
        assert_eq!(e.head(), NodeId(1));
        assert_eq!(e.iter_edges(NodeId(1)), &[Edge::new("ns:directed_by", NodeId(0))]);
    }

    #[test]
    fn decapitate_reverse_points_old_head_at_new() {
        let mut e = typed("ns:film");
        e.decapitate("ns:directed_by", true);
        assert_eq!(e.head(), NodeId(1));
        assert!(e.iter_edges(NodeId(1)).is_empty());
        assert_eq!(e.iter_edges(NodeId(0))[1], Edge::new("ns:directed_by", NodeId(1)));
    }

    #[test]
    fn merge_renumbers_non_head_nodes_and_redirects_references() {
        let mut director = typed("ns:director");
        director.decapitate("ns:directed_by", true);
        // director: 0 -directed_by-> 1 (head)
        let e = typed("ns:person") + director;

        // Other's node 0 becomes node 1, other's head becomes our head (0).
        assert_eq!(e.node_count(), 2);
        assert_eq!(
            e.iter_edges(NodeId(1)),
            &[
                Edge::new("rdf:type", Literal::plain("ns:director")),
                Edge::new("ns:directed_by", NodeId(0)),
            ]
        );
    }

    #[test]
    fn into_graph_keeps_head_as_root() {
        let mut e = typed("ns:film");
        e.decapitate("ns:name", true);
        let graph = e.into_graph();
        assert_eq!(graph.root(), NodeId(1));
        assert_eq!(graph.node_count(), 2);
    }
}
