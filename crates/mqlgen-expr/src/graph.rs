//! The immutable expression graph consumed by query compilers.
//!
//! Nodes are dense ids (`0..node_count`) with no payload; meaning lives on the
//! edges. Every node-valued edge target is validated at construction, so
//! consumers can index by `NodeId` without re-checking.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::error::ExprError;
use crate::literal::Literal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Target of an edge: another node, or a terminal literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    Node(NodeId),
    Literal(Literal),
}

impl From<NodeId> for Value {
    fn from(node: NodeId) -> Self {
        Value::Node(node)
    }
}

impl From<Literal> for Value {
    fn from(literal: Literal) -> Self {
        Value::Literal(literal)
    }
}

/// An outgoing edge, stored on its source node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    pub relation: String,
    pub target: Value,
}

impl Edge {
    pub fn new(relation: impl Into<String>, target: impl Into<Value>) -> Self {
        Self {
            relation: relation.into(),
            target: target.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionGraph {
    nodes: Vec<Vec<Edge>>,
    root: NodeId,
}

impl ExpressionGraph {
    /// Build a graph from per-node edge lists (`nodes[i]` holds node `i`'s edges).
    pub fn new(nodes: Vec<Vec<Edge>>, root: NodeId) -> Result<Self, ExprError> {
        if root.index() >= nodes.len() {
            return Err(ExprError::UnknownRoot {
                root,
                node_count: nodes.len(),
            });
        }
        for (source, edges) in nodes.iter().enumerate() {
            for edge in edges {
                if let Value::Node(target) = edge.target {
                    if target.index() >= nodes.len() {
                        return Err(ExprError::DanglingNode {
                            node: NodeId(source as u32),
                            target,
                        });
                    }
                }
            }
        }
        Ok(Self { nodes, root })
    }

    /// Caller guarantees the root and all node targets are in range.
    pub(crate) fn from_parts_unchecked(nodes: Vec<Vec<Edge>>, root: NodeId) -> Self {
        debug_assert!(root.index() < nodes.len());
        Self { nodes, root }
    }

    /// The designated answer node.
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(Vec::len).sum()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.nodes.len()
    }

    pub fn iter_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(|i| NodeId(i as u32))
    }

    /// Outgoing edges of `node`, in insertion order. Unknown nodes have none.
    pub fn edges(&self, node: NodeId) -> &[Edge] {
        self.nodes
            .get(node.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Build the reverse-adjacency index for this graph.
    pub fn incoming_index(&self) -> IncomingIndex<'_> {
        IncomingIndex::build(self)
    }
}

/// A node-valued edge seen from its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncomingEdge<'g> {
    pub source: NodeId,
    pub relation: &'g str,
}

/// Reverse adjacency: target node -> `(source, relation)` pairs.
///
/// Entries per target are ordered by source id, then by the source's edge
/// order, which is the order a full scan over `iter_nodes()` would discover
/// them in.
#[derive(Debug, Clone, Default)]
pub struct IncomingIndex<'g> {
    by_target: HashMap<NodeId, Vec<IncomingEdge<'g>>>,
}

impl<'g> IncomingIndex<'g> {
    pub fn build(graph: &'g ExpressionGraph) -> Self {
        let mut by_target: HashMap<NodeId, Vec<IncomingEdge<'g>>> = HashMap::new();
        for source in graph.iter_nodes() {
            for edge in graph.edges(source) {
                if let Value::Node(target) = edge.target {
                    by_target.entry(target).or_default().push(IncomingEdge {
                        source,
                        relation: edge.relation.as_str(),
                    });
                }
            }
        }
        Self { by_target }
    }

    pub fn incoming(&self, target: NodeId) -> &[IncomingEdge<'g>] {
        self.by_target
            .get(&target)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
