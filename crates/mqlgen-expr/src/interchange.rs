//! JSON interchange format for expression graphs.
//!
//! ```json
//! { "root": 0,
//!   "nodes": [
//!     { "edges": [
//!         { "relation": "freebase:film.film.directed_by", "node": 1 },
//!         { "relation": "freebase:type.object.name", "literal": "\"Pulp Fiction\"@en" } ] },
//!     { "edges": [
//!         { "relation": "freebase:type.object.name", "text": { "value": "Quentin Tarantino", "lang": "en" } } ] } ] }
//! ```
//!
//! `literal` carries the quepy text encoding; `text` carries the value and the
//! optional language separately.

use serde::{Deserialize, Serialize};

use crate::error::ExprError;
use crate::graph::{Edge, ExpressionGraph, NodeId, Value};
use crate::literal::Literal;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphDocument {
    #[serde(default)]
    pub root: u32,
    pub nodes: Vec<NodeDocument>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeDocument {
    #[serde(default)]
    pub edges: Vec<EdgeDocument>,
}

/// One edge. Exactly one of `node`, `literal` or `text` must be present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EdgeDocument {
    pub relation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub literal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<TextDocument>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TextDocument {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
}

impl EdgeDocument {
    fn into_edge(self, node: usize) -> Result<Edge, ExprError> {
        let target = match (self.node, self.literal, self.text) {
            (Some(id), None, None) => Value::Node(NodeId(id)),
            (None, Some(raw), None) => Value::Literal(Literal::parse_encoded(&raw)?),
            (None, None, Some(text)) => Value::Literal(Literal {
                lexical: text.value,
                language: text.lang,
            }),
            (node_id, literal, text) => {
                return Err(ExprError::EdgeTarget {
                    node: NodeId(node as u32),
                    relation: self.relation,
                    found: [node_id.is_some(), literal.is_some(), text.is_some()]
                        .iter()
                        .filter(|set| **set)
                        .count(),
                })
            }
        };
        Ok(Edge {
            relation: self.relation,
            target,
        })
    }
}

impl GraphDocument {
    pub fn into_graph(self) -> Result<ExpressionGraph, ExprError> {
        let nodes = self
            .nodes
            .into_iter()
            .enumerate()
            .map(|(index, node)| {
                node.edges
                    .into_iter()
                    .map(|edge| edge.into_edge(index))
                    .collect::<Result<Vec<_>, ExprError>>()
            })
            .collect::<Result<Vec<_>, ExprError>>()?;
        ExpressionGraph::new(nodes, NodeId(self.root))
    }

    /// Literals are written in the `text` form so no re-parsing is needed on load.
    pub fn from_graph(graph: &ExpressionGraph) -> Self {
        let nodes = graph
            .iter_nodes()
            .map(|node| NodeDocument {
                edges: graph
                    .edges(node)
                    .iter()
                    .map(|edge| {
                        let mut doc = EdgeDocument {
                            relation: edge.relation.clone(),
                            node: None,
                            literal: None,
                            text: None,
                        };
                        match &edge.target {
                            Value::Node(id) => doc.node = Some(id.0),
                            Value::Literal(lit) => {
                                doc.text = Some(TextDocument {
                                    value: lit.lexical.clone(),
                                    lang: lit.language.clone(),
                                })
                            }
                        }
                        doc
                    })
                    .collect(),
            })
            .collect();
        Self {
            root: graph.root().0,
            nodes,
        }
    }
}

pub fn parse_graph_json(text: &str) -> Result<ExpressionGraph, ExprError> {
    let doc: GraphDocument = serde_json::from_str(text)?;
    tracing::debug!(nodes = doc.nodes.len(), root = doc.root, "loaded expression graph document");
    doc.into_graph()
}

pub fn graph_to_json(graph: &ExpressionGraph) -> Result<String, ExprError> {
    Ok(serde_json::to_string_pretty(&GraphDocument::from_graph(graph))?)
}
