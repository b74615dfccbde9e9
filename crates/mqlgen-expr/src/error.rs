use thiserror::Error;

use crate::graph::NodeId;

/// Errors raised while building or loading an expression graph.
#[derive(Debug, Error)]
pub enum ExprError {
    #[error("malformed literal `{literal}`: {reason}")]
    MalformedLiteral { literal: String, reason: String },

    #[error("edge from node {node} points at node {target}, which is not in the graph")]
    DanglingNode { node: NodeId, target: NodeId },

    #[error("edge `{relation}` on node {node} must name exactly one of node, literal or text (found {found})")]
    EdgeTarget {
        node: NodeId,
        relation: String,
        found: usize,
    },

    #[error("root node {root} is not in the graph ({node_count} nodes)")]
    UnknownRoot { root: NodeId, node_count: usize },

    #[error("invalid expression graph JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl ExprError {
    pub(crate) fn malformed(literal: &str, reason: impl Into<String>) -> Self {
        Self::MalformedLiteral {
            literal: literal.to_string(),
            reason: reason.into(),
        }
    }
}
