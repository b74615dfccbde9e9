use mqlgen_expr::NodeId;
use thiserror::Error;

/// Errors raised by the compiler.
///
/// An empty root is not an error; see `MqlOutcome::EmptyExpression`.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("node {node} is not in the graph ({node_count} nodes)")]
    UnknownNode { node: NodeId, node_count: usize },

    #[error("malformed literal `{literal}`: {reason}")]
    MalformedLiteral { literal: String, reason: String },

    #[error("node {node} was entered twice in one compilation; visited state was reused")]
    UnboundedGraph { node: NodeId },

    #[error("expression graph nests deeper than {limit} levels at node {node}")]
    DepthExceeded { node: NodeId, limit: usize },

    #[error("invalid dialect JSON: {0}")]
    DialectJson(serde_json::Error),

    #[error("invalid dialect {field}: {reason}")]
    InvalidDialect { field: &'static str, reason: String },

    #[error("failed to serialize MQL query: {0}")]
    Serialize(#[from] serde_json::Error),
}
