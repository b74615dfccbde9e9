//! Depth-first graph → document compilation.
//!
//! One `MqlCompiler` value is one compilation: it owns the visited set and the
//! reverse-adjacency index, and `compile` consumes it, so visited state can
//! never leak into a second compilation of the same graph.
//!
//! Traversal order per node:
//!
//! 1. mark the node visited (before touching any neighbor);
//! 2. forward edges, in insertion order, skipping node targets already visited;
//! 3. incoming edges, in scan order, skipping sources already visited.
//!
//! A node that records no entries compiles to `None`, and the parent drops the
//! edge that led to it. Edges to already-visited nodes are dropped without a
//! back-reference.
//!
//! Recursion depth equals the longest simple path explored from the root.
//! Expression graphs built from question templates stay under ten levels.
//! Loaded graphs can be arbitrarily deep, so nesting is capped at
//! `DEFAULT_MAX_DEPTH` (see `MqlCompiler::with_max_depth`) and a deeper graph
//! fails with `CompileError::DepthExceeded` instead of overflowing the stack.

use std::collections::HashSet;

use mqlgen_expr::{ExpressionGraph, IncomingIndex, NodeId, Value};
use tracing::{debug, trace, warn};

use crate::dialect::MqlDialect;
use crate::document::{MqlObject, MqlValue};
use crate::error::CompileError;
use crate::format::{format_literal, format_relation, format_reverse_relation};

/// Nesting limit used by `MqlCompiler::new` and the free functions.
pub const DEFAULT_MAX_DEPTH: usize = 1024;

/// Result of compiling one root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOutput {
    /// `None` when the root (after traversal) carries no relations.
    pub document: Option<MqlObject>,
    /// Nodes in the order they were entered; each appears once.
    pub visit_order: Vec<NodeId>,
}

pub struct MqlCompiler<'g> {
    graph: &'g ExpressionGraph,
    dialect: &'g MqlDialect,
    incoming: IncomingIndex<'g>,
    visited: HashSet<NodeId>,
    visit_order: Vec<NodeId>,
    depth: usize,
    max_depth: usize,
}

impl<'g> MqlCompiler<'g> {
    pub fn new(graph: &'g ExpressionGraph, dialect: &'g MqlDialect) -> Self {
        Self {
            graph,
            dialect,
            incoming: graph.incoming_index(),
            visited: HashSet::with_capacity(graph.node_count()),
            visit_order: Vec::with_capacity(graph.node_count()),
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn compile(mut self, root: NodeId) -> Result<CompileOutput, CompileError> {
        if !self.graph.contains(root) {
            return Err(CompileError::UnknownNode {
                node: root,
                node_count: self.graph.node_count(),
            });
        }
        debug!(
            root = %root,
            nodes = self.graph.node_count(),
            edges = self.graph.edge_count(),
            "compiling expression graph"
        );

        let document = self.node_to_mql(root)?;

        debug!(
            root = %root,
            visited = self.visit_order.len(),
            empty = document.is_none(),
            "compiled expression graph"
        );
        Ok(CompileOutput {
            document,
            visit_order: self.visit_order,
        })
    }

    fn enter(&mut self, node: NodeId) -> Result<(), CompileError> {
        let fresh = self.visited.insert(node);
        debug_assert!(fresh, "node {node} entered twice");
        if !fresh {
            return Err(CompileError::UnboundedGraph { node });
        }
        self.visit_order.push(node);
        trace!(node = %node, depth = self.depth, "entering node");
        Ok(())
    }

    fn node_to_mql(&mut self, node: NodeId) -> Result<Option<MqlObject>, CompileError> {
        if self.depth >= self.max_depth {
            return Err(CompileError::DepthExceeded {
                node,
                limit: self.max_depth,
            });
        }
        self.depth += 1;
        let object = self.expand(node);
        self.depth -= 1;
        object
    }

    fn expand(&mut self, node: NodeId) -> Result<Option<MqlObject>, CompileError> {
        self.enter(node)?;
        let graph = self.graph;
        let mut object = MqlObject::new();

        for edge in graph.edges(node) {
            let value = match &edge.target {
                Value::Node(target) => {
                    if self.visited.contains(target) {
                        trace!(node = %node, target = %target, relation = %edge.relation, "dropping edge to visited node");
                        continue;
                    }
                    match self.node_to_mql(*target)? {
                        Some(nested) => MqlValue::Objects(vec![nested]),
                        None => continue,
                    }
                }
                Value::Literal(literal) => format_literal(self.dialect, literal)?,
            };
            let key = format_relation(self.dialect, &edge.relation);
            record(node, &mut object, key, value);
        }

        let incoming = self.incoming.incoming(node).to_vec();
        for edge in incoming {
            if self.visited.contains(&edge.source) {
                trace!(node = %node, source = %edge.source, relation = edge.relation, "dropping edge from visited node");
                continue;
            }
            let Some(nested) = self.node_to_mql(edge.source)? else {
                continue;
            };
            let key = format_reverse_relation(self.dialect, edge.relation);
            record(node, &mut object, key, MqlValue::Objects(vec![nested]));
        }

        Ok((!object.is_empty()).then_some(object))
    }
}

fn record(node: NodeId, object: &mut MqlObject, key: String, value: MqlValue) {
    let kind = value.kind();
    if let Some(replaced) = object.insert(key.clone(), value) {
        warn!(
            node = %node,
            key = %key,
            replaced_kind = replaced.kind(),
            new_kind = kind,
            replaced = ?replaced,
            "relation value overwritten by a later value on the same key"
        );
    }
}

/// Compile the sub-document rooted at `root`.
pub fn compile(
    graph: &ExpressionGraph,
    root: NodeId,
    dialect: &MqlDialect,
) -> Result<Option<MqlObject>, CompileError> {
    Ok(MqlCompiler::new(graph, dialect).compile(root)?.document)
}

/// A generated query: the document and its serialized text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MqlQuery {
    pub root: NodeId,
    pub document: MqlObject,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MqlOutcome {
    Query(MqlQuery),
    /// The root carries no relations; no query was generated.
    EmptyExpression { root: NodeId },
}

impl MqlOutcome {
    pub fn query(&self) -> Option<&MqlQuery> {
        match self {
            MqlOutcome::Query(query) => Some(query),
            MqlOutcome::EmptyExpression { .. } => None,
        }
    }

    pub fn is_empty_expression(&self) -> bool {
        matches!(self, MqlOutcome::EmptyExpression { .. })
    }
}

/// Compile and serialize the graph's designated root.
pub fn compile_root(graph: &ExpressionGraph, dialect: &MqlDialect) -> Result<MqlOutcome, CompileError> {
    compile_from(graph, graph.root(), dialect)
}

/// Compile and serialize from an explicit root.
pub fn compile_from(
    graph: &ExpressionGraph,
    root: NodeId,
    dialect: &MqlDialect,
) -> Result<MqlOutcome, CompileError> {
    match compile(graph, root, dialect)? {
        Some(document) => {
            let text = serialize_query(&document)?;
            Ok(MqlOutcome::Query(MqlQuery {
                root,
                document,
                text,
            }))
        }
        None => {
            debug!(root = %root, "root carries no relations; no query generated");
            Ok(MqlOutcome::EmptyExpression { root })
        }
    }
}

/// MQL read envelope: a one-element array around the root object, two-space indent.
pub fn serialize_query(document: &MqlObject) -> Result<String, CompileError> {
    Ok(serde_json::to_string_pretty(&[document])?)
}
