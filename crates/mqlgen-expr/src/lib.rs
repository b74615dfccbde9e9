//! Expression graphs for mqlgen.
//!
//! A question is reduced (upstream, by a grammar matcher) to a small directed
//! graph of typed entities and labeled relations. This crate defines:
//!
//! - the immutable graph the compiler consumes (`graph`),
//! - leaf values and their quepy-style text encoding (`literal`),
//! - the mutable builder and its composition operator (`expression`),
//! - reusable fragment shapes used by vocabularies (`fragment`),
//! - the JSON interchange format read by the CLI (`interchange`).

pub mod error;
pub mod expression;
pub mod fragment;
pub mod graph;
pub mod interchange;
pub mod literal;

pub use error::ExprError;
pub use expression::Expression;
pub use fragment::{FixedDataRelation, FixedRelation, FixedType};
pub use graph::{Edge, ExpressionGraph, IncomingEdge, IncomingIndex, NodeId, Value};
pub use literal::Literal;
