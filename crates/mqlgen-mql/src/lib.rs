//! Expression graph → MQL compiler.
//!
//! Walks an expression graph depth-first from a root node and emits the nested
//! query document a Freebase-style MQL read endpoint consumes:
//!
//! - forward edges become `"/a/b/c"` keys, incoming edges `"!/a/b/c"` keys;
//! - node-valued relations are always lists of nested objects;
//! - literals become plain strings or `{"value", "lang"}` objects;
//! - every node is expanded at most once per compilation, so cyclic and
//!   reconverging graphs terminate.
//!
//! Entry points: [`compile`] (one node → optional document) and
//! [`compile_root`] (the graph's root → serialized query text, or
//! [`MqlOutcome::EmptyExpression`]).

pub mod compile;
pub mod dialect;
pub mod document;
pub mod error;
pub mod format;

pub use compile::{
    compile, compile_from, compile_root, serialize_query, CompileOutput, MqlCompiler, MqlOutcome,
    MqlQuery, DEFAULT_MAX_DEPTH,
};
pub use dialect::MqlDialect;
pub use document::{MqlObject, MqlValue};
pub use error::CompileError;
