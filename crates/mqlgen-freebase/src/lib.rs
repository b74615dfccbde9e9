//! Freebase vocabulary for mqlgen.
//!
//! Types and relations of the film, people and location domains, expressed as
//! `mqlgen_expr` fragment constants, plus the question semantics that compose
//! them. Token matching (which question template applies, which words form a
//! name) belongs to the grammar and is not part of this crate; the template
//! functions here take the already-extracted names.

pub mod film;
pub mod location;
pub mod people;
pub mod semantics;

use mqlgen_expr::Expression;
use serde::Serialize;

/// How the driver should present the answer to a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryKind {
    /// A list of answers.
    Enum,
    /// A single value.
    Literal,
    /// A single value rendered through a `{}` template.
    LiteralFormat(&'static str),
    /// A definition or description.
    Define,
}

/// Output of a question template: the expression plus its presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSemantics {
    pub expression: Expression,
    pub kind: QueryKind,
}

impl QuestionSemantics {
    pub fn new(expression: Expression, kind: QueryKind) -> Self {
        Self { expression, kind }
    }
}
