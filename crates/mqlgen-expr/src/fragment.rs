//! Fragment shapes that vocabularies declare as constants.
//!
//! A vocabulary entry is one of:
//!
//! - `FixedType`: "is a T" (a type edge on a fresh head),
//! - `FixedRelation`: "related to X by R", optionally reversed,
//! - `FixedDataRelation`: "has R = literal", optionally language-tagged.
//!
//! The `reverse` flag is resolved here, when the fragment is applied. Once an
//! edge is in the graph it is stored in its final direction.

use crate::expression::Expression;
use crate::literal::Literal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedType {
    pub type_relation: &'static str,
    pub fixed_type: &'static str,
}

impl FixedType {
    pub const fn new(type_relation: &'static str, fixed_type: &'static str) -> Self {
        Self {
            type_relation,
            fixed_type,
        }
    }

    pub fn expression(&self) -> Expression {
        let mut e = Expression::new();
        e.add_data(self.type_relation, Literal::plain(self.fixed_type));
        e
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedRelation {
    pub relation: &'static str,
    pub reverse: bool,
}

impl FixedRelation {
    pub const fn new(relation: &'static str) -> Self {
        Self {
            relation,
            reverse: false,
        }
    }

    pub const fn reversed(relation: &'static str) -> Self {
        Self {
            relation,
            reverse: true,
        }
    }

    /// New head related to `destination`'s head.
    ///
    /// Forward: `head -relation-> destination`. Reversed: `destination -relation-> head`.
    pub fn apply(&self, destination: Expression) -> Expression {
        let mut e = Expression::new();
        e.merge(destination);
        e.decapitate(self.relation, self.reverse);
        e
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDataRelation {
    pub relation: &'static str,
    pub language: Option<&'static str>,
}

impl FixedDataRelation {
    pub const fn new(relation: &'static str) -> Self {
        Self {
            relation,
            language: None,
        }
    }

    pub const fn with_language(relation: &'static str, language: &'static str) -> Self {
        Self {
            relation,
            language: Some(language),
        }
    }

    pub fn apply(&self, data: &str) -> Expression {
        let literal = match self.language {
            Some(lang) => Literal::tagged(data, lang),
            None => Literal::plain(data),
        };
        let mut e = Expression::new();
        e.add_data(self.relation, literal);
        e
    }
}
