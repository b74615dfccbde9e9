//! Cross-domain Freebase semantics: names, keywords, types, definitions.

use mqlgen_expr::{Expression, FixedDataRelation, FixedRelation, FixedType};

pub const NAME_RELATION: &str = "freebase:type.object.name";
pub const TYPE_RELATION: &str = "freebase:type.object.type";
pub const ARTICLE_RELATION: &str = "freebase:common.topic.article";

/// Language attached to keyword and name literals.
pub const KEYWORD_LANGUAGE: &str = "en";

pub const HAS_KEYWORD: FixedDataRelation =
    FixedDataRelation::with_language(NAME_RELATION, KEYWORD_LANGUAGE);
pub const HAS_NAME: FixedDataRelation =
    FixedDataRelation::with_language(NAME_RELATION, KEYWORD_LANGUAGE);

pub const NAME_OF: FixedRelation = FixedRelation::reversed(NAME_RELATION);
pub const LABEL_OF: FixedRelation = FixedRelation::reversed(NAME_RELATION);
pub const DEFINITION_OF: FixedRelation = FixedRelation::reversed(ARTICLE_RELATION);

pub const fn fixed_type(fixed_type: &'static str) -> FixedType {
    FixedType::new(TYPE_RELATION, fixed_type)
}

pub fn has_keyword(keyword: &str) -> Expression {
    HAS_KEYWORD.apply(keyword)
}

pub fn has_name(name: &str) -> Expression {
    HAS_NAME.apply(name)
}

pub fn name_of(entity: Expression) -> Expression {
    NAME_OF.apply(entity)
}

pub fn label_of(entity: Expression) -> Expression {
    LABEL_OF.apply(entity)
}

pub fn definition_of(entity: Expression) -> Expression {
    DEFINITION_OF.apply(entity)
}
