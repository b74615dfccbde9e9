//! People domain.

use mqlgen_expr::{Expression, FixedRelation, FixedType};

use crate::semantics::{fixed_type, has_keyword, name_of};
use crate::{QueryKind, QuestionSemantics};

pub const IS_PERSON: FixedType = fixed_type("freebase:people.person");

pub const BIRTH_PLACE_OF: FixedRelation =
    FixedRelation::reversed("freebase:people.person.place_of_birth");
pub const BIRTH_DATE_OF: FixedRelation =
    FixedRelation::reversed("freebase:people.person.date_of_birth");

/// A person identified by keyword.
pub fn person(name: &str) -> Expression {
    IS_PERSON.expression() + has_keyword(name)
}

/// "when was Tim Burton born"
pub fn birth_date_of(person_name: &str) -> QuestionSemantics {
    QuestionSemantics::new(BIRTH_DATE_OF.apply(person(person_name)), QueryKind::Literal)
}

/// "where was Tim Burton born"
pub fn birth_place_of(person_name: &str) -> QuestionSemantics {
    let place = crate::location::IS_PLACE.expression() + BIRTH_PLACE_OF.apply(person(person_name));
    QuestionSemantics::new(name_of(place), QueryKind::Literal)
}
