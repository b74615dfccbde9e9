//! Film domain: types, relations, entity particles and question templates.

use mqlgen_expr::{Expression, FixedRelation, FixedType};

use crate::people::IS_PERSON;
use crate::semantics::{definition_of, fixed_type, has_keyword, has_name, label_of, name_of};
use crate::{QueryKind, QuestionSemantics};

// ============================================================================
// Types
// ============================================================================

pub const IS_ACTOR: FixedType = fixed_type("freebase:film.actor");
pub const IS_DIRECTOR: FixedType = fixed_type("freebase:film.director");
pub const IS_FILM: FixedType = fixed_type("freebase:film.film");

// ============================================================================
// Relations
// ============================================================================

pub const PRODUCED_BY: FixedRelation = FixedRelation::new("freebase:film.film.produced_by");
pub const RELEASE_DATE_OF: FixedRelation =
    FixedRelation::reversed("freebase:film.film.release_date");
pub const STARS_IN: FixedRelation = FixedRelation::reversed("freebase:film.film.starring");
pub const HAS_ACTOR: FixedRelation = FixedRelation::new("freebase:film.film.starring");
pub const DIRECTED_BY: FixedRelation = FixedRelation::new("freebase:film.film.directed_by");
pub const DIRECTOR_OF: FixedRelation = FixedRelation::reversed("freebase:film.film.directed_by");
pub const DURATION_OF: FixedRelation = FixedRelation::reversed("freebase:film.film.runtime");
pub const LOCATION_OF: FixedRelation =
    FixedRelation::reversed("freebase:film.film.featured_film_locations");

// ============================================================================
// Entity particles
// ============================================================================

/// A film identified by its exact name.
pub fn movie(name: &str) -> Expression {
    IS_FILM.expression() + has_name(name)
}

/// An actor identified by keyword.
pub fn actor(name: &str) -> Expression {
    IS_ACTOR.expression() + has_keyword(name)
}

/// A director identified by keyword.
pub fn director(name: &str) -> Expression {
    IS_DIRECTOR.expression() + has_keyword(name)
}

// ============================================================================
// Question templates
// ============================================================================

/// "list movies"
pub fn list_movies() -> QuestionSemantics {
    QuestionSemantics::new(name_of(IS_FILM.expression()), QueryKind::Enum)
}

/// "movies directed by Martin Scorsese", "which movies did Mel Gibson direct"
pub fn movies_by_director(director_name: &str) -> QuestionSemantics {
    let movie = IS_FILM.expression() + DIRECTED_BY.apply(director(director_name));
    QuestionSemantics::new(label_of(movie), QueryKind::Enum)
}

/// "how long is Pulp Fiction"
pub fn movie_duration(movie_name: &str) -> QuestionSemantics {
    QuestionSemantics::new(
        DURATION_OF.apply(movie(movie_name)),
        QueryKind::LiteralFormat("{} minutes long"),
    )
}

/// "movies with Hugh Laurie", "which movies did Mel Gibson star in"
pub fn movies_with_actor(actor_name: &str) -> QuestionSemantics {
    let movie = IS_FILM.expression() + HAS_ACTOR.apply(actor(actor_name));
    QuestionSemantics::new(name_of(movie), QueryKind::Enum)
}

/// "when was Gladiator released"
pub fn movie_release_date(movie_name: &str) -> QuestionSemantics {
    QuestionSemantics::new(
        RELEASE_DATE_OF.apply(movie(movie_name)),
        QueryKind::Literal,
    )
}

/// "who directed Pocahontas"
pub fn director_of_movie(movie_name: &str) -> QuestionSemantics {
    let director = IS_DIRECTOR.expression() + DIRECTOR_OF.apply(movie(movie_name));
    QuestionSemantics::new(name_of(director), QueryKind::Literal)
}

/// "actors of Fight Club", "who starred in Alien"
pub fn actors_of_movie(movie_name: &str) -> QuestionSemantics {
    let actor = IS_PERSON.expression() + STARS_IN.apply(movie(movie_name));
    QuestionSemantics::new(name_of(actor), QueryKind::Enum)
}

/// "what is Shame about", "plot of Titanic"
pub fn plot_of(movie_name: &str) -> QuestionSemantics {
    QuestionSemantics::new(definition_of(movie(movie_name)), QueryKind::Define)
}

/// "where was Lost in Translation filmed"
pub fn filming_locations_of(movie_name: &str) -> QuestionSemantics {
    let place = crate::location::IS_PLACE.expression() + LOCATION_OF.apply(movie(movie_name));
    QuestionSemantics::new(name_of(place), QueryKind::Enum)
}

/// "who produced Alien"
pub fn producers_of_movie(movie_name: &str) -> QuestionSemantics {
    let producer = IS_PERSON.expression() + PRODUCED_BY.apply(movie(movie_name));
    QuestionSemantics::new(name_of(producer), QueryKind::Enum)
}
