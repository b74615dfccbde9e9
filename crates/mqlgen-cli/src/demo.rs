//! Built-in example questions.
//!
//! Each question is paired with the film template that its grammar rule
//! would select and the names that rule would extract.

use anyhow::{anyhow, Result};
use colored::Colorize;
use std::process::ExitCode;

use mqlgen_freebase::{film, QuestionSemantics};
use mqlgen_mql::{compile_root, MqlDialect, MqlOutcome};

pub struct DemoQuestion {
    pub text: &'static str,
    pub build: fn() -> QuestionSemantics,
}

pub const QUESTIONS: &[DemoQuestion] = &[
    DemoQuestion {
        text: "List movies directed by Martin Scorsese",
        build: || film::movies_by_director("Martin Scorsese"),
    },
    DemoQuestion {
        text: "which movies did Mel Gibson star in?",
        build: || film::movies_with_actor("Mel Gibson"),
    },
    DemoQuestion {
        text: "When was Gladiator released?",
        build: || film::movie_release_date("Gladiator"),
    },
    DemoQuestion {
        text: "who directed Pocahontas?",
        build: || film::director_of_movie("Pocahontas"),
    },
    DemoQuestion {
        text: "actors of Fight Club",
        build: || film::actors_of_movie("Fight Club"),
    },
];

fn normalize(text: &str) -> String {
    text.trim().trim_end_matches('?').trim().to_lowercase()
}

/// Built-in questions matching `filter` (all of them for an empty filter).
pub fn select(filter: &str) -> Vec<&'static DemoQuestion> {
    let wanted = normalize(filter);
    QUESTIONS
        .iter()
        .filter(|q| wanted.is_empty() || normalize(q.text) == wanted)
        .collect()
}

pub fn run(filter: &str, dialect: &MqlDialect) -> Result<ExitCode> {
    let selected = select(filter);
    if selected.is_empty() {
        let known: Vec<&str> = QUESTIONS.iter().map(|q| q.text).collect();
        return Err(anyhow!(
            "no built-in question matches `{filter}` (known: {})",
            known.join(" | ")
        ));
    }

    for question in selected {
        println!("{}", question.text.bold());
        println!("{}", "-".repeat(question.text.chars().count()));
        let semantics = (question.build)();
        tracing::debug!(question = question.text, kind = ?semantics.kind, "built question semantics");
        match compile_root(&semantics.expression.into_graph(), dialect)? {
            MqlOutcome::Query(query) => println!("{}", query.text),
            MqlOutcome::EmptyExpression { .. } => println!("{}", super::not_generated()),
        }
        println!();
    }
    Ok(ExitCode::SUCCESS)
}
