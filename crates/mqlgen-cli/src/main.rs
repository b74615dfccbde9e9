//! mqlgen CLI
//!
//! - `compile`: expression graph JSON → MQL read query
//! - `demo`: compile the built-in Freebase film questions

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{fmt, EnvFilter};

use mqlgen_expr::NodeId;
use mqlgen_mql::{compile_from, MqlDialect, MqlOutcome};

mod demo;

const LOG_ENV: &str = "MQLGEN_LOG";

#[derive(Parser)]
#[command(name = "mqlgen")]
#[command(
    author,
    version,
    about = "mqlgen: compile semantic expression graphs into MQL queries"
)]
struct Cli {
    /// Enable debug logging (overrides MQLGEN_LOG)
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(flatten)]
    dialect: DialectArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Clone, Default)]
struct DialectArgs {
    /// Dialect JSON file (missing fields use the Freebase defaults)
    #[arg(long, global = true)]
    dialect: Option<PathBuf>,

    /// Relation namespace rewritten to `/a/b/c` keys
    #[arg(long, global = true)]
    namespace: Option<String>,

    /// Prefix character for incoming relation keys
    #[arg(long, global = true)]
    reverse_marker: Option<char>,
}

impl DialectArgs {
    fn load(&self) -> Result<MqlDialect> {
        let mut dialect = match &self.dialect {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("failed to read dialect {}", path.display()))?;
                MqlDialect::from_json_str(&text)
                    .with_context(|| format!("invalid dialect {}", path.display()))?
            }
            None => MqlDialect::default(),
        };
        if let Some(namespace) = &self.namespace {
            dialect.namespace = namespace.clone();
        }
        if let Some(marker) = self.reverse_marker {
            dialect.reverse_marker = marker;
        }
        dialect.validate()?;
        Ok(dialect)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Compile an expression graph document into an MQL query
    Compile {
        /// Graph JSON (`{"root": 0, "nodes": [{"edges": [...]}]}`)
        input: PathBuf,

        /// Start node (defaults to the document's root)
        #[arg(long)]
        root: Option<u32>,

        /// Write the query here instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Compile the built-in example questions
    Demo {
        /// Only compile the built-in question(s) matching this text
        question: Vec<String>,
    },
}

fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    // A second init (tests, embedding) keeps the first subscriber.
    let _ = fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.debug);
    let dialect = cli.dialect.load()?;

    match cli.command {
        Commands::Compile { input, root, out } => cmd_compile(&input, root, out.as_deref(), &dialect),
        Commands::Demo { question } => demo::run(&question.join(" "), &dialect),
    }
}

fn cmd_compile(
    input: &Path,
    root: Option<u32>,
    out: Option<&Path>,
    dialect: &MqlDialect,
) -> Result<ExitCode> {
    let text = fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let graph = mqlgen_expr::interchange::parse_graph_json(&text)
        .with_context(|| format!("invalid expression graph {}", input.display()))?;
    let root = root.map(NodeId).unwrap_or_else(|| graph.root());

    match compile_from(&graph, root, dialect)? {
        MqlOutcome::Query(query) => {
            match out {
                Some(path) => {
                    fs::write(path, format!("{}\n", query.text))
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("{} {}", "wrote".green().bold(), path.display().to_string().bold());
                }
                None => println!("{}", query.text),
            }
            Ok(ExitCode::SUCCESS)
        }
        MqlOutcome::EmptyExpression { root } => {
            eprintln!("{} (root {root} has no relations)", not_generated());
            Ok(ExitCode::from(2))
        }
    }
}

fn not_generated() -> colored::ColoredString {
    "Query not generated :(".yellow().bold()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialect_flags_override_defaults() {
        let args = DialectArgs {
            dialect: None,
            namespace: Some("fb".to_string()),
            reverse_marker: Some('~'),
        };
        let dialect = args.load().expect("dialect");
        assert_eq!(dialect.namespace, "fb");
        assert_eq!(dialect.reverse_marker, '~');
        assert_eq!(dialect.lang_namespace, "/lang/");
    }

    #[test]
    fn namespace_with_colon_is_rejected() {
        let args = DialectArgs {
            namespace: Some("fb:x".to_string()),
            ..DialectArgs::default()
        };
        let err = args.load().expect_err("should error");
        assert!(
            matches!(
                err.downcast_ref::<mqlgen_mql::CompileError>(),
                Some(mqlgen_mql::CompileError::InvalidDialect { .. })
            ),
            "err={err}"
        );
    }

    #[test]
    fn compile_command_writes_query_file() {
        let dir = std::env::temp_dir().join(format!("mqlgen-cli-{}", std::process::id()));
        fs::create_dir_all(&dir).expect("mkdir");
        let input = dir.join("graph.json");
        let out = dir.join("query.json");
        fs::write(
            &input,
            r#"{ "nodes": [ { "edges": [ { "relation": "rdf:type", "literal": "freebase:film.film" } ] } ] }"#,
        )
        .expect("write graph");

        let code = cmd_compile(&input, None, Some(out.as_path()), &MqlDialect::default())
            .expect("compile");
        assert_eq!(code, ExitCode::SUCCESS);
        let text = fs::read_to_string(&out).expect("read query");
        assert_eq!(text, "[\n  {\n    \"type\": \"/film/film\"\n  }\n]\n");
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn cli_parses_compile_with_global_flags() {
        let cli = Cli::try_parse_from(["mqlgen", "compile", "g.json", "--root", "3", "-d"])
            .expect("parse");
        assert!(cli.debug);
        assert!(matches!(cli.command, Commands::Compile { root: Some(3), .. }));
    }
}
