//! Command-line plumbing shared by the `hboi` and `vaardigheden` binaries.
//!
//! Each binary parses its own flags, then hands the outcome to [`finish`],
//! the single place where errors become stderr lines and exit codes.

use std::io::{IsTerminal, Write};
use std::process::ExitCode;

use clap::builder::PossibleValuesParser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::engine::QueryEngine;
use crate::error::QueryError;
use crate::filter::{FilterCriteria, Tree};
use crate::vocabulary::LEVELS;

/// Parser restricting `--level` to the known proficiency levels.
pub fn level_parser() -> PossibleValuesParser {
    PossibleValuesParser::new(LEVELS.values().to_vec())
}

/// Install the stderr log subscriber. Colors only when stderr is a terminal.
pub fn init_tracing(config: &Config) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .init();
}

/// Serialize a result tree: two-space indentation, non-ASCII kept literal.
pub fn render(tree: &Tree) -> serde_json::Result<String> {
    serde_json::to_string_pretty(tree)
}

/// Run `engine` and render the result.
pub fn run(
    engine: &QueryEngine,
    config: &Config,
    criteria: &FilterCriteria,
) -> anyhow::Result<String> {
    let tree = engine.query(config, criteria)?;
    Ok(render(&tree)?)
}

/// Print the outcome of an invocation and map it to an exit status.
pub fn finish(outcome: anyhow::Result<String>) -> ExitCode {
    match outcome {
        Ok(json) => {
            let mut stdout = std::io::stdout().lock();
            if let Err(e) = writeln!(stdout, "{}", json) {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            for line in report_lines(&err) {
                eprintln!("{}", line);
            }
            ExitCode::FAILURE
        }
    }
}

/// Report a failed argument parse. Help and version output are not failures.
pub fn parse_failure(err: clap::Error) -> ExitCode {
    let _ = err.print();
    if err.use_stderr() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn report_lines(err: &anyhow::Error) -> Vec<String> {
    match err.downcast_ref::<QueryError>() {
        Some(query_err) => query_err.report_lines(),
        None => vec![format!("Error: {:#}", err)],
    }
}

/// `--help` epilogue: one bulleted section per vocabulary, then examples.
pub fn epilog(sections: &[(&str, &[&str])], program: &str, examples: &[&str]) -> String {
    let mut out = String::new();
    for (title, values) in sections {
        out.push_str(title);
        out.push_str(":\n");
        for value in values.iter() {
            out.push_str("  - ");
            out.push_str(value);
            out.push('\n');
        }
        out.push('\n');
    }
    out.push_str("Examples:\n");
    for example in examples {
        out.push_str("  ");
        out.push_str(program);
        if !example.is_empty() {
            out.push(' ');
            out.push_str(example);
        }
        out.push('\n');
    }
    out
}
