//! Errors surfaced by the driver.
//!
//! Scanning itself cannot fail; everything here comes from I/O around it.

use miette::Diagnostic;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ReplError {
    #[error("failed to read input")]
    #[diagnostic(code(monkey::repl::read))]
    Read(#[source] io::Error),

    #[error("failed to write output")]
    #[diagnostic(code(monkey::repl::write))]
    Write(#[source] io::Error),

    #[error("failed to read config file `{}`", .path.display())]
    #[diagnostic(code(monkey::config::read))]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file `{}`", .path.display())]
    #[diagnostic(
        code(monkey::config::parse),
        help("expected a JSON object such as {{\"prompt\": \">> \", \"format\": \"json\"}}")
    )]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode token as JSON")]
    #[diagnostic(code(monkey::repl::serialize))]
    Serialize(#[source] serde_json::Error),
}
