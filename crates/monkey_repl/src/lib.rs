//! monkey_repl: The interactive driver for the Monkey scanner.
//!
//! Reads source one line at a time, scans each line with a fresh
//! [`monkey_scanner::Scanner`] and reports every token it produces.

pub mod config;
pub mod error;
pub mod logging;
pub mod repl;

pub use config::{load_options, parse_options, OutputFormat, ReplOptions, PROMPT};
pub use error::ReplError;
pub use logging::init_tracing;
pub use repl::{start, write_tokens};
