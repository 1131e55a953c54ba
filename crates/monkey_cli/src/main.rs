//! monkey: Interactive tokenizer for the Monkey language.
//!
//! Usage:
//!   monkey [options]
//!
//! Reads Monkey source from stdin one line at a time and prints the tokens
//! of each line. With `--eval` a single string is scanned instead.

use clap::Parser as ClapParser;
use monkey_repl::{init_tracing, load_options, start, write_tokens, OutputFormat, ReplOptions};
use std::io;
use std::path::PathBuf;

#[derive(ClapParser, Debug)]
#[command(name = "monkey", about = "Tokenize Monkey source interactively", disable_version_flag = true)]
struct Cli {
    /// Prompt printed before each line.
    #[arg(long)]
    prompt: Option<String>,

    /// Path to a JSON options file.
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Show each token's byte span.
    #[arg(long)]
    spans: bool,

    /// Print tokens as JSON objects.
    #[arg(long)]
    json: bool,

    /// Report invalid characters after each line.
    #[arg(long)]
    diagnostics: bool,

    /// Never use colors.
    #[arg(long = "no-color")]
    no_color: bool,

    /// Scan this source text and exit.
    #[arg(short = 'e', long, value_name = "SOURCE")]
    eval: Option<String>,

    /// Print the version.
    #[arg(short = 'v', long)]
    version: bool,
}

fn main() -> miette::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    if cli.version {
        println!("monkey {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let options = resolve_options(&cli, stdout_is_terminal())?;
    tracing::debug!(?options, "starting");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(source) = &cli.eval {
        write_tokens(&mut out, source, &options)?;
        return Ok(());
    }

    start(io::stdin().lock(), out, &options)?;
    Ok(())
}

/// Options from the config file (if any), overridden by command-line flags.
fn resolve_options(cli: &Cli, is_terminal: bool) -> Result<ReplOptions, monkey_repl::ReplError> {
    let mut options = match &cli.config {
        Some(path) => load_options(path)?,
        None => ReplOptions::default(),
    };

    // CLI options override the config file
    if let Some(prompt) = &cli.prompt {
        options.prompt = prompt.clone();
    }
    if cli.eval.is_some() {
        options.prompt.clear();
    }
    if cli.spans { options.show_spans = true; }
    if cli.json { options.format = OutputFormat::Json; }
    if cli.diagnostics { options.show_diagnostics = true; }
    options.color = !cli.no_color && (options.color || is_terminal);

    Ok(options)
}

fn stdout_is_terminal() -> bool {
    #[cfg(unix)]
    {
        unsafe { libc::isatty(1) != 0 }
    }
    #[cfg(not(unix))]
    {
        false
    }
}
