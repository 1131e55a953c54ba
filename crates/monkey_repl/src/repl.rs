//! The read-scan-print loop.

use crate::config::{OutputFormat, ReplOptions};
use crate::error::ReplError;
use monkey_ast::TokenKind;
use monkey_core::text::LineMap;
use monkey_scanner::{Scanner, Token};
use std::io::{BufRead, Write};

// ANSI color codes
const RED: &str = "\x1b[31m";
const GRAY: &str = "\x1b[90m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Run the REPL until `input` is exhausted.
///
/// Before each line the prompt is written and flushed. Every line is
/// scanned on its own, and all of its tokens up to and including `Eof` are
/// written to `output`. Reaching the end of `input` is a normal exit.
pub fn start<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    options: &ReplOptions,
) -> Result<(), ReplError> {
    let mut line = String::new();
    let mut line_number = 0usize;

    loop {
        write!(output, "{}", options.prompt).map_err(ReplError::Write)?;
        output.flush().map_err(ReplError::Write)?;

        line.clear();
        let read = input.read_line(&mut line).map_err(ReplError::Read)?;
        if read == 0 {
            tracing::debug!(lines = line_number, "end of input");
            return Ok(());
        }
        line_number += 1;

        write_tokens(&mut output, strip_line_ending(&line), options)?;
    }
}

/// Scan `source` and write its tokens (and, if enabled, its diagnostics).
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn write_tokens<W: Write>(
    output: &mut W,
    source: &str,
    options: &ReplOptions,
) -> Result<(), ReplError> {
    let mut stream = Scanner::new(source).tokens();
    let mut count = 0usize;
    for token in stream.by_ref() {
        write_token(output, &token, options)?;
        count += 1;
    }

    let scanner = stream.into_scanner();
    let diagnostics = scanner.diagnostics();
    tracing::debug!(tokens = count, invalid = diagnostics.len(), "scanned line");

    if options.show_diagnostics && !diagnostics.is_empty() {
        let line_map = LineMap::new(source);
        for diag in diagnostics.diagnostics() {
            let location = diag
                .span
                .map(|span| format!(" at {}", line_map.line_and_column_of(span.start)))
                .unwrap_or_default();
            let written = if options.color {
                writeln!(
                    output,
                    "{}{}error{}[{}]: {}{}",
                    BOLD, RED, RESET, diag.code_string(), diag.message_text, location
                )
            } else {
                writeln!(
                    output,
                    "error[{}]: {}{}",
                    diag.code_string(),
                    diag.message_text,
                    location
                )
            };
            written.map_err(ReplError::Write)?;
        }
    }
    Ok(())
}

fn write_token<W: Write>(output: &mut W, token: &Token, options: &ReplOptions) -> Result<(), ReplError> {
    match options.format {
        OutputFormat::Json => {
            let json = serde_json::to_string(token).map_err(ReplError::Serialize)?;
            writeln!(output, "{}", json).map_err(ReplError::Write)
        }
        OutputFormat::Text => {
            let highlight = options.color && token.kind() == TokenKind::Illegal;
            let written = if highlight {
                write!(output, "{}{}{}", RED, token, RESET)
            } else {
                write!(output, "{}", token)
            };
            written.map_err(ReplError::Write)?;

            if options.show_spans {
                let written = if options.color {
                    write!(output, " {}@ {}{}", GRAY, token.span(), RESET)
                } else {
                    write!(output, " @ {}", token.span())
                };
                written.map_err(ReplError::Write)?;
            }
            writeln!(output).map_err(ReplError::Write)
        }
    }
}

/// Drop one trailing `\n` or `\r\n`.
fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_line_ending() {
        assert_eq!(strip_line_ending("let x\n"), "let x");
        assert_eq!(strip_line_ending("let x\r\n"), "let x");
        assert_eq!(strip_line_ending("let x"), "let x");
        assert_eq!(strip_line_ending("\n\n"), "\n");
    }

    #[test]
    fn test_write_tokens_text() {
        let mut out = Vec::new();
        write_tokens(&mut out, "x == 1", &ReplOptions::default()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "Ident \"x\"\nEq \"==\"\nInt \"1\"\nEof \"\"\n");
    }

    #[test]
    fn test_write_tokens_colors_illegal() {
        let options = ReplOptions {
            color: true,
            ..ReplOptions::default()
        };
        let mut out = Vec::new();
        write_tokens(&mut out, "@", &options).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("\x1b[31mIllegal \"@\"\x1b[0m\n"));
    }
}
