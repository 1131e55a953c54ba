//! REPL integration tests.
//!
//! Drives the loop with in-memory input and checks exactly what it writes.

use monkey_repl::{start, OutputFormat, ReplOptions};
use std::io::Cursor;

/// Helper: run the REPL over `input` and return everything it wrote.
fn run(input: &str, options: &ReplOptions) -> String {
    let mut output = Vec::new();
    start(Cursor::new(input), &mut output, options).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_empty_input_prints_prompt_once() {
    assert_eq!(run("", &ReplOptions::default()), ">> ");
}

#[test]
fn test_single_line() {
    let output = run("let five = 5;\n", &ReplOptions::default());
    assert_eq!(
        output,
        concat!(
            ">> ",
            "Let \"let\"\n",
            "Ident \"five\"\n",
            "Assign \"=\"\n",
            "Int \"5\"\n",
            "Semicolon \";\"\n",
            "Eof \"\"\n",
            ">> ",
        )
    );
}

#[test]
fn test_each_line_gets_its_own_scanner() {
    let output = run("10 == 10;\n!=\r\n", &ReplOptions::default());
    assert_eq!(
        output,
        concat!(
            ">> ",
            "Int \"10\"\n",
            "Eq \"==\"\n",
            "Int \"10\"\n",
            "Semicolon \";\"\n",
            "Eof \"\"\n",
            ">> ",
            "NotEq \"!=\"\n",
            "Eof \"\"\n",
            ">> ",
        )
    );
}

#[test]
fn test_blank_line_prints_only_eof() {
    let output = run("\n", &ReplOptions::default());
    assert_eq!(output, ">> Eof \"\"\n>> ");
}

#[test]
fn test_last_line_without_newline() {
    let output = run("@", &ReplOptions::default());
    assert_eq!(output, ">> Illegal \"@\"\nEof \"\"\n>> ");
}

#[test]
fn test_custom_prompt_and_spans() {
    let options = ReplOptions {
        prompt: "monkey> ".to_string(),
        show_spans: true,
        ..ReplOptions::default()
    };
    let output = run("fn x\n", &options);
    assert_eq!(
        output,
        "monkey> Function \"fn\" @ 0..2\nIdent \"x\" @ 3..4\nEof \"\" @ 4..4\nmonkey> "
    );
}

#[test]
fn test_json_output() {
    let options = ReplOptions {
        prompt: String::new(),
        format: OutputFormat::Json,
        ..ReplOptions::default()
    };
    let output = run("let\n", &options);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines,
        vec![
            r#"{"kind":"Let","literal":"let","span":{"start":0,"length":3}}"#,
            r#"{"kind":"Eof","literal":"","span":{"start":3,"length":0}}"#,
        ]
    );
}

#[test]
fn test_diagnostics_follow_tokens() {
    let options = ReplOptions {
        prompt: String::new(),
        show_diagnostics: true,
        ..ReplOptions::default()
    };
    let output = run("a # b\n", &options);
    assert_eq!(
        output,
        concat!(
            "Ident \"a\"\n",
            "Illegal \"#\"\n",
            "Ident \"b\"\n",
            "Eof \"\"\n",
            "error[MK1001]: Invalid character '#'. at 1:3\n",
        )
    );
}

#[test]
fn test_diagnostics_hidden_by_default() {
    let output = run("#\n", &ReplOptions::default());
    assert!(!output.contains("MK1001"));
}

#[test]
fn test_non_ascii_prints_one_token_per_byte() {
    let options = ReplOptions {
        prompt: String::new(),
        show_diagnostics: true,
        ..ReplOptions::default()
    };
    let output = run("é\n", &options);
    assert_eq!(
        output,
        concat!(
            "Illegal \"\\xc3\"\n",
            "Illegal \"\\xa9\"\n",
            "Eof \"\"\n",
            "error[MK1001]: Invalid character '\\xc3'. at 1:1\n",
            "error[MK1001]: Invalid character '\\xa9'. at 1:2\n",
        )
    );
}

#[test]
fn test_json_escapes_stray_bytes() {
    let options = ReplOptions {
        prompt: String::new(),
        format: OutputFormat::Json,
        ..ReplOptions::default()
    };
    let output = run("é\n", &options);
    let first = output.lines().next().unwrap_or_default();
    assert_eq!(
        first,
        r#"{"kind":"Illegal","literal":"\\xc3","span":{"start":0,"length":1}}"#
    );
}
