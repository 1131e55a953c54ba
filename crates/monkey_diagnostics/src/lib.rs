//! monkey_diagnostics: Diagnostic messages and error reporting infrastructure.
//!
//! Front-end stages never abort on bad input. Instead they record a
//! [`Diagnostic`] and keep going; a later stage (or the REPL) decides how to
//! present them.

use monkey_core::text::TextSpan;
use std::fmt;

/// A diagnostic message template with a code.
///
/// Every scanner diagnostic is an error: the input is still fully tokenized,
/// but the offending bytes have no meaning in Monkey.
#[derive(Debug, Clone)]
pub struct DiagnosticMessage {
    /// The diagnostic code (e.g., 1001).
    pub code: u32,
    /// The message template string. May contain `{0}`, `{1}`, etc. placeholders.
    pub message: &'static str,
}

/// A realized diagnostic with location information and resolved message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The source text span where this diagnostic occurred, if any.
    pub span: Option<TextSpan>,
    pub message_text: String,
    pub code: u32,
}

impl Diagnostic {
    /// Create a new diagnostic without location info.
    pub fn new(message: &DiagnosticMessage, args: &[&str]) -> Self {
        Self {
            span: None,
            message_text: format_message(message.message, args),
            code: message.code,
        }
    }

    /// Create a new diagnostic attached to a source span.
    pub fn with_span(span: TextSpan, message: &DiagnosticMessage, args: &[&str]) -> Self {
        Self {
            span: Some(span),
            ..Self::new(message, args)
        }
    }

    /// The code rendered with its prefix, e.g. `MK1001`.
    pub fn code_string(&self) -> String {
        format!("MK{}", self.code)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error {}: {}", self.code_string(), self.message_text)?;
        if let Some(span) = self.span {
            write!(f, " ({})", span)?;
        }
        Ok(())
    }
}

/// Format a diagnostic message template by replacing `{0}`, `{1}`, etc. with arguments.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{}}}", i), arg);
    }
    result
}

/// A collection of diagnostics accumulated while processing one input.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticCollection {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollection {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }
}

// ============================================================================
// Diagnostic Messages
// ============================================================================

pub mod messages {
    use super::*;

    macro_rules! diag {
        ($code:expr, $msg:expr) => {
            DiagnosticMessage { code: $code, message: $msg }
        };
    }

    // ========================================================================
    // Scanner errors (1000-1099)
    // ========================================================================
    pub const INVALID_CHARACTER_0: DiagnosticMessage = diag!(1001, "Invalid character '{0}'.");
    pub const NUL_CHARACTER_IN_SOURCE: DiagnosticMessage = diag!(1002, "Unexpected NUL byte in source.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_message() {
        let msg = format_message("Invalid character '{0}'.", &["@"]);
        assert_eq!(msg, "Invalid character '@'.");
    }

    #[test]
    fn test_format_message_without_placeholders() {
        assert_eq!(format_message("plain", &["unused"]), "plain");
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::with_span(TextSpan::new(4, 1), &messages::INVALID_CHARACTER_0, &["#"]);
        assert_eq!(diag.to_string(), "error MK1001: Invalid character '#'. (4..5)");
    }

    #[test]
    fn test_diagnostic_without_location() {
        let diag = Diagnostic::new(&messages::INVALID_CHARACTER_0, &["$"]);
        assert!(diag.span.is_none());
        assert_eq!(diag.code, 1001);
        assert_eq!(diag.code_string(), "MK1001");
    }

    #[test]
    fn test_diagnostic_collection() {
        let mut collection = DiagnosticCollection::new();
        assert!(collection.is_empty());

        collection.add(Diagnostic::new(&messages::INVALID_CHARACTER_0, &["@"]));
        collection.add(Diagnostic::new(&messages::NUL_CHARACTER_IN_SOURCE, &[]));
        assert!(!collection.is_empty());
        assert_eq!(collection.len(), 2);
        assert_eq!(collection.diagnostics()[1].code_string(), "MK1002");
    }
}
