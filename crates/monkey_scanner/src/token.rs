//! Tokens produced by the scanner.

use monkey_ast::TokenKind;
use monkey_core::text::{TextPos, TextSpan};
use serde::{Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;

/// A scanned token: its kind plus the exact source bytes it was built from.
///
/// The lexeme is kept as bytes because an `Illegal` token may hold a single
/// byte of a multi-byte character, which is not valid UTF-8 on its own.
///
/// Two tokens are equal when their kind and lexeme match. The span records
/// where the token came from and takes no part in comparisons.
#[derive(Debug, Clone, Serialize)]
pub struct Token {
    kind: TokenKind,
    #[serde(rename = "literal", serialize_with = "serialize_lexeme")]
    lexeme: Box<[u8]>,
    span: TextSpan,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl AsRef<[u8]>, span: TextSpan) -> Self {
        Self {
            kind,
            lexeme: lexeme.as_ref().into(),
            span,
        }
    }

    /// The end-of-input marker, positioned at `pos`.
    pub fn eof(pos: TextPos) -> Self {
        Self::new(TokenKind::Eof, b"", TextSpan::empty(pos))
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The source bytes of this token. Empty only for [`TokenKind::Eof`].
    #[inline]
    pub fn lexeme(&self) -> &[u8] {
        &self.lexeme
    }

    /// The lexeme as text. A stray byte of a multi-byte character shows up
    /// as U+FFFD.
    pub fn literal(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.lexeme)
    }

    /// The lexeme with non-printable and non-ASCII bytes escaped (`\xc3`).
    pub fn escaped(&self) -> impl fmt::Display + '_ {
        self.lexeme.escape_ascii()
    }

    #[inline]
    pub fn span(&self) -> TextSpan {
        self.span
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// The length of this token in bytes.
    pub fn len(&self) -> usize {
        self.lexeme.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lexeme.is_empty()
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.lexeme == other.lexeme
    }
}

impl Eq for Token {}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} \"{}\"", self.kind, self.escaped())
    }
}

/// Valid UTF-8 lexemes serialize as-is, stray bytes in escaped form.
fn serialize_lexeme<S: Serializer>(lexeme: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    match std::str::from_utf8(lexeme) {
        Ok(text) => serializer.serialize_str(text),
        Err(_) => serializer.collect_str(&lexeme.escape_ascii()),
    }
}
