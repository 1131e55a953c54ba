//! The Monkey scanner.
//!
//! A forward-only cursor over the input bytes. Each call to
//! [`Scanner::next_token`] skips whitespace, classifies the byte under the
//! cursor and consumes exactly the bytes of one token. Decisions never need
//! more than one byte of lookahead and the cursor never moves backwards.

use crate::char_codes::*;
use crate::keywords::lookup_ident;
use crate::token::Token;
use monkey_ast::TokenKind;
use monkey_core::text::TextSpan;
use monkey_diagnostics::{messages, Diagnostic, DiagnosticCollection};
use std::iter::FusedIterator;

/// The scanner converts Monkey source text into tokens.
pub struct Scanner {
    /// The source text being scanned.
    input: String,
    /// Index of `ch`.
    position: usize,
    /// Index of the byte after `ch`; always `position + 1`.
    read_position: usize,
    /// The byte under the cursor, or `NULL_CHARACTER` once past the end.
    ch: u8,
    /// Invalid characters seen so far.
    diagnostics: DiagnosticCollection,
}

impl Scanner {
    /// Create a new scanner positioned on the first byte of `input`.
    ///
    /// Positions are `usize` byte offsets, so input of any length is
    /// addressable.
    pub fn new(input: &str) -> Self {
        let mut scanner = Self {
            input: input.to_owned(),
            position: 0,
            read_position: 0,
            ch: NULL_CHARACTER,
            diagnostics: DiagnosticCollection::new(),
        };
        scanner.read_char();
        scanner
    }

    /// The full source text.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Byte offset of the cursor.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Whether every byte of the input has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Get the accumulated diagnostics.
    pub fn diagnostics(&self) -> &DiagnosticCollection {
        &self.diagnostics
    }

    /// Take the accumulated diagnostics, leaving an empty collection.
    pub fn take_diagnostics(&mut self) -> DiagnosticCollection {
        std::mem::take(&mut self.diagnostics)
    }

    /// Turn this scanner into an iterator that yields every remaining token,
    /// ending with exactly one `Eof`.
    pub fn tokens(self) -> TokenStream {
        TokenStream {
            scanner: self,
            finished: false,
        }
    }

    // ========================================================================
    // Core scanning
    // ========================================================================

    /// Scan and return the next token.
    ///
    /// Once the input is exhausted every call returns an `Eof` token with an
    /// empty literal, and the cursor stays where it is.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();
        let start = self.position;

        if self.is_at_end() {
            return Token::eof(start);
        }

        let kind = match self.ch {
            b'(' => self.single(TokenKind::LParen),
            b')' => self.single(TokenKind::RParen),
            b'{' => self.single(TokenKind::LBrace),
            b'}' => self.single(TokenKind::RBrace),
            b',' => self.single(TokenKind::Comma),
            b';' => self.single(TokenKind::Semicolon),
            b'+' => self.single(TokenKind::Plus),
            b'-' => self.single(TokenKind::Minus),
            b'*' => self.single(TokenKind::Asterisk),
            b'/' => self.single(TokenKind::Slash),
            b'<' => self.single(TokenKind::Lt),
            b'>' => self.single(TokenKind::Gt),

            b'=' => self.scan_with_equals(TokenKind::Eq, TokenKind::Assign),
            b'!' => self.scan_with_equals(TokenKind::NotEq, TokenKind::Bang),

            ch if is_identifier_part(ch) => {
                self.read_while(is_identifier_part);
                lookup_ident(&self.input[start..self.position])
            }
            ch if is_digit(ch) => {
                self.read_while(is_digit);
                TokenKind::Int
            }

            _ => self.scan_illegal(start),
        };

        let token = Token::new(
            kind,
            &self.input.as_bytes()[start..self.position],
            TextSpan::from_bounds(start, self.position),
        );
        tracing::trace!(kind = %token.kind(), lexeme = %token.escaped(), start, "scanned token");
        token
    }

    // ========================================================================
    // Token-specific scanning methods
    // ========================================================================

    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.read_char();
        kind
    }

    /// `=` and `!` become `==` and `!=` when an `=` follows.
    fn scan_with_equals(&mut self, pair: TokenKind, single: TokenKind) -> TokenKind {
        if self.peek_char() == EQUALS {
            self.read_char();
            self.read_char();
            pair
        } else {
            self.read_char();
            single
        }
    }

    /// Consume one unrecognized byte and record a diagnostic for it.
    ///
    /// Each byte of a multi-byte character becomes its own `Illegal` token.
    fn scan_illegal(&mut self, start: usize) -> TokenKind {
        let byte = self.ch;
        self.read_char();

        let span = TextSpan::from_bounds(start, self.position);
        let shown = [byte].escape_ascii().to_string();
        tracing::debug!(byte = %shown, start, "invalid character");
        let diagnostic = if byte == NULL_CHARACTER {
            Diagnostic::with_span(span, &messages::NUL_CHARACTER_IN_SOURCE, &[])
        } else {
            Diagnostic::with_span(span, &messages::INVALID_CHARACTER_0, &[&shown])
        };
        self.diagnostics.add(diagnostic);
        TokenKind::Illegal
    }

    // ========================================================================
    // Cursor movement
    // ========================================================================

    /// Advance the cursor by one byte.
    #[inline]
    fn read_char(&mut self) {
        self.ch = self.byte_at(self.read_position);
        self.position = self.read_position;
        self.read_position += 1;
    }

    /// The byte after the cursor, without consuming anything.
    #[inline]
    fn peek_char(&self) -> u8 {
        self.byte_at(self.read_position)
    }

    #[inline]
    fn byte_at(&self, index: usize) -> u8 {
        self.input.as_bytes().get(index).copied().unwrap_or(NULL_CHARACTER)
    }

    /// Consume the longest run of bytes matching `pred`.
    fn read_while(&mut self, pred: fn(u8) -> bool) {
        while !self.is_at_end() && pred(self.ch) {
            self.read_char();
        }
    }

    fn skip_whitespace(&mut self) {
        self.read_while(is_white_space);
    }
}

impl std::fmt::Debug for Scanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scanner")
            .field("position", &self.position)
            .field("len", &self.input.len())
            .field("diagnostics", &self.diagnostics.len())
            .finish()
    }
}

/// Iterator over the tokens of one input, ending with a single `Eof`.
pub struct TokenStream {
    scanner: Scanner,
    finished: bool,
}

impl TokenStream {
    /// Give back the scanner, e.g. to read its diagnostics.
    pub fn into_scanner(self) -> Scanner {
        self.scanner
    }
}

impl Iterator for TokenStream {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.scanner.next_token();
        self.finished = token.is_eof();
        Some(token)
    }
}

impl FusedIterator for TokenStream {}

/// Scan `input` to completion. The last token is always `Eof`.
pub fn scan_all(input: &str) -> Vec<Token> {
    Scanner::new(input).tokens().collect()
}
