//! TokenKind enum - every lexical category the scanner can produce.

use serde::Serialize;

/// The kind of a lexical token.
///
/// The set is closed: every token carries exactly one of these. Keyword
/// kinds are only ever produced by [`TokenKind::from_keyword`], never by the
/// scanner's character dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[repr(u8)]
pub enum TokenKind {
    // ========================================================================
    // Special
    // ========================================================================
    /// A byte the scanner does not recognize.
    Illegal = 0,
    /// End of input. Its literal is always empty.
    Eof = 1,

    // Identifiers and literals
    Ident = 2,
    Int = 3,

    // ========================================================================
    // Operators and punctuation
    // ========================================================================
    Assign = 4,
    Plus = 5,
    Minus = 6,
    Bang = 7,
    Asterisk = 8,
    Slash = 9,
    Lt = 10,
    Gt = 11,
    Eq = 12,
    NotEq = 13,
    Comma = 14,
    Semicolon = 15,
    LParen = 16,
    RParen = 17,
    LBrace = 18,
    RBrace = 19,

    // ========================================================================
    // Keywords
    // ========================================================================
    Function = 20,
    Let = 21,
    True = 22,
    False = 23,
    If = 24,
    Else = 25,
    Return = 26,
}

/// Every reserved word and the kind it scans as.
pub const KEYWORDS: &[(&str, TokenKind)] = &[
    ("fn", TokenKind::Function),
    ("let", TokenKind::Let),
    ("true", TokenKind::True),
    ("false", TokenKind::False),
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("return", TokenKind::Return),
];

impl TokenKind {
    /// Whether this kind is a reserved word.
    #[inline]
    pub fn is_keyword(self) -> bool {
        let v = self as u8;
        v >= TokenKind::Function as u8 && v <= TokenKind::Return as u8
    }

    /// Whether this kind is an operator or delimiter.
    #[inline]
    pub fn is_punctuation(self) -> bool {
        let v = self as u8;
        v >= TokenKind::Assign as u8 && v <= TokenKind::RBrace as u8
    }

    /// Whether this kind is an identifier or integer literal.
    #[inline]
    pub fn is_literal(self) -> bool {
        matches!(self, TokenKind::Ident | TokenKind::Int)
    }

    /// Get the keyword text for a keyword kind, or None if not a keyword.
    pub fn keyword_text(self) -> Option<&'static str> {
        match self {
            TokenKind::Function => Some("fn"),
            TokenKind::Let => Some("let"),
            TokenKind::True => Some("true"),
            TokenKind::False => Some("false"),
            TokenKind::If => Some("if"),
            TokenKind::Else => Some("else"),
            TokenKind::Return => Some("return"),
            _ => None,
        }
    }

    /// Look up a keyword TokenKind from text. Exact, case-sensitive match.
    pub fn from_keyword(text: &str) -> Option<TokenKind> {
        match text {
            "fn" => Some(TokenKind::Function),
            "let" => Some(TokenKind::Let),
            "true" => Some(TokenKind::True),
            "false" => Some(TokenKind::False),
            "if" => Some(TokenKind::If),
            "else" => Some(TokenKind::Else),
            "return" => Some(TokenKind::Return),
            _ => None,
        }
    }

    /// Get the punctuation text for a punctuation kind, or None.
    pub fn punctuation_text(self) -> Option<&'static str> {
        match self {
            TokenKind::Assign => Some("="),
            TokenKind::Plus => Some("+"),
            TokenKind::Minus => Some("-"),
            TokenKind::Bang => Some("!"),
            TokenKind::Asterisk => Some("*"),
            TokenKind::Slash => Some("/"),
            TokenKind::Lt => Some("<"),
            TokenKind::Gt => Some(">"),
            TokenKind::Eq => Some("=="),
            TokenKind::NotEq => Some("!="),
            TokenKind::Comma => Some(","),
            TokenKind::Semicolon => Some(";"),
            TokenKind::LParen => Some("("),
            TokenKind::RParen => Some(")"),
            TokenKind::LBrace => Some("{"),
            TokenKind::RBrace => Some("}"),
            _ => None,
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
