//! Reserved-word lookup.

use monkey_ast::TokenKind;

pub use monkey_ast::KEYWORDS;

/// Classify a scanned word: its reserved kind if it is a keyword, otherwise
/// [`TokenKind::Ident`].
#[inline]
pub fn lookup_ident(spelling: &str) -> TokenKind {
    TokenKind::from_keyword(spelling).unwrap_or(TokenKind::Ident)
}
