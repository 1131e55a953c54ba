//! monkey_scanner: Lexer/tokenizer for Monkey source code.
//!
//! Converts source text into [`Token`]s one at a time on demand:
//! - Maximal-munch identifiers, keywords and integer literals
//! - One byte of lookahead to tell `==`/`!=` from `=`/`!`
//! - Unrecognized bytes become `Illegal` tokens instead of errors

mod char_codes;
mod keywords;
mod scanner;
mod token;

pub use keywords::{lookup_ident, KEYWORDS};
pub use scanner::{scan_all, Scanner, TokenStream};
pub use token::Token;
