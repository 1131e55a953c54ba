//! monkey_ast: Token kinds and syntax tree definitions for Monkey.
//!
//! The scanner classifies text into [`TokenKind`]s; the node types in
//! [`node`] describe the statements and expressions a parser builds from
//! those tokens.

pub mod node;
pub mod token_kind;

// Re-export key types
pub use node::*;
pub use token_kind::{TokenKind, KEYWORDS};
