//! monkey_core: Core utilities shared by the Monkey front end.
//!
//! Provides source positions (byte spans, line maps) used by tokens and
//! diagnostics.

pub mod text;

// Re-export commonly used types
pub use text::{LineAndColumn, LineMap, TextPos, TextSpan};
