//! Byte constants and classification helpers used by the scanner.

/// Stands in for "no current byte" once the cursor passes the end of input.
pub const NULL_CHARACTER: u8 = 0;

pub const SPACE: u8 = b' ';
pub const TAB: u8 = b'\t';
pub const LINE_FEED: u8 = b'\n';
pub const CARRIAGE_RETURN: u8 = b'\r';
pub const EQUALS: u8 = b'=';
pub const UNDERSCORE: u8 = b'_';

/// Whitespace separates tokens and is never part of one.
#[inline]
pub fn is_white_space(ch: u8) -> bool {
    matches!(ch, SPACE | TAB | LINE_FEED | CARRIAGE_RETURN)
}

/// Identifiers are runs of ASCII letters and underscores. Digits are not
/// allowed anywhere in an identifier.
#[inline]
pub fn is_identifier_part(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == UNDERSCORE
}

#[inline]
pub fn is_digit(ch: u8) -> bool {
    ch.is_ascii_digit()
}
