//! Error type for token whitelist validation.

use std::fmt;

/// A value contained a byte outside the token whitelist.
///
/// Carries the first offending byte, its offset, and the full input so the
/// rejected value can be reconstructed in logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidToken {
    pub byte: u8,
    pub position: usize,
    pub input: String,
}

impl InvalidToken {
    /// Printable form of the offending byte. Non-ASCII bytes map to U+FFFD.
    pub fn character(&self) -> char {
        if self.byte.is_ascii() {
            self.byte as char
        } else {
            char::REPLACEMENT_CHARACTER
        }
    }
}

impl fmt::Display for InvalidToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid token '{}' (code {}) at position {}",
            self.character().escape_default(),
            self.byte,
            self.position
        )
    }
}

impl std::error::Error for InvalidToken {}
