//! Token whitelist validation.
//!
//! Every value handed out by the KVP parser passes through here. The allowed
//! alphabet is ASCII letters, digits, and a fixed punctuation set; markup and
//! quoting delimiters (`<`, `>`, quotes, backslash) are not in it.

mod error;

pub use error::InvalidToken;

/// Punctuation accepted in addition to ASCII letters and digits.
const ALLOWED_PUNCTUATION: &[u8] = b"+-|&.,~ /:?_#=();%[]";

/// Byte lookup table: `WHITELIST[b]` is true when `b` may appear in a value.
pub const WHITELIST: [bool; 256] = build_whitelist();

const fn build_whitelist() -> [bool; 256] {
    let mut table = [false; 256];
    let mut b = 0usize;
    while b < 256 {
        let c = b as u8;
        table[b] = c.is_ascii_alphanumeric();
        b += 1;
    }
    let mut i = 0;
    while i < ALLOWED_PUNCTUATION.len() {
        table[ALLOWED_PUNCTUATION[i] as usize] = true;
        i += 1;
    }
    table
}

#[inline]
pub fn is_allowed(byte: u8) -> bool {
    WHITELIST[byte as usize]
}

/// Checks `input` against the whitelist and returns it unchanged.
///
/// Fails on the first byte (scanning left to right) that is not allowed. The
/// offending input is logged at warn level.
pub fn validate_input_tokens(input: &str) -> Result<&str, InvalidToken> {
    match input.bytes().position(|b| !is_allowed(b)) {
        None => Ok(input),
        Some(position) => {
            let err = InvalidToken {
                byte: input.as_bytes()[position],
                position,
                input: input.to_string(),
            };
            tracing::warn!(
                byte = err.byte,
                character = %err.character().escape_default(),
                position,
                input,
                "rejected value with invalid token"
            );
            Err(err)
        }
    }
}

/// Like [`validate_input_tokens`], but an absent value passes through.
pub fn validate_optional(input: Option<&str>) -> Result<Option<&str>, InvalidToken> {
    input.map(validate_input_tokens).transpose()
}
