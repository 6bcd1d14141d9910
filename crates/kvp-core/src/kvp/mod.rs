//! Query-string (KVP) extraction.
//!
//! Splits a URL or bare query string into `key=value` fragments, matches keys
//! case-insensitively, and runs every returned value through the token
//! whitelist. Repeated keys (`?variable=psl&variable=tas`) are collected in
//! encounter order.

mod decode;
mod error;
mod params;

pub use decode::decode_component;
pub use error::ParamError;
pub use params::{param_map_from_query, required_param, ParamMap};

use crate::token::{validate_input_tokens, InvalidToken};

/// The query portion of `source`: everything after the first `?`, or the
/// whole input when there is none.
pub(crate) fn query_part(source: &str) -> &str {
    source.split_once('?').map_or(source, |(_, query)| query)
}

/// Returns every value of `key` in `source`, in order.
///
/// `source` may be a full URL or a bare query string. Only the first `=` of a
/// fragment separates key from value. Fragments without `=` are skipped.
/// Keys match with ASCII case folding only; non-ASCII letters must match
/// exactly.
/// Values are returned raw (not percent-decoded).
///
/// Aborts on the first matching value that fails validation.
pub fn list_values(source: &str, key: &str) -> Result<Vec<String>, InvalidToken> {
    let mut values = Vec::new();
    for fragment in query_part(source).split('&') {
        let Some((found_key, found_value)) = fragment.split_once('=') else {
            continue;
        };
        if found_key.eq_ignore_ascii_case(key) {
            values.push(validate_input_tokens(found_value)?.to_string());
        }
    }
    Ok(values)
}

/// First value of `key` in `source`, or `None` when the key does not occur.
pub fn single_value(source: &str, key: &str) -> Result<Option<String>, InvalidToken> {
    Ok(list_values(source, key)?.into_iter().next())
}

#[cfg(test)]
mod tests;
