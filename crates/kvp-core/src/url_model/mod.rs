//! URL normalization for logging and cache keys.
//!
//! Rewrites a URL into a canonical form: repeated or empty `&` separators are
//! collapsed, malformed query fragments are dropped, and doubled `/` in the
//! path become one. This is a cleanup pass, not a security boundary; the token
//! whitelist is.

mod path;
mod query;

/// Normalizes `url`. Never fails.
///
/// The rebuilt URL is parsed with the `url` crate to locate its path, and the
/// parsed serialization is returned (scheme and host lowercased, `\` read as
/// `/` for special schemes). When it cannot be parsed (e.g. a relative
/// reference), the query cleanup is still applied but the path is left as-is.
///
/// # Examples
///
/// - `normalize_url("http://h/a//b?x=1&&y=2")` → `"http://h/a/b?x=1&y=2"`
/// - `normalize_url("")` → `""`
pub fn normalize_url(url: &str) -> String {
    if url.is_empty() {
        return String::new();
    }
    let rebuilt = query::rebuild(url);
    path::collapse_path_separators(&rebuilt)
}
