//! Parse `Name: value` header lines supplied by callers.

/// Splits a `Name: value` line into a trimmed `(name, value)` pair.
///
/// Returns `None` when there is no `:` or the name is empty. The value may be
/// empty.
pub fn parse_header_line(line: &str) -> Option<(String, String)> {
    let (name, value) = line.split_once(':')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some((name.to_string(), value.trim().to_string()))
}
