//! Collapsing of doubled separators in the path component.

use url::{Position, Url};

/// Collapses runs of `/` in the path of `rebuilt` to a single `/`.
///
/// The path is located by [`Url::parse`]; the result is the parsed URL's
/// serialization with only the path rewritten. When the string does not
/// parse (relative reference, bad host) or has no hierarchical path, it is
/// returned unchanged.
pub(super) fn collapse_path_separators(rebuilt: &str) -> String {
    let parsed = match Url::parse(rebuilt) {
        Ok(parsed) if !parsed.cannot_be_a_base() => parsed,
        Ok(_) => return rebuilt.to_string(),
        Err(e) => {
            tracing::debug!(url = rebuilt, error = %e, "url not parseable, path left as-is");
            return rebuilt.to_string();
        }
    };

    let mut out = String::with_capacity(rebuilt.len());
    out.push_str(&parsed[..Position::BeforePath]);
    out.push_str(&collapse_slashes(&parsed[Position::BeforePath..Position::AfterPath]));
    out.push_str(&parsed[Position::AfterPath..]);
    out
}

fn collapse_slashes(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut prev_slash = false;
    for c in path.chars() {
        if c == '/' {
            if prev_slash {
                continue;
            }
            prev_slash = true;
        } else {
            prev_slash = false;
        }
        out.push(c);
    }
    out
}
