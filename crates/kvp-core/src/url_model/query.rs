//! Rebuilds the query portion of a URL, dropping malformed fragments.

/// How a single `&`-separated fragment is re-emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Fragment<'a> {
    /// `key=value` with both sides non-empty.
    Pair(&'a str, &'a str),
    /// A fragment without a value (`flag`, or `flag=` with nothing after it).
    Bare(&'a str),
    /// Empty, or more than one `=`, or no key.
    Dropped,
}

pub(super) fn classify(fragment: &str) -> Fragment<'_> {
    match fragment.split_once('=') {
        None if fragment.is_empty() => Fragment::Dropped,
        None => Fragment::Bare(fragment),
        Some((key, _)) if key.is_empty() => Fragment::Dropped,
        Some((_, value)) if value.contains('=') => Fragment::Dropped,
        Some((key, "")) => Fragment::Bare(key),
        Some((key, value)) => Fragment::Pair(key, value),
    }
}

/// Splits `url` on its first `?` and re-emits the query fragments joined by a
/// single `&`.
///
/// When `url` has no `?` at all, the whole input is treated as query text and
/// a leading bare fragment (normally the path) gets a `?` appended.
pub(super) fn rebuild(url: &str) -> String {
    let (base, query) = match url.split_once('?') {
        Some((base, query)) => (Some(base), query),
        None => (None, url),
    };

    let mut out = String::with_capacity(url.len() + 1);
    if let Some(base) = base {
        out.push_str(base);
        out.push('?');
    }

    let mut need_amp = false;
    for (index, fragment) in query.split('&').enumerate() {
        match classify(fragment) {
            Fragment::Bare(path) if base.is_none() && index == 0 => {
                out.push_str(path);
                out.push('?');
            }
            Fragment::Bare(flag) => {
                if need_amp {
                    out.push('&');
                }
                out.push_str(flag);
                need_amp = true;
            }
            Fragment::Pair(key, value) => {
                if need_amp {
                    out.push('&');
                }
                out.push_str(key);
                out.push('=');
                out.push_str(value);
                need_amp = true;
            }
            Fragment::Dropped => {}
        }
    }
    out
}
