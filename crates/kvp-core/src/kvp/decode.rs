//! Form-style decoding of a single query component.

use percent_encoding::percent_decode_str;
use std::borrow::Cow;

/// Decodes a raw query component the way form parameters are decoded:
/// `+` becomes a space and `%XX` triplets become bytes, read as UTF-8.
///
/// Malformed triplets (`%`, `%4`, `%zz`) are kept literally. Invalid UTF-8 is
/// replaced with U+FFFD, which the token whitelist rejects later.
pub fn decode_component(raw: &str) -> String {
    let plus_decoded: Cow<'_, str> = if raw.contains('+') {
        Cow::Owned(raw.replace('+', " "))
    } else {
        Cow::Borrowed(raw)
    };
    percent_decode_str(&plus_decoded)
        .decode_utf8_lossy()
        .into_owned()
}
