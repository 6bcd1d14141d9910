//! Cookie reads and writes on HTTP header maps.
//!
//! Reads scan the request's `Cookie` headers; writes append a `Set-Cookie`
//! header to the response, always scoped to `Path=/`.

use http::header::{COOKIE, SET_COOKIE};
use http::{HeaderMap, HeaderValue};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CookieError {
    #[error("invalid cookie name '{0}'")]
    InvalidName(String),
    #[error("invalid value for cookie '{0}'")]
    InvalidValue(String),
}

/// Returns the value of the first cookie named `name` (exact match).
pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|h| h.to_str().ok())
        .find_map(|h| cookie_from_header(h, name))
}

/// Looks up `name` in a single raw `Cookie` header value (`a=1; b=2`).
pub fn cookie_from_header(header: &str, name: &str) -> Option<String> {
    header.split(';').find_map(|pair| {
        let (k, v) = pair.trim().split_once('=')?;
        (k.trim() == name).then(|| v.trim().to_string())
    })
}

/// Appends `Set-Cookie: name=value; Path=/` (plus `Max-Age` when given).
pub fn set_cookie(
    headers: &mut HeaderMap,
    name: &str,
    value: &str,
    max_age: Option<u64>,
) -> Result<(), CookieError> {
    let header = set_cookie_header(name, value, max_age)?;
    headers.append(SET_COOKIE, header);
    Ok(())
}

/// Expires `name` on the client: empty value, `Max-Age=0`.
pub fn remove_cookie(headers: &mut HeaderMap, name: &str) -> Result<(), CookieError> {
    set_cookie(headers, name, "", Some(0))
}

/// Builds the `Set-Cookie` header value without touching a header map.
pub fn set_cookie_header(
    name: &str,
    value: &str,
    max_age: Option<u64>,
) -> Result<HeaderValue, CookieError> {
    if name.is_empty() || !name.bytes().all(is_tchar) {
        return Err(CookieError::InvalidName(name.to_string()));
    }
    if !value.bytes().all(is_cookie_octet) {
        return Err(CookieError::InvalidValue(name.to_string()));
    }

    let mut cookie = format!("{name}={value}; Path=/");
    if let Some(age) = max_age {
        cookie.push_str(&format!("; Max-Age={age}"));
    }
    HeaderValue::from_str(&cookie).map_err(|_| CookieError::InvalidValue(name.to_string()))
}

// RFC 7230 token characters.
fn is_tchar(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b)
}

// RFC 6265 cookie-octet: visible ASCII minus DQUOTE, comma, semicolon, backslash.
fn is_cookie_octet(b: u8) -> bool {
    matches!(b, 0x21 | 0x23..=0x2B | 0x2D..=0x3A | 0x3C..=0x5B | 0x5D..=0x7E)
}
