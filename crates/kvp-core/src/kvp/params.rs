//! Required-parameter lookup over an already-parsed name→values mapping.

use std::collections::BTreeMap;

use super::decode::decode_component;
use super::error::ParamError;
use crate::token::validate_input_tokens;

/// Parameter names mapped to their values in request order.
///
/// Mirrors what a host request framework hands over: a name may carry several
/// values, and an individual value may be absent (`name` without `=`).
pub type ParamMap = BTreeMap<String, Vec<Option<String>>>;

/// Returns the decoded, validated first value of `name`.
///
/// The name is matched with ASCII case folding only: `Ä` and `ä` are
/// different names. The value is decoded with [`decode_component`]; malformed
/// percent triplets (`100%`, `%zz`) are passed through literally rather than
/// rejected, and the whitelist check still applies to the result. Fails with
/// [`ParamError::NotFound`] when no key matches or the matched entry has no
/// first value, and with [`ParamError::InvalidToken`] when the decoded value
/// contains bytes outside the whitelist.
pub fn required_param(params: &ParamMap, name: &str) -> Result<String, ParamError> {
    let first = params
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .and_then(|(_, values)| values.first())
        .and_then(|v| v.as_deref())
        .ok_or_else(|| ParamError::NotFound {
            name: name.to_string(),
        })?;

    let decoded = decode_component(first);
    validate_input_tokens(&decoded)?;
    Ok(decoded)
}

/// Builds a [`ParamMap`] from a raw query string (or a URL carrying one).
///
/// Keys and values are kept raw; decoding happens in [`required_param`].
/// Repeated keys append in order. A fragment without `=` records an absent
/// value. Empty fragments are skipped.
pub fn param_map_from_query(source: &str) -> ParamMap {
    let query = super::query_part(source);
    let mut params = ParamMap::new();
    for fragment in query.split('&').filter(|f| !f.is_empty()) {
        let (key, value) = match fragment.split_once('=') {
            Some((k, v)) => (k, Some(v.to_string())),
            None => (fragment, None),
        };
        params.entry(key.to_string()).or_default().push(value);
    }
    params
}
