//! Cookie Parsing
//!
//! Reads a single value out of a `document.cookie` string.

use percent_encoding::percent_decode_str;

/// Find `name` in a `k1=v1; k2=v2` cookie string and percent-decode its value
pub fn find_cookie(cookies: &str, name: &str) -> Option<String> {
    if cookies.is_empty() || name.is_empty() {
        return None;
    }
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix(name)?.strip_prefix('='))
        .map(|raw| percent_decode_str(raw).decode_utf8_lossy().into_owned())
}
