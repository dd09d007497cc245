//! Session cookie plumbing.

use axum::http::{
    header::{InvalidHeaderValue, COOKIE},
    HeaderMap, HeaderValue,
};

/// Cookie carrying the signed session token.
pub const SESSION_COOKIE_NAME: &str = "username";

/// Build the `Set-Cookie` value for a freshly minted session token.
///
/// No Max-Age: the cookie lives for the browser session only.
pub fn session_cookie(token: &str) -> Result<HeaderValue, InvalidHeaderValue> {
    HeaderValue::from_str(&format!("{SESSION_COOKIE_NAME}={token}; Path=/"))
}

/// Build the `Set-Cookie` value that deletes the session cookie.
#[must_use]
pub fn clear_session_cookie() -> HeaderValue {
    HeaderValue::from_static("username=; Path=/; Max-Age=0")
}

/// Pull the session token out of the `Cookie` header, if present.
pub fn extract_session_token(headers: &HeaderMap) -> Option<String> {
    let header = headers.get(COOKIE)?;
    let value = header.to_str().ok()?;
    for pair in value.split(';') {
        let trimmed = pair.trim();
        let mut parts = trimmed.splitn(2, '=');
        let key = parts.next()?.trim();
        let val = parts.next()?.trim();
        if key == SESSION_COOKIE_NAME {
            return Some(val.to_string());
        }
    }
    None
}
