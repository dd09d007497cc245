use axum::{http::header::SET_COOKIE, response::IntoResponse};

use crate::passbook::session::clear_session_cookie;

/// Clear the session cookie unconditionally.
///
/// No authentication check: clearing an absent session is still a success,
/// so repeated logouts answer identically.
pub async fn logout() -> impl IntoResponse {
    ([(SET_COOKIE, clear_session_cookie())], "You are logged out")
}
