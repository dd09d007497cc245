use askama::Template;
use axum::{
    extract::Extension,
    http::{header::SET_COOKIE, HeaderMap},
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;
use tracing::debug;

use crate::passbook::{
    error::PageError,
    handlers::login_page,
    session::{clear_session_cookie, extract_session_token},
    state::AppState,
    templates::GreetingTemplate,
    token,
};

/// Home page: greet a valid session, otherwise prompt for login.
pub async fn index(
    headers: HeaderMap,
    state: Extension<Arc<AppState>>,
) -> Result<Response, PageError> {
    let Some(cookie) = extract_session_token(&headers) else {
        return Ok(login_page(&state)?.into_response());
    };

    let username = match token::decode(state.signer(), &cookie) {
        Ok(username) => username,
        Err(err) => {
            debug!("Rejecting session cookie: {err}");
            return invalid_session(&state);
        }
    };

    // A correctly signed token for a user the store no longer knows is an
    // invalid session, not a fault: back to the login form, cookie cleared.
    let Some(user) = state.store().get(&username) else {
        debug!("Valid signature for unknown user {username:?}");
        return invalid_session(&state);
    };

    let greeting = GreetingTemplate {
        name: &user.name,
        balance: user.balance,
    }
    .render()?;

    Ok(Html(greeting).into_response())
}

fn invalid_session(state: &AppState) -> Result<Response, PageError> {
    Ok(([(SET_COOKIE, clear_session_cookie())], login_page(state)?).into_response())
}
