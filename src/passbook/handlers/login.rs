use askama::Template;
use axum::{
    extract::{Extension, Form},
    http::header::SET_COOKIE,
    response::{Html, IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error};

use crate::passbook::{
    error::PageError,
    session::session_cookie,
    state::{AppState, ResponseFormat},
    templates::GreetingTemplate,
    token,
};

/// One message for unknown users and wrong passwords alike.
const FAILURE_MESSAGE: &str = "I don't know you";

#[derive(Deserialize)]
pub struct LoginForm {
    username: String,
    password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct LoginReply {
    pub success: bool,
    pub message: String,
}

/// Process a login attempt; mint the session cookie on success.
pub async fn login(
    state: Extension<Arc<AppState>>,
    Form(form): Form<LoginForm>,
) -> Result<Response, PageError> {
    let Some(user) = state.store().get(&form.username) else {
        debug!("Login attempt for unknown user");
        return Ok(failure(state.format()));
    };

    if !state.policy().matches(user, &form.password) {
        debug!("Failed login for {:?}", form.username);
        return Ok(failure(state.format()));
    }

    let greeting = GreetingTemplate {
        name: &user.name,
        balance: user.balance,
    }
    .render()?;

    let body = match state.format() {
        ResponseFormat::Html => Html(greeting).into_response(),
        ResponseFormat::Json => Json(LoginReply {
            success: true,
            message: greeting,
        })
        .into_response(),
    };

    match session_cookie(&token::encode(state.signer(), &form.username)) {
        Ok(cookie) => Ok(([(SET_COOKIE, cookie)], body).into_response()),
        Err(err) => {
            error!("Failed to build session cookie: {err}");
            Ok(body)
        }
    }
}

fn failure(format: ResponseFormat) -> Response {
    match format {
        ResponseFormat::Html => Html(FAILURE_MESSAGE.to_string()).into_response(),
        ResponseFormat::Json => Json(LoginReply {
            success: false,
            message: FAILURE_MESSAGE.to_string(),
        })
        .into_response(),
    }
}
