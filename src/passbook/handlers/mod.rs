pub mod health;
pub use self::health::health;

pub mod index;
pub use self::index::index;

pub mod login;
pub use self::login::login;

pub mod logout;
pub use self::logout::logout;


// common functions for the handlers
use askama::Template;
use axum::response::Html;

use crate::passbook::{
    error::PageError,
    state::{AppState, ResponseFormat},
    templates::LoginTemplate,
};

/// Render the login page; scripted when the service replies with JSON.
pub(crate) fn login_page(state: &AppState) -> Result<Html<String>, PageError> {
    let template = LoginTemplate {
        scripted: state.format() == ResponseFormat::Json,
    };
    Ok(Html(template.render()?))
}
