//! Askama template definitions.

use askama::Template;

/// Login form page.
#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    /// Submit the form via fetch and render the JSON reply in place.
    pub scripted: bool,
}

/// Greeting for an authenticated user.
#[derive(Template)]
#[template(path = "greeting.html")]
pub struct GreetingTemplate<'a> {
    pub name: &'a str,
    pub balance: i64,
}
