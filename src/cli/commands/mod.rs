use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Arg, ColorChoice, Command,
};
use std::path::PathBuf;

pub mod logging;

pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let command = Command::new("passbook")
        .about("Signed-cookie session login service")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new("port")
                .short('p')
                .long("port")
                .help("Port to listen on")
                .default_value("8080")
                .env("PASSBOOK_PORT")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new("secret-key")
                .short('k')
                .long("secret-key")
                .help("Secret key used to sign session cookies")
                .env("PASSBOOK_SECRET_KEY")
                .required(true),
        )
        .arg(
            Arg::new("credential-policy")
                .long("credential-policy")
                .help("How submitted passwords are checked against the store")
                .env("PASSBOOK_CREDENTIAL_POLICY")
                .default_value("plain")
                .value_parser(["plain", "salted"]),
        )
        .arg(
            Arg::new("salt")
                .long("salt")
                .help("Salt appended to passwords before hashing (salted policy)")
                .env("PASSBOOK_SALT")
                .required_if_eq("credential-policy", "salted"),
        )
        .arg(
            Arg::new("response-format")
                .long("response-format")
                .help("Shape of login responses: rendered HTML or {success, message} JSON")
                .env("PASSBOOK_RESPONSE_FORMAT")
                .default_value("html")
                .value_parser(["html", "json"]),
        )
        .arg(
            Arg::new("users-file")
                .long("users-file")
                .help("JSON credential file; the built-in table is used when omitted")
                .env("PASSBOOK_USERS_FILE")
                .value_parser(clap::value_parser!(PathBuf)),
        );

    logging::with_args(command)
}
