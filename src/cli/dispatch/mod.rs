use crate::cli::{actions::Action, globals::GlobalArgs};
use crate::passbook::{state::ResponseFormat, verifier::CredentialPolicy};
use anyhow::Result;
use secrecy::SecretString;
use std::path::PathBuf;

pub fn handler(matches: &clap::ArgMatches) -> Result<(Action, GlobalArgs)> {
    // An empty key would sign every token with a worthless secret; refuse to
    // start rather than serve forgeable cookies.
    let secret_key = matches
        .get_one::<String>("secret-key")
        .filter(|key| !key.is_empty())
        .ok_or_else(|| anyhow::anyhow!("signing secret must not be empty"))?;

    let credential_policy = match matches
        .get_one::<String>("credential-policy")
        .map(String::as_str)
    {
        Some("salted") => {
            let salt = matches
                .get_one::<String>("salt")
                .filter(|salt| !salt.is_empty())
                .ok_or_else(|| {
                    anyhow::anyhow!("salted credential policy requires a non-empty salt")
                })?;
            CredentialPolicy::Salted { salt: salt.clone() }
        }
        _ => CredentialPolicy::Plain,
    };

    let response_format = match matches
        .get_one::<String>("response-format")
        .map(String::as_str)
    {
        Some("json") => ResponseFormat::Json,
        _ => ResponseFormat::Html,
    };

    let globals = GlobalArgs {
        secret_key: SecretString::from(secret_key.clone()),
        credential_policy,
        response_format,
    };

    let action = Action::Server {
        port: matches.get_one::<u16>("port").copied().unwrap_or(8080),
        users_file: matches.get_one::<PathBuf>("users-file").cloned(),
    };

    Ok((action, globals))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands;
    use anyhow::Result;

    fn matches_from(args: &[&str]) -> clap::ArgMatches {
        commands::new().get_matches_from(args)
    }

    #[test]
    fn server_action_defaults() -> Result<()> {
        let (action, globals) = handler(&matches_from(&["passbook", "--secret-key", "sekret"]))?;

        let Action::Server { port, users_file } = action;
        assert_eq!(port, 8080);
        assert!(users_file.is_none());
        assert_eq!(globals.credential_policy, CredentialPolicy::Plain);
        assert_eq!(globals.response_format, ResponseFormat::Html);
        Ok(())
    }

    #[test]
    fn empty_secret_is_rejected() {
        let result = handler(&matches_from(&["passbook", "--secret-key", ""]));
        assert!(result.is_err());
    }

    #[test]
    fn empty_salt_is_rejected() {
        let result = handler(&matches_from(&[
            "passbook",
            "--secret-key",
            "sekret",
            "--credential-policy",
            "salted",
            "--salt",
            "",
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn salted_policy_carries_salt() -> Result<()> {
        let (_, globals) = handler(&matches_from(&[
            "passbook",
            "--secret-key",
            "sekret",
            "--credential-policy",
            "salted",
            "--salt",
            "pepper",
        ]))?;

        assert_eq!(
            globals.credential_policy,
            CredentialPolicy::Salted {
                salt: "pepper".to_string()
            }
        );
        Ok(())
    }

    #[test]
    fn users_file_is_forwarded() -> Result<()> {
        let (action, _) = handler(&matches_from(&[
            "passbook",
            "--secret-key",
            "sekret",
            "--users-file",
            "/etc/passbook/users.json",
        ]))?;

        let Action::Server { users_file, .. } = action;
        assert_eq!(
            users_file,
            Some(PathBuf::from("/etc/passbook/users.json"))
        );
        Ok(())
    }
}
