use secrecy::SecretString;

use crate::passbook::{state::ResponseFormat, verifier::CredentialPolicy};

/// Process-wide read-only configuration, fixed before the listener starts.
#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub secret_key: SecretString,
    pub credential_policy: CredentialPolicy,
    pub response_format: ResponseFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_key_is_redacted_in_debug() {
        let globals = GlobalArgs {
            secret_key: SecretString::from("sekret".to_string()),
            credential_policy: CredentialPolicy::Plain,
            response_format: ResponseFormat::Html,
        };

        let printed = format!("{globals:?}");
        assert!(!printed.contains("sekret"));
    }
}
