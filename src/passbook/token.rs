//! Session token codec: `base64(username)` + `.` + hex HMAC signature.

use base64::{engine::general_purpose::STANDARD, Engine};
use thiserror::Error;

use crate::passbook::signer::Signer;

const SEPARATOR: char = '.';

/// Why a presented token is not a valid session.
///
/// Callers treat every variant the same way (back to the login form); the
/// distinction exists for logs and tests, never for the client.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token must contain exactly one separator")]
    Separator,
    #[error("token payload is not valid base64")]
    Payload,
    #[error("token payload is not valid UTF-8")]
    Encoding,
    #[error("token signature does not match")]
    Signature,
}

/// Mint the transportable token for `username`.
#[must_use]
pub fn encode(signer: &Signer, username: &str) -> String {
    let payload = STANDARD.encode(username.as_bytes());
    let signature = signer.sign(username);
    format!("{payload}{SEPARATOR}{signature}")
}

/// Recover the username a token asserts, or say why it cannot be trusted.
///
/// The username is returned only when the signature verifies against the
/// decoded payload; no check is made that the user still exists.
pub fn decode(signer: &Signer, token: &str) -> Result<String, TokenError> {
    if token.chars().filter(|&c| c == SEPARATOR).count() != 1 {
        return Err(TokenError::Separator);
    }

    let (payload, signature) = token.split_once(SEPARATOR).ok_or(TokenError::Separator)?;

    let bytes = STANDARD.decode(payload).map_err(|_| TokenError::Payload)?;
    let username = String::from_utf8(bytes).map_err(|_| TokenError::Encoding)?;

    if !signer.verify(&username, signature) {
        return Err(TokenError::Signature);
    }

    Ok(username)
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    fn signer() -> Signer {
        Signer::new(SecretString::from("test-secret".to_string()))
    }

    #[test]
    fn round_trips_valid_usernames() -> Result<(), TokenError> {
        let signer = signer();
        for username in ["balancy", "random_user", "päivi", "a"] {
            assert_eq!(decode(&signer, &encode(&signer, username))?, username);
        }
        Ok(())
    }

    #[test]
    fn token_has_payload_and_signature_halves() {
        let signer = signer();
        let token = encode(&signer, "balancy");

        let (payload, signature) = token.split_once('.').expect("separator");
        assert_eq!(STANDARD.decode(payload).expect("base64"), b"balancy");
        assert_eq!(signature, signer.sign("balancy"));
    }

    #[test]
    fn separator_count_must_be_exactly_one() {
        let signer = signer();

        assert_eq!(decode(&signer, "noseparator"), Err(TokenError::Separator));
        assert_eq!(decode(&signer, "a.b.c"), Err(TokenError::Separator));
        assert_eq!(decode(&signer, ""), Err(TokenError::Separator));
    }

    #[test]
    fn malformed_payload_is_rejected() {
        let signer = signer();

        // Not base64 at all.
        assert_eq!(decode(&signer, "$$$.ABCDEF"), Err(TokenError::Payload));

        // Valid base64, but the bytes are not UTF-8.
        let payload = STANDARD.encode([0xff, 0xfe]);
        assert_eq!(
            decode(&signer, &format!("{payload}.ABCDEF")),
            Err(TokenError::Encoding)
        );
    }

    #[test]
    fn flipping_any_signature_character_invalidates() {
        let signer = signer();
        let token = encode(&signer, "balancy");
        let (payload, signature) = token.split_once('.').expect("separator");

        for index in 0..signature.len() {
            let mut tampered: Vec<char> = signature.chars().collect();
            tampered[index] = if tampered[index] == '0' { '1' } else { '0' };
            let tampered: String = tampered.into_iter().collect();

            assert_eq!(
                decode(&signer, &format!("{payload}.{tampered}")),
                Err(TokenError::Signature),
                "tampered signature at index {index} must not verify"
            );
        }
    }

    #[test]
    fn tokens_from_another_key_are_rejected() {
        let ours = signer();
        let theirs = Signer::new(SecretString::from("other-secret".to_string()));

        assert_eq!(
            decode(&ours, &encode(&theirs, "balancy")),
            Err(TokenError::Signature)
        );
    }
}
