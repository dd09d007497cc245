//! Credential verification policies.

use sha2::{Digest, Sha256};

use crate::passbook::store::{UserRecord, UserStore};

/// How a submitted password is checked against a stored credential.
///
/// Chosen once at startup; a deployment never mixes policies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialPolicy {
    /// Stored credential is the password itself.
    Plain,
    /// Stored credential is `sha256(password + salt)` in hex. The hex
    /// comparison ignores case on both sides.
    Salted { salt: String },
}

impl CredentialPolicy {
    /// Check `password` for `username`. Unknown usernames are false without
    /// any hashing work.
    #[must_use]
    pub fn verify(&self, store: &UserStore, username: &str, password: &str) -> bool {
        store
            .get(username)
            .is_some_and(|user| self.matches(user, password))
    }

    /// Check `password` against one account's stored credential.
    #[must_use]
    pub fn matches(&self, user: &UserRecord, password: &str) -> bool {
        match self {
            Self::Plain => user.credential == password,
            Self::Salted { salt } => {
                salted_digest(password, salt) == user.credential.to_lowercase()
            }
        }
    }
}

/// Lower-case hex SHA-256 of the password with the salt appended.
#[must_use]
pub fn salted_digest(password: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hasher.update(salt.as_bytes());
    hex::encode(hasher.finalize())
}
