//! In-memory credential store, fixed at startup.

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::warn;

/// One account: display name, credential, balance.
///
/// The credential is either the plaintext password or a salted SHA-256 hex
/// digest, depending on the configured credential policy.
#[derive(Debug, Clone, Deserialize)]
pub struct UserRecord {
    pub username: String,
    pub name: String,
    pub credential: String,
    pub balance: i64,
}

/// Read-only map from username to account, shared across requests.
#[derive(Debug, Default)]
pub struct UserStore {
    users: HashMap<String, UserRecord>,
}

impl UserStore {
    /// The demo account table.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_records(vec![
            UserRecord {
                username: "balancy".to_string(),
                name: "Pavel".to_string(),
                credential: "balancy".to_string(),
                balance: 100_000,
            },
            UserRecord {
                username: "random_user".to_string(),
                name: "Vasily".to_string(),
                credential: "random_user".to_string(),
                balance: 200_000,
            },
        ])
    }

    #[must_use]
    pub fn from_records(records: Vec<UserRecord>) -> Self {
        let users = records
            .into_iter()
            .map(|record| (record.username.clone(), record))
            .collect();
        Self { users }
    }

    /// Parse a store from its JSON form, a list of records.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let records: Vec<UserRecord> = serde_json::from_str(raw)?;
        Ok(Self::from_records(records))
    }

    /// Load the store from a credential file.
    ///
    /// An unreadable or unparsable file yields an empty store instead of
    /// aborting startup; nobody can log in, but the service serves.
    #[must_use]
    pub fn load(path: &Path) -> Self {
        let parsed = fs::read_to_string(path)
            .map_err(|err| err.to_string())
            .and_then(|raw| Self::from_json(&raw).map_err(|err| err.to_string()));

        match parsed {
            Ok(store) => store,
            Err(err) => {
                warn!(
                    "Unusable credential file {}: {err}; starting with an empty store",
                    path.display()
                );
                Self::default()
            }
        }
    }

    #[must_use]
    pub fn get(&self, username: &str) -> Option<&UserRecord> {
        self.users.get(username)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_has_demo_accounts() {
        let store = UserStore::builtin();

        let balancy = store.get("balancy").expect("balancy exists");
        assert_eq!(balancy.name, "Pavel");
        assert_eq!(balancy.balance, 100_000);

        let random_user = store.get("random_user").expect("random_user exists");
        assert_eq!(random_user.balance, 200_000);

        assert!(store.get("nobody").is_none());
    }

    #[test]
    fn parses_records_from_json() -> Result<(), serde_json::Error> {
        let store = UserStore::from_json(
            r#"[
                {"username": "alice", "name": "Alice", "credential": "wonder", "balance": 42}
            ]"#,
        )?;

        assert_eq!(store.len(), 1);
        let alice = store.get("alice").expect("alice exists");
        assert_eq!(alice.credential, "wonder");
        Ok(())
    }

    #[test]
    fn unreadable_file_falls_back_to_empty_store() {
        let store = UserStore::load(Path::new("/nonexistent/passbook-users.json"));
        assert!(store.is_empty());
    }
}
