//! Shared request-handling state and response policy.

use crate::passbook::{signer::Signer, store::UserStore, verifier::CredentialPolicy};

/// Shape of login responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    /// Rendered pages and plain messages.
    Html,
    /// `{success, message}` bodies consumed by the scripted login form.
    Json,
}

/// Everything a handler needs, read-only after startup.
pub struct AppState {
    store: UserStore,
    signer: Signer,
    policy: CredentialPolicy,
    format: ResponseFormat,
}

impl AppState {
    #[must_use]
    pub fn new(
        store: UserStore,
        signer: Signer,
        policy: CredentialPolicy,
        format: ResponseFormat,
    ) -> Self {
        Self {
            store,
            signer,
            policy,
            format,
        }
    }

    #[must_use]
    pub fn store(&self) -> &UserStore {
        &self.store
    }

    #[must_use]
    pub fn signer(&self) -> &Signer {
        &self.signer
    }

    #[must_use]
    pub fn policy(&self) -> &CredentialPolicy {
        &self.policy
    }

    #[must_use]
    pub fn format(&self) -> ResponseFormat {
        self.format
    }
}
