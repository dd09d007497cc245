use crate::cli::{actions::Action, globals::GlobalArgs};
use crate::passbook::{self, signer::Signer, state::AppState, store::UserStore};
use anyhow::Result;
use std::sync::Arc;

/// Handle the server action
pub async fn handle(action: Action, globals: GlobalArgs) -> Result<()> {
    match action {
        Action::Server { port, users_file } => {
            let store = match users_file {
                Some(path) => UserStore::load(&path),
                None => UserStore::builtin(),
            };

            let state = AppState::new(
                store,
                Signer::new(globals.secret_key),
                globals.credential_policy,
                globals.response_format,
            );

            passbook::new(port, Arc::new(state)).await?;
        }
    }

    Ok(())
}
