pub mod server;

use std::path::PathBuf;

/// Actions
#[derive(Debug)]
pub enum Action {
    Server {
        port: u16,
        users_file: Option<PathBuf>,
    },
}
