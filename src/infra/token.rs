//! File-backed persistence for the session token.
//!
//! The token is the only client-side state that survives between
//! invocations. It is written on login, removed on logout, and read once
//! at session init; nothing mutates it in the background.

use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenStoreError {
    #[error("failed to read token file {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("failed to write token file {path}: {source}")]
    Write { path: String, source: io::Error },
    #[error("failed to remove token file {path}: {source}")]
    Remove { path: String, source: io::Error },
}

#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read the persisted token, if any.
    pub fn load(&self) -> Result<Option<String>, TokenStoreError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => {
                let token = raw.trim().to_string();
                Ok((!token.is_empty()).then_some(token))
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(TokenStoreError::Read {
                path: self.path.display().to_string(),
                source,
            }),
        }
    }

    pub fn save(&self, token: &str) -> Result<(), TokenStoreError> {
        fs::write(&self.path, token).map_err(|source| TokenStoreError::Write {
            path: self.path.display().to_string(),
            source,
        })
    }

    /// Remove the persisted token. Missing files are not an error; logout
    /// must be idempotent.
    pub fn clear(&self) -> Result<(), TokenStoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(TokenStoreError::Remove {
                path: self.path.display().to_string(),
                source,
            }),
        }
    }
}
