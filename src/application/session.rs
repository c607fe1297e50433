//! Process-wide operator session with an explicit lifecycle: `init` reads
//! the persisted token and resolves the signed-in user, `login` fabricates
//! and persists a new session, `logout` discards it.
//!
//! The token is mutated only by these explicit transitions — there is no
//! background refresh and therefore no concurrent-writer case. Credentials
//! are not verified anywhere (see `infra::api::auth`).

use thiserror::Error;

use crate::infra::api::auth::{self, User};
use crate::infra::token::{TokenStore, TokenStoreError};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Token(#[from] TokenStoreError),
}

#[derive(Debug)]
pub struct Session {
    store: TokenStore,
    user: Option<User>,
}

impl Session {
    pub fn new(store: TokenStore) -> Self {
        Self { store, user: None }
    }

    /// Restore the session persisted by a previous invocation, if any.
    pub fn init(&mut self) -> Result<(), SessionError> {
        let token = self.store.load()?;
        self.user = auth::current_user(token.as_deref());
        Ok(())
    }

    /// Sign in. Any credentials are accepted; the fabricated token is
    /// persisted so later invocations stay signed in.
    pub fn login(&mut self, email: &str, password: &str) -> Result<User, SessionError> {
        let (user, token) = auth::login(email, password);
        self.store.save(&token)?;
        self.user = Some(user.clone());
        Ok(user)
    }

    /// Sign out and discard the persisted token. Idempotent.
    pub fn logout(&mut self) -> Result<(), SessionError> {
        self.store.clear()?;
        self.user = None;
        Ok(())
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }
}
