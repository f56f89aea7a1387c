//! Simulated Authentication
//!
//! The session is a single flag in session storage. Its presence means
//! "authenticated"; there is no expiry and no server round-trip.

use crate::config::{AUTH_TOKEN_KEY, AUTH_TOKEN_VALUE, LOGIN_DELAY, LOGOUT_DELAY};
use crate::delay::Delay;
use crate::storage::{KeyValueStore, StorageError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthState {
    #[default]
    Unauthenticated,
    Authenticated,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated)
    }
}

/// Auth flag backed by a key-value store
#[derive(Debug, Clone, Copy)]
pub struct Session<S> {
    store: S,
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read the flag. An unreadable store counts as logged out.
    pub fn state(&self) -> AuthState {
        match self.store.get(AUTH_TOKEN_KEY) {
            Ok(Some(_)) => AuthState::Authenticated,
            Ok(None) => AuthState::Unauthenticated,
            Err(e) => {
                log::debug!("[AUTH] Flag unreadable, treating as logged out: {}", e);
                AuthState::Unauthenticated
            }
        }
    }

    /// Simulated login: wait, then write the flag
    pub async fn login(&self, delay: &impl Delay) -> Result<AuthState, StorageError> {
        delay.wait(LOGIN_DELAY).await;
        self.store.set(AUTH_TOKEN_KEY, AUTH_TOKEN_VALUE)?;
        log::info!("[AUTH] Logged in");
        Ok(AuthState::Authenticated)
    }

    /// Simulated logout: wait, then clear the flag
    pub async fn logout(&self, delay: &impl Delay) -> Result<AuthState, StorageError> {
        delay.wait(LOGOUT_DELAY).await;
        self.store.remove(AUTH_TOKEN_KEY)?;
        log::info!("[AUTH] Logged out");
        Ok(AuthState::Unauthenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delay::Immediate;
    use crate::storage::MemoryStorage;
    use futures::executor::block_on;

    #[test]
    fn test_fresh_session_is_logged_out() {
        let store = MemoryStorage::new();
        let session = Session::new(&store);
        assert_eq!(session.state(), AuthState::Unauthenticated);
    }

    #[test]
    fn test_login_writes_flag() {
        let store = MemoryStorage::new();
        let session = Session::new(&store);

        let state = block_on(session.login(&Immediate)).unwrap();
        assert_eq!(state, AuthState::Authenticated);
        assert_eq!(session.state(), AuthState::Authenticated);
        assert_eq!(store.get(AUTH_TOKEN_KEY).unwrap().as_deref(), Some(AUTH_TOKEN_VALUE));
    }

    #[test]
    fn test_logout_clears_flag() {
        let store = MemoryStorage::new();
        let session = Session::new(&store);
        block_on(session.login(&Immediate)).unwrap();

        let state = block_on(session.logout(&Immediate)).unwrap();
        assert_eq!(state, AuthState::Unauthenticated);
        assert_eq!(store.get(AUTH_TOKEN_KEY).unwrap(), None);
        assert!(!session.state().is_authenticated());
    }

    #[test]
    fn test_any_flag_value_counts() {
        // Presence is all that is checked
        let store = MemoryStorage::new();
        store.set(AUTH_TOKEN_KEY, "something-else").unwrap();
        assert!(Session::new(&store).state().is_authenticated());
    }
}
