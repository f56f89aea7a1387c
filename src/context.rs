//! Authentication Context
//!
//! Explicit auth state provided via Leptos Context API. Views call
//! `login`/`logout` here instead of touching session storage directly.

use leptos::prelude::*;

use crate::auth::{AuthState, Session};
use crate::delay::TimerDelay;
use crate::routes::{guard, AppRoute};
use crate::storage::{BrowserStorage, StorageError};

#[derive(Clone, Copy)]
pub struct AuthContext {
    /// Current auth state - read
    pub state: ReadSignal<AuthState>,
    /// Current auth state - write
    set_state: WriteSignal<AuthState>,
    session: Session<BrowserStorage>,
}

impl AuthContext {
    /// Create the context from whatever flag session storage already holds
    pub fn new() -> Self {
        let session = Session::new(BrowserStorage::session());
        let (state, set_state) = signal(session.state());
        Self { state, set_state, session }
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.get().is_authenticated()
    }

    /// Guard check for a route.
    ///
    /// Tracks the signal so routes re-check after login/logout, but the
    /// persisted flag decides.
    pub fn allows(&self, route: AppRoute) -> bool {
        self.state.track();
        guard(route, self.session.state()).is_render()
    }

    pub async fn login(self) -> Result<AuthState, StorageError> {
        let state = self.session.login(&TimerDelay).await?;
        self.set_state.set(state);
        Ok(state)
    }

    pub async fn logout(self) -> Result<AuthState, StorageError> {
        let state = self.session.logout(&TimerDelay).await?;
        self.set_state.set(state);
        Ok(state)
    }
}

/// Get the auth context
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}
