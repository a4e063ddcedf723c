//! The client session state machine.
//!
//! `SessionManager` owns the single client-held token. State transitions:
//!
//! ```text
//! LoggedOut --login()--> LoggingIn --success--> LoggedIn
//!                                  --failure--> LoggedOut
//! LoggedIn  --logout() or 401/403 on a protected call--> LoggedOut
//! ```
//!
//! Any 401/403 observed on a protected request cascades into a full logout:
//! the stored token and the cached health payload are cleared before the
//! error is surfaced, so no stale protected data remains visible. The logout
//! path is idempotent; concurrent rejection signals collapse into a single
//! logout.

use crate::api::{ApiClient, HealthResponse};
use crate::error::SessionError;
use crate::store::TokenStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    LoggedOut,
    LoggingIn,
    LoggedIn,
}

pub struct SessionManager {
    api: ApiClient,
    store: TokenStore,
    state: SessionState,
    token: Option<String>,
    last_health: Option<HealthResponse>,
}

impl SessionManager {
    /// Restore the session from durable storage.
    ///
    /// A stored token means `LoggedIn`; whether it is still accepted is only
    /// discovered on the next protected request. An absent token means
    /// `LoggedOut`.
    pub async fn load(api: ApiClient, store: TokenStore) -> Result<Self, SessionError> {
        let token = store.load().await?;
        let state = if token.is_some() {
            SessionState::LoggedIn
        } else {
            SessionState::LoggedOut
        };

        Ok(Self {
            api,
            store,
            state,
            token,
            last_health: None,
        })
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_logged_in(&self) -> bool {
        self.state == SessionState::LoggedIn
    }

    /// The most recent health payload, if any. Cleared on logout.
    pub fn last_health(&self) -> Option<&HealthResponse> {
        self.last_health.as_ref()
    }

    /// Attempt to log in with the given credentials.
    ///
    /// Takes the password by value; it is dropped when the attempt completes
    /// and is never stored on the manager or on disk. Only one attempt may be
    /// active at a time. A failed attempt leaves the session state unchanged
    /// and surfaces a typed error.
    pub async fn login(&mut self, username: &str, password: String) -> Result<(), SessionError> {
        if self.state == SessionState::LoggingIn {
            return Err(SessionError::LoginInFlight);
        }

        let previous = self.state;
        self.state = SessionState::LoggingIn;

        // `password` drops at the end of this call, win or lose.
        match self.api.login(username, &password).await {
            Ok(success) => match self.store.save(&success.token).await {
                Ok(()) => {
                    self.token = Some(success.token);
                    self.state = SessionState::LoggedIn;
                    Ok(())
                }
                Err(e) => {
                    self.state = previous;
                    Err(SessionError::Store(e))
                }
            },
            Err(e) => {
                self.state = previous;
                Err(e)
            }
        }
    }

    /// Log out, clearing the stored token and any cached protected data.
    ///
    /// Idempotent: logging out while already logged out is harmless.
    pub async fn logout(&mut self) -> Result<(), SessionError> {
        self.store.clear().await?;
        self.token = None;
        self.last_health = None;
        self.state = SessionState::LoggedOut;
        Ok(())
    }

    /// Call the protected health endpoint with the session token attached.
    ///
    /// A 401/403 response invalidates the session: the token and cached
    /// health payload are cleared before [`SessionError::Unauthenticated`] is
    /// returned. A transport or server fault leaves the session untouched.
    pub async fn fetch_health(&mut self) -> Result<HealthResponse, SessionError> {
        let token = match &self.token {
            Some(token) => token.clone(),
            None => {
                self.logout().await?;
                return Err(SessionError::Unauthenticated);
            }
        };

        match self.api.health(&token).await {
            Ok(health) => {
                self.last_health = Some(health.clone());
                Ok(health)
            }
            Err(SessionError::Unauthenticated) => {
                tracing::warn!("Protected request rejected; clearing session");
                self.logout().await?;
                Err(SessionError::Unauthenticated)
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn temp_store() -> TokenStore {
        TokenStore::new(std::env::temp_dir().join(format!("pulsegate-test-{}", Uuid::new_v4())))
    }

    // The API client is never contacted in these tests; the endpoints are
    // exercised end-to-end in the workspace integration suite.
    fn offline_api() -> ApiClient {
        ApiClient::new("http://127.0.0.1:9")
    }

    #[tokio::test]
    async fn test_load_with_empty_store_is_logged_out() {
        let session = SessionManager::load(offline_api(), temp_store()).await.unwrap();
        assert_eq!(session.state(), SessionState::LoggedOut);
        assert!(!session.is_logged_in());
        assert!(session.last_health().is_none());
    }

    #[tokio::test]
    async fn test_load_with_stored_token_is_logged_in() {
        let store = temp_store();
        store.save("stored.bearer.token").await.unwrap();

        let session = SessionManager::load(offline_api(), store.clone()).await.unwrap();
        assert_eq!(session.state(), SessionState::LoggedIn);

        store.clear().await.unwrap();
    }

    #[tokio::test]
    async fn test_duplicate_login_refused_while_in_flight() {
        let mut session = SessionManager::load(offline_api(), temp_store()).await.unwrap();
        session.state = SessionState::LoggingIn;

        let result = session.login("admin", "password".to_string()).await;
        assert!(matches!(result, Err(SessionError::LoginInFlight)));
        assert_eq!(session.state(), SessionState::LoggingIn);
    }

    #[tokio::test]
    async fn test_logout_is_idempotent() {
        let store = temp_store();
        store.save("stored.bearer.token").await.unwrap();

        let mut session = SessionManager::load(offline_api(), store.clone()).await.unwrap();
        session.logout().await.unwrap();
        session.logout().await.unwrap();

        assert_eq!(session.state(), SessionState::LoggedOut);
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_fetch_health_without_token_forces_logout() {
        let mut session = SessionManager::load(offline_api(), temp_store()).await.unwrap();
        // Simulate a session that believes it is logged in but lost its token.
        session.state = SessionState::LoggedIn;

        let result = session.fetch_health().await;
        assert!(matches!(result, Err(SessionError::Unauthenticated)));
        assert_eq!(session.state(), SessionState::LoggedOut);
    }

    #[tokio::test]
    async fn test_failed_login_leaves_state_unchanged() {
        // Connection refused on port 9; the attempt fails at transport level.
        let mut session = SessionManager::load(offline_api(), temp_store()).await.unwrap();

        let result = session.login("admin", "password".to_string()).await;
        assert!(matches!(result, Err(SessionError::Transport(_))));
        assert_eq!(session.state(), SessionState::LoggedOut);
    }
}
