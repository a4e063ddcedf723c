//! # Pulsegate Client
//!
//! Client-side session management for the Pulsegate API.
//!
//! This crate owns the single client-held bearer token across the
//! application's lifetime:
//!
//! - [`store`]: durable token storage (one key, one file)
//! - [`api`]: HTTP transport for the login and health endpoints
//! - [`session`]: the session state machine tying the two together
//!
//! The session manager persists the token on successful login, attaches it
//! to every protected request, and clears it (together with any cached
//! protected data) the moment the server signals an authentication failure.
//!
//! # Example
//!
//! ```ignore
//! use pulsegate_client::{ApiClient, SessionManager, TokenStore};
//!
//! let api = ApiClient::new("http://localhost:3001");
//! let store = TokenStore::from_env();
//! let mut session = SessionManager::load(api, store).await?;
//!
//! session.login("admin", password).await?;
//! let health = session.fetch_health().await?;
//! println!("API status: {}", health.status);
//! ```

pub mod api;
pub mod error;
pub mod session;
pub mod store;

// Re-export commonly used types at crate root
pub use api::{ApiClient, HealthResponse, LoginSuccess};
pub use error::SessionError;
pub use session::{SessionManager, SessionState};
pub use store::TokenStore;
