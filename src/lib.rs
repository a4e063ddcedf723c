//! # Pulsegate API
//!
//! A small REST API built with Rust and Axum that gates a health endpoint
//! behind single-admin, token-based authentication.
//!
//! ## Overview
//!
//! Pulsegate authenticates one administrative user against a configured
//! credential pair and issues short-lived signed bearer tokens. Protected
//! endpoints verify the token statelessly; there is no server-side session
//! store.
//!
//! - **Login**: `POST /api/login` checks the credential pair and returns a JWT
//! - **Guard**: the [`middleware::auth::AuthUser`] extractor admits or rejects
//!   protected requests based on signature and expiry alone
//! - **Protected resource**: `GET /api/health` reports API status
//! - **Client**: the `pulsegate-cli` binary owns the client-side session
//!   lifecycle (see the `pulsegate-client` crate)
//!
//! ## Architecture
//!
//! The codebase follows a modular structure:
//!
//! ```text
//! src/
//! ├── middleware/       # Token guard extractor
//! ├── modules/          # Feature modules
//! │   ├── auth/        # Login endpoint
//! │   └── health/      # Protected health endpoint
//! ├── docs.rs           # OpenAPI documentation setup
//! ├── logging.rs        # Request logging and tracing init
//! ├── router.rs         # Main application router
//! ├── state.rs          # Shared application state
//! └── validator.rs      # Request body validation extractor
//! ```
//!
//! Each feature module follows a consistent structure: `controller.rs` (HTTP
//! handlers), `service.rs` (business logic), `model.rs` (DTOs), `router.rs`
//! (Axum router configuration).
//!
//! ## Quick Start
//!
//! ### Environment Variables
//!
//! ```bash
//! JWT_SECRET=your-secure-secret-key
//! JWT_EXPIRES_IN=86400
//! AUTH_USERNAME=admin
//! AUTH_PASSWORD=password
//! ENVIRONMENT=development
//! PORT=3001
//! ```
//!
//! In `ENVIRONMENT=production` the server refuses to start with the default
//! secret or credentials.
//!
//! ### API Documentation
//!
//! When the server is running, API documentation is available at:
//!
//! - Swagger UI: `http://localhost:3001/swagger-ui`
//! - Scalar: `http://localhost:3001/scalar`

pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod validator;

// Re-export workspace crates for convenience
pub use pulsegate_auth;
pub use pulsegate_client;
pub use pulsegate_config;
pub use pulsegate_core;
