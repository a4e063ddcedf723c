//! # Pulsegate Auth
//!
//! Credential verification and JWT utilities for the Pulsegate API.
//!
//! This crate provides:
//!
//! - [`claims`]: the claim structure embedded in bearer tokens
//! - [`credentials`]: exact-match verification against the configured admin pair
//! - [`jwt`]: token creation and verification
//!
//! Token verification is a pure, synchronous computation: a signature check
//! plus an expiry check, no I/O and no revocation lookup. The signing secret
//! is shared by issuer and verifier through [`pulsegate_config::JwtConfig`]
//! and is read-only after startup.
//!
//! # Example
//!
//! ```ignore
//! use pulsegate_auth::{create_token, verify_credentials, verify_token};
//! use pulsegate_config::{AuthConfig, JwtConfig};
//!
//! let auth_config = AuthConfig::from_env();
//! let jwt_config = JwtConfig::from_env();
//!
//! if verify_credentials(&auth_config, "admin", "password") {
//!     let token = create_token("admin", &jwt_config)?;
//!     let claims = verify_token(&token, &jwt_config)?;
//!     println!("Logged in as {}", claims.sub);
//! }
//! ```

pub mod claims;
pub mod credentials;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use credentials::verify_credentials;
pub use jwt::{create_token, verify_token};
