//! # Pulsegate Config
//!
//! Configuration types for the Pulsegate API.
//!
//! This crate provides configuration structures loaded from environment
//! variables:
//!
//! - [`auth`]: the admin credential pair
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`environment`]: development/production mode flag
//! - [`jwt`]: JWT signing secret and token lifetime
//! - [`server`]: listen port
//!
//! Configuration is loaded once at startup and passed explicitly to the
//! components that need it; nothing reads the environment after that point.
//! In production mode, [`JwtConfig::validate`] and [`AuthConfig::validate`]
//! reject default or empty values as a fatal [`ConfigError`].
//!
//! # Example
//!
//! ```ignore
//! use pulsegate_config::{AuthConfig, Environment, JwtConfig};
//!
//! let environment = Environment::from_env();
//! let jwt_config = JwtConfig::from_env();
//! jwt_config.validate(&environment)?;
//! let auth_config = AuthConfig::from_env();
//! auth_config.validate(&environment)?;
//! ```

pub mod auth;
pub mod cors;
pub mod environment;
pub mod error;
pub mod jwt;
pub mod server;

// Re-export commonly used types at crate root
pub use auth::AuthConfig;
pub use cors::CorsConfig;
pub use environment::Environment;
pub use error::ConfigError;
pub use jwt::JwtConfig;
pub use server::ServerConfig;
