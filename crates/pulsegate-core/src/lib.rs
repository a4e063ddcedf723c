//! # Pulsegate Core
//!
//! Core types shared across the Pulsegate workspace.
//!
//! This crate provides foundational types used throughout the application:
//!
//! - [`errors`]: Application error type with HTTP response conversion
//!
//! # Example
//!
//! ```ignore
//! use pulsegate_core::AppError;
//!
//! // Create an error
//! let error = AppError::not_found(anyhow::anyhow!("Route not found"));
//! ```

pub mod errors;

// Re-export commonly used types at crate root
pub use errors::AppError;
