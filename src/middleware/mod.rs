//! Middleware modules for request processing.
//!
//! # Authentication Flow
//!
//! 1. Client sends request with `Authorization: Bearer <token>` header
//! 2. [`auth::AuthUser`] validates the JWT and extracts claims
//! 3. Handler executes with the verified claims attached
//!
//! A missing header rejects with 401; a present-but-invalid token (bad
//! signature, malformed, expired) rejects with 403. A malformed credential
//! never falls back to the missing-token path.

pub mod auth;
