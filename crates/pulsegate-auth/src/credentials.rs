//! Exact-match credential verification.

use pulsegate_config::AuthConfig;

/// Checks a submitted username/password pair against the configured admin
/// credentials.
///
/// Pure check, no side effects: no lockout, no rate limiting, no logging of
/// the submitted values. Empty fields never match; callers are expected to
/// reject them as a request-shape error before reporting a credential
/// mismatch.
///
/// The comparison is plain equality. The configured pair is itself a
/// plaintext configuration value, so there is no hash to compare against.
pub fn verify_credentials(config: &AuthConfig, username: &str, password: &str) -> bool {
    !username.is_empty()
        && !password.is_empty()
        && username == config.username
        && password == config.password
}
