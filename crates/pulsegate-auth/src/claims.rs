//! JWT claim structure for bearer tokens.

use serde::{Deserialize, Serialize};

/// Claims embedded in every bearer token.
///
/// A token is valid only while its signature verifies against the current
/// secret and the current time is before `exp`. The `jti` makes every
/// issuance unique, so two tokens minted for the same username are never
/// byte-identical even within the same second.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Username (subject claim)
    pub sub: String,
    /// Unique token identifier (JWT ID)
    pub jti: String,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_serialize() {
        let claims = Claims {
            sub: "admin".to_string(),
            jti: "token-id-123".to_string(),
            exp: 1234567890,
            iat: 1234567800,
        };
        let serialized = serde_json::to_string(&claims).unwrap();
        assert!(serialized.contains(r#""sub":"admin""#));
        assert!(serialized.contains(r#""jti":"token-id-123""#));
    }

    #[test]
    fn test_claims_deserialize() {
        let json = r#"{"sub":"admin","jti":"abc","exp":9999999999,"iat":9999999900}"#;
        let claims: Claims = serde_json::from_str(json).unwrap();
        assert_eq!(claims.sub, "admin");
        assert_eq!(claims.jti, "abc");
        assert_eq!(claims.exp, 9999999999);
        assert_eq!(claims.iat, 9999999900);
    }
}
