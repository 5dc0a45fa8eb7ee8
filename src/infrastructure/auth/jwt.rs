//! JWT token issuance

use chrono::{TimeDelta, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::domain::{DomainError, TokenIssuer, User};

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    /// Subject (user ID)
    pub sub: String,
    /// Email at the time of issuance
    pub email: String,
    /// Issued at timestamp (Unix epoch)
    pub iat: i64,
    /// Expiration timestamp (Unix epoch)
    pub exp: i64,
}

impl JwtClaims {
    /// Create new claims for a user
    ///
    /// Fails when the expiration does not fit in a timestamp.
    pub fn new(user: &User, expiration_hours: u64) -> Result<Self, DomainError> {
        let now = Utc::now();
        let exp = i64::try_from(expiration_hours)
            .ok()
            .and_then(TimeDelta::try_hours)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or_else(|| {
                DomainError::credential(format!(
                    "Token expiration of {} hours is out of range",
                    expiration_hours
                ))
            })?;

        Ok(Self {
            sub: user.id().to_string(),
            email: user.email().to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        })
    }
}

/// Configuration for the JWT issuer
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Secret key for HS256 signing
    pub secret: String,
    /// Token expiration time in hours
    pub expiration_hours: u64,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>, expiration_hours: u64) -> Self {
        Self {
            secret: secret.into(),
            expiration_hours,
        }
    }
}

/// HS256 token issuer
#[derive(Clone)]
pub struct JwtTokenIssuer {
    expiration_hours: u64,
    encoding_key: EncodingKey,
}

impl Debug for JwtTokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtTokenIssuer")
            .field("expiration_hours", &self.expiration_hours)
            .field("encoding_key", &"[hidden]")
            .finish()
    }
}

impl JwtTokenIssuer {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            expiration_hours: config.expiration_hours,
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
        }
    }

    pub fn expiration_hours(&self) -> u64 {
        self.expiration_hours
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(&self, user: &User) -> Result<String, DomainError> {
        let claims = JwtClaims::new(user, self.expiration_hours)?;

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| DomainError::credential(format!("Failed to generate JWT: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::traits::MockPasswordHasher;
    use jsonwebtoken::{decode, DecodingKey, Validation};

    fn create_test_user() -> User {
        User::create("Ana", "ana@example.com", "senha123", &MockPasswordHasher::new()).unwrap()
    }

    #[test]
    fn test_issue_and_decode() {
        let config = JwtConfig::new("test-secret", 24);
        let issuer = JwtTokenIssuer::new(&config);
        let user = create_test_user();

        let token = issuer.issue(&user).unwrap();

        let decoded = decode::<JwtClaims>(
            &token,
            &DecodingKey::from_secret(b"test-secret"),
            &Validation::default(),
        )
        .unwrap();

        assert_eq!(decoded.claims.sub, user.id().to_string());
        assert_eq!(decoded.claims.email, "ana@example.com");
        assert_eq!(decoded.claims.exp - decoded.claims.iat, 24 * 3600);
    }

    #[test]
    fn test_wrong_secret_fails_decode() {
        let issuer = JwtTokenIssuer::new(&JwtConfig::new("test-secret", 1));
        let token = issuer.issue(&create_test_user()).unwrap();

        let result = decode::<JwtClaims>(
            &token,
            &DecodingKey::from_secret(b"other-secret"),
            &Validation::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_out_of_range_expiration_is_credential_error() {
        let user = create_test_user();

        for hours in [u64::MAX, 1 << 60, i64::MAX as u64] {
            let issuer = JwtTokenIssuer::new(&JwtConfig::new("test-secret", hours));

            let result = issuer.issue(&user);
            assert!(
                matches!(result, Err(DomainError::Credential { .. })),
                "hours = {}",
                hours
            );
        }
    }

    #[test]
    fn test_claims_expire_after_issue() {
        let user = create_test_user();

        let claims = JwtClaims::new(&user, 0).unwrap();
        assert_eq!(claims.exp, claims.iat);

        let claims = JwtClaims::new(&user, 100_000).unwrap();
        assert_eq!(claims.exp - claims.iat, 100_000 * 3600);
    }

    #[test]
    fn test_debug_hides_key() {
        let issuer = JwtTokenIssuer::new(&JwtConfig::new("test-secret", 1));

        let debug = format!("{:?}", issuer);
        assert!(!debug.contains("test-secret"));
        assert_eq!(issuer.expiration_hours(), 1);
    }
}
