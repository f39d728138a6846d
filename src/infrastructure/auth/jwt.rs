//! HS256 bearer tokens carrying the caller's uid

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::domain::user::{CurrentUser, UserId};
use crate::domain::DomainError;

/// Longest lifetime a token may be issued with (one year)
pub const MAX_TOKEN_HOURS: u64 = 24 * 365;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    /// Subject (user ID)
    pub sub: String,
    /// Issued at (Unix epoch)
    pub iat: i64,
    /// Expiration (Unix epoch)
    pub exp: i64,
}

impl JwtClaims {
    /// Claims for `uid` expiring `expiration_hours` from now.
    ///
    /// Lifetimes above [`MAX_TOKEN_HOURS`] are rejected.
    pub fn new(uid: &UserId, expiration_hours: u64) -> Result<Self, DomainError> {
        let now = Utc::now();
        let exp = Some(expiration_hours)
            .filter(|hours| *hours <= MAX_TOKEN_HOURS)
            .and_then(|hours| i64::try_from(hours).ok())
            .and_then(Duration::try_hours)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or_else(|| {
                DomainError::invalid_field(
                    "hours",
                    format!(
                        "token lifetime must be at most {} hours, got {}",
                        MAX_TOKEN_HOURS, expiration_hours
                    ),
                )
            })?;

        Ok(Self {
            sub: uid.as_str().to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        })
    }

    /// Resolve the subject into a caller identity
    pub fn current_user(&self) -> Result<CurrentUser, DomainError> {
        let uid = UserId::new(&self.sub)
            .map_err(|e| DomainError::unauthorized(format!("Invalid token subject: {}", e)))?;

        Ok(CurrentUser::new(uid))
    }
}

/// Signing secret and default token lifetime
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HS256 shared secret
    pub secret: String,
    /// Lifetime used when the caller does not ask for one
    pub expiration_hours: u64,
}

impl JwtConfig {
    /// Create a config from a secret and default lifetime
    pub fn new(secret: impl Into<String>, expiration_hours: u64) -> Self {
        Self {
            secret: secret.into(),
            expiration_hours,
        }
    }
}

/// Trait for JWT operations
pub trait JwtGenerator: Send + Sync + Debug {
    /// Issue a token for `uid`, valid for `hours` (configured default when `None`)
    fn generate(&self, uid: &UserId, hours: Option<u64>) -> Result<String, DomainError>;

    /// Verify signature and expiry, returning the claims
    fn validate(&self, token: &str) -> Result<JwtClaims, DomainError>;
}

/// HS256 token issuer and verifier
#[derive(Clone)]
pub struct JwtService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("expiration_hours", &self.config.expiration_hours)
            .field("secret", &"[hidden]")
            .finish()
    }
}

impl JwtService {
    /// Build keys from the configured secret
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }
}

impl JwtGenerator for JwtService {
    fn generate(&self, uid: &UserId, hours: Option<u64>) -> Result<String, DomainError> {
        let claims = JwtClaims::new(uid, hours.unwrap_or(self.config.expiration_hours))?;

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| DomainError::internal(format!("Failed to generate JWT: {}", e)))
    }

    fn validate(&self, token: &str) -> Result<JwtClaims, DomainError> {
        let validation = Validation::new(Algorithm::HS256);

        let token_data = decode::<JwtClaims>(token, &self.decoding_key, &validation)
            .map_err(|e| DomainError::unauthorized(format!("Invalid JWT: {}", e)))?;

        Ok(token_data.claims)
    }
}
