//! Marketplace session tokens.
//!
//! A signed-in user holds an HS256 JWT whose subject is their user id. The
//! token says nothing about roles: the creator flag is read from the store on
//! every request, so a token never grants more than the account currently
//! has.

use chrono::Utc;
use creatorhub_core::types::DbId;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// `iss` claim stamped on, and required of, every session token.
pub const TOKEN_ISSUER: &str = "creatorhub";

const DEFAULT_SESSION_MINS: i64 = 24 * 60;

#[derive(Debug, Serialize, Deserialize)]
struct SessionClaims {
    sub: DbId,
    iss: String,
    iat: i64,
    exp: i64,
    jti: String,
}

/// Signing secret and session lifetime.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    /// Session lifetime in minutes (default one day).
    pub access_token_expiry_mins: i64,
}

impl JwtConfig {
    /// Read `JWT_SECRET` (required) and `JWT_ACCESS_EXPIRY_MINS`.
    ///
    /// # Panics
    ///
    /// Panics if the secret is missing or blank, or the expiry is not a
    /// positive integer.
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").expect("JWT_SECRET must be set");
        assert!(!secret.trim().is_empty(), "JWT_SECRET must not be blank");

        let access_token_expiry_mins = match std::env::var("JWT_ACCESS_EXPIRY_MINS") {
            Ok(raw) => raw
                .parse::<i64>()
                .ok()
                .filter(|mins| *mins > 0)
                .expect("JWT_ACCESS_EXPIRY_MINS must be a positive integer"),
            Err(_) => DEFAULT_SESSION_MINS,
        };

        Self {
            secret,
            access_token_expiry_mins,
        }
    }

    /// Session lifetime in seconds, as reported to clients.
    pub fn expires_in_secs(&self) -> i64 {
        self.access_token_expiry_mins * 60
    }
}

/// A freshly signed session token.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub access_token: String,
    pub expires_in: i64,
}

/// Why a presented token was refused.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token has expired")]
    Expired,

    #[error("token is malformed or has a bad signature: {0}")]
    Invalid(jsonwebtoken::errors::Error),

    #[error("failed to sign token: {0}")]
    Signing(jsonwebtoken::errors::Error),
}

/// Sign a session token for `user_id`.
pub fn generate_access_token(
    user_id: DbId,
    config: &JwtConfig,
) -> Result<IssuedToken, TokenError> {
    let issued_at = Utc::now().timestamp();
    let expires_in = config.expires_in_secs();

    let claims = SessionClaims {
        sub: user_id,
        iss: TOKEN_ISSUER.to_string(),
        iat: issued_at,
        exp: issued_at + expires_in,
        jti: Uuid::new_v4().to_string(),
    };

    let access_token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(TokenError::Signing)?;

    Ok(IssuedToken {
        access_token,
        expires_in,
    })
}

/// Check a token's signature, issuer and expiry and return the user id it
/// names. The user may no longer exist; callers look it up.
pub fn validate_token(token: &str, config: &JwtConfig) -> Result<DbId, TokenError> {
    let mut validation = Validation::default();
    validation.set_issuer(&[TOKEN_ISSUER]);
    validation.set_required_spec_claims(&["exp", "iss"]);

    decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims.sub)
    .map_err(|err| match err.kind() {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        _ => TokenError::Invalid(err),
    })
}
