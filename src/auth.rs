/// Authentication primitives for video-service
///
/// Bearer-token extraction, HS256 JWT issuing/validation, and Argon2id
/// password hashing. Tokens are signed with the shared secret from
/// `Config.auth`; handlers call [`require_user`] as their auth gate.
use anyhow::{anyhow, Result};
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::error::AppError;

const JWT_ALGORITHM: Algorithm = Algorithm::HS256;
const TOKEN_TYPE_ACCESS: &str = "access";

/// JWT claims carried by access tokens
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user ID as UUID string)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Token type, always "access"
    pub token_type: String,
}

/// Issue an access token for a user
pub fn create_token(secret: &str, user_id: Uuid, ttl_secs: i64) -> Result<String> {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id.to_string(),
        iat: now.timestamp(),
        exp: (now + Duration::seconds(ttl_secs)).timestamp(),
        token_type: TOKEN_TYPE_ACCESS.to_string(),
    };

    encode(
        &Header::new(JWT_ALGORITHM),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| anyhow!("Failed to sign token: {}", e))
}

/// Validate an access token and return the authenticated user's ID
pub fn validate_token(secret: &str, token: &str) -> Result<Uuid> {
    let validation = Validation::new(JWT_ALGORITHM);
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| anyhow!("Invalid or expired token: {}", e))?;

    if data.claims.token_type != TOKEN_TYPE_ACCESS {
        return Err(anyhow!("Not an access token"));
    }

    Uuid::parse_str(&data.claims.sub).map_err(|_| anyhow!("Invalid subject in token"))
}

/// Pull the bearer token out of an Authorization header
pub fn get_bearer_token(headers: &actix_web::http::header::HeaderMap) -> Result<&str, AppError> {
    let header = headers
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing Authorization header".to_string()))?;

    header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("Invalid Authorization scheme".to_string()))
}

/// Authenticate a request: bearer extraction plus token validation
pub fn require_user(
    headers: &actix_web::http::header::HeaderMap,
    auth: &AuthConfig,
) -> Result<Uuid, AppError> {
    let token = get_bearer_token(headers)?;
    validate_token(&auth.jwt_secret, token)
        .map_err(|e| AppError::Unauthorized(e.to_string()))
}

/// Hash a password with Argon2id and a fresh random salt
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow!("Password hashing failed: {}", e))?
        .to_string();

    Ok(password_hash)
}

/// Verify a password against its PHC-formatted hash
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool> {
    let parsed_hash =
        PasswordHash::new(password_hash).map_err(|e| anyhow!("Invalid password hash: {}", e))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(_) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(anyhow!("Password verification failed: {}", e)),
    }
}
