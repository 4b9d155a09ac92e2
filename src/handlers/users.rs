/// User handlers - registration and login
use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;

use crate::auth;
use crate::config::Config;
use crate::db::user_repo;
use crate::error::{AppError, Result};
use crate::models::{CreateUserRequest, LoginRequest, LoginResponse, UserResponse};

const MIN_PASSWORD_LENGTH: usize = 8;

/// Register a new user
pub async fn create_user(
    pool: web::Data<SqlitePool>,
    req: web::Json<CreateUserRequest>,
) -> Result<HttpResponse> {
    let email = req.email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::BadRequest("Invalid email address".to_string()));
    }
    if req.password.len() < MIN_PASSWORD_LENGTH {
        return Err(AppError::BadRequest(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }

    if user_repo::email_exists(pool.get_ref(), email).await? {
        return Err(AppError::BadRequest("Email already registered".to_string()));
    }

    let password_hash = auth::hash_password(&req.password)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;

    let user = user_repo::create_user(pool.get_ref(), email, &password_hash).await?;
    tracing::info!(user_id = %user.id, "user registered");

    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

/// Log in and receive an access token
pub async fn login(
    pool: web::Data<SqlitePool>,
    config: web::Data<Config>,
    req: web::Json<LoginRequest>,
) -> Result<HttpResponse> {
    let user = user_repo::get_user_by_email(pool.get_ref(), req.email.trim())
        .await?
        .ok_or_else(|| AppError::Unauthorized("Invalid email or password".to_string()))?;

    let valid = auth::verify_password(&req.password, &user.password_hash)
        .map_err(|e| AppError::Internal(format!("Password verification failed: {}", e)))?;
    if !valid {
        return Err(AppError::Unauthorized(
            "Invalid email or password".to_string(),
        ));
    }

    let token = auth::create_token(
        &config.auth.jwt_secret,
        user.id,
        config.auth.token_ttl_secs,
    )
    .map_err(|e| AppError::Internal(format!("Failed to issue token: {}", e)))?;

    Ok(HttpResponse::Ok().json(LoginResponse {
        id: user.id,
        email: user.email,
        token,
    }))
}
