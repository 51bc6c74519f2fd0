//! Registration and login API handlers

use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use hawker_auth::{issue_token, AuthRole};
use hawker_common::{hash_password, verify_password, Error, Result, ValidatedJson};

use crate::api::middleware::AccountsState;
use crate::domain::entities::User;

/// Request for registering a new user
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,

    /// Account role (defaults to buyer)
    #[serde(default)]
    pub role: Option<AuthRole>,
}

/// Request for logging in
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// User response DTO (never includes the password hash)
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: AuthRole,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            name: u.name,
            role: u.role,
            created_at: u.created_at,
        }
    }
}

/// Response carrying a bearer token plus the authenticated user
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserResponse,
}

/// Register a new user account
pub async fn register(
    State(state): State<AccountsState>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>)> {
    if state.users.find_by_email(&req.email).await?.is_some() {
        return Err(Error::Conflict("Email is already registered".to_string()));
    }

    let password_hash = hash_password(&req.password)
        .map_err(|e| Error::Internal(format!("Failed to hash password: {e}")))?;

    let role = req.role.unwrap_or(AuthRole::Buyer);
    let user = User::new(req.email, req.name, password_hash, role);
    let created = state.users.create(&user).await?;

    let token = issue_token(
        created.id,
        &created.email,
        created.role,
        state.auth.config(),
    )
    .map_err(|_| Error::Internal("Failed to issue token".to_string()))?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: created.into(),
        }),
    ))
}

/// Log in with email and password
pub async fn login(
    State(state): State<AccountsState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<Json<AuthResponse>> {
    // Same error for unknown email and wrong password
    let invalid = || Error::Authentication("Invalid email or password".to_string());

    let user = state
        .users
        .find_by_email(&req.email)
        .await?
        .ok_or_else(invalid)?;

    if !verify_password(&req.password, &user.password_hash) {
        return Err(invalid());
    }

    let token = issue_token(user.id, &user.email, user.role, state.auth.config())
        .map_err(|_| Error::Internal("Failed to issue token".to_string()))?;

    Ok(Json(AuthResponse {
        token,
        user: user.into(),
    }))
}
