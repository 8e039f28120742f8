// src/handlers/user.rs
use axum::{
    extract::{Path, State},
    Json,
};
use axum::http::StatusCode;
use bcrypt::{hash, verify, DEFAULT_COST};
use tracing::instrument;

use crate::auth::jwt::sign_token;
use crate::auth::roles::{frontend_role, ASSIGNABLE_ROLES};
use crate::dtos::user::{CreateUserRequest, LoginRequest, LoginResponse, UserResponse};
use crate::error::AppError;
use crate::models::user::User;
use crate::state::AppState;

// POST /login
//
// The old deployment compared plaintext passwords; accounts here carry
// bcrypt hashes and the response adds a bearer token for the API.
#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    if payload.usuario.trim().is_empty() {
        return Err(AppError::validation("usuario is required"));
    }
    if payload.clave.is_empty() {
        return Err(AppError::validation("clave is required"));
    }

    let user = sqlx::query_as::<_, User>(
        "SELECT id, username, password_hash, role, created_at FROM users WHERE username = $1"
    )
    .bind(payload.usuario.trim())
    .fetch_optional(&state.db_pool)
    .await?
    .ok_or_else(|| AppError::unauthorized("Invalid credentials"))?;

    let ok = verify(&payload.clave, &user.password_hash)
        .map_err(|e| AppError::internal(format!("Password verify error: {e}")))?;
    if !ok {
        return Err(AppError::unauthorized("Invalid credentials"));
    }

    let secret = std::env::var("JWT_SECRET")
        .map_err(|_| AppError::internal("JWT secret not configured"))?;
    let token = sign_token(user.id, &user.role, &user.username, &secret)?;

    Ok(Json(LoginResponse {
        success: true,
        tipo: frontend_role(&user.role),
        id: user.id,
        usuario: user.username,
        access_token: token,
    }))
}

// GET /admin/users
#[instrument(skip(state))]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = sqlx::query_as::<_, User>(
        "SELECT id, username, password_hash, role, created_at FROM users ORDER BY id"
    )
    .fetch_all(&state.db_pool)
    .await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

// POST /admin/users
#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    if !ASSIGNABLE_ROLES.contains(&payload.role.as_str()) {
        return Err(AppError::validation("Invalid role"));
    }
    if payload.username.trim().is_empty() {
        return Err(AppError::validation("Username required"));
    }
    if payload.password.len() < 6 {
        return Err(AppError::validation("Password too short"));
    }

    let password_hash = hash(&payload.password, DEFAULT_COST)
        .map_err(|e| AppError::internal(format!("Hash error: {e}")))?;

    let user = sqlx::query_as::<_, User>(
        "INSERT INTO users (username, password_hash, role)
         VALUES ($1, $2, $3)
         RETURNING id, username, password_hash, role, created_at"
    )
    .bind(payload.username.trim())
    .bind(&password_hash)
    .bind(&payload.role)
    .fetch_one(&state.db_pool)
    .await
    .map_err(|e| {
        if let Some(db_err) = e.as_database_error() {
            if db_err.code().as_deref() == Some("23505") {
                return AppError::conflict("Username already exists");
            }
        }
        AppError::db(e)
    })?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

// DELETE /admin/users/{id}
#[instrument(skip(state), fields(id))]
pub async fn delete_user(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<()>, AppError> {
    let result = sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(id)
        .execute(&state.db_pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found("User not found"));
    }

    Ok(Json(()))
}
