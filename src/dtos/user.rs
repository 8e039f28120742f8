// src/dtos/user.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::user::User;

// Wire names match the login form the frontend already sends.
#[derive(Deserialize)]
pub struct LoginRequest {
    pub usuario: String,
    pub clave: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub tipo: &'static str,
    pub id: i64,
    pub usuario: String,
    pub access_token: String,
}

#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
    pub role: String,
}

#[derive(Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            role: user.role,
            created_at: user.created_at,
        }
    }
}
