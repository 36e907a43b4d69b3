//! User entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use kalorio_core::types::{DbId, Timestamp};

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses
/// directly. Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub password_hash: String,
    pub daily_goal: Option<i32>,
    pub created_at: Timestamp,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub username: String,
    pub daily_goal: Option<i32>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            daily_goal: user.daily_goal,
        }
    }
}

/// DTO for creating a new user. The password is hashed by the caller.
#[derive(Debug)]
pub struct CreateUser {
    pub username: String,
    pub password_hash: String,
    pub daily_goal: Option<i32>,
}
