//! Browser login session model and DTOs.

use sqlx::FromRow;
use kalorio_core::types::{DbId, Timestamp};

/// Full session row from the `user_sessions` table.
///
/// `token_hash` is the SHA-256 hex digest of the cookie value; the
/// plaintext token never touches the database.
#[derive(Debug, Clone, FromRow)]
pub struct UserSession {
    pub id: DbId,
    pub user_id: DbId,
    pub token_hash: String,
    pub csrf_token: String,
    pub expires_at: Timestamp,
    pub created_at: Timestamp,
}

/// DTO for creating a new session.
#[derive(Debug)]
pub struct CreateSession {
    pub user_id: DbId,
    pub token_hash: String,
    pub csrf_token: String,
    pub expires_at: Timestamp,
}
