//! Comment model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use kalorio_core::types::{DbId, Timestamp};

/// Full comment row from the `published_comments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Comment {
    pub id: DbId,
    pub published_id: DbId,
    pub user_id: DbId,
    pub body: String,
    pub created_at: Timestamp,
}

/// A comment joined with its author's username for display.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CommentWithAuthor {
    pub id: DbId,
    pub published_id: DbId,
    pub user_id: DbId,
    pub username: String,
    pub body: String,
    pub created_at: Timestamp,
}

/// DTO for creating a comment. The caller must have resolved the published
/// entry already; a dangling `published_id` fails on the foreign key.
#[derive(Debug)]
pub struct CreateComment {
    pub published_id: DbId,
    pub user_id: DbId,
    pub body: String,
}
