//! Repository for the `published_comments` table.

use sqlx::PgPool;
use kalorio_core::types::DbId;

use crate::models::comment::{Comment, CommentWithAuthor, CreateComment};

/// Provides the append-only comment thread under a published entry.
pub struct CommentRepo;

impl CommentRepo {
    /// Insert a new comment, returning the created row.
    ///
    /// Does not check that the published entry exists; a dangling
    /// `published_id` fails on the foreign key constraint.
    pub async fn create(pool: &PgPool, input: &CreateComment) -> Result<Comment, sqlx::Error> {
        sqlx::query_as::<_, Comment>(
            "INSERT INTO published_comments (published_id, user_id, body)
             VALUES ($1, $2, $3)
             RETURNING id, published_id, user_id, body, created_at",
        )
        .bind(input.published_id)
        .bind(input.user_id)
        .bind(&input.body)
        .fetch_one(pool)
        .await
    }

    /// List the comments under one published entry, oldest first, joined
    /// with each author's username.
    pub async fn list_for_published(
        pool: &PgPool,
        published_id: DbId,
    ) -> Result<Vec<CommentWithAuthor>, sqlx::Error> {
        sqlx::query_as::<_, CommentWithAuthor>(
            "SELECT c.id, c.published_id, c.user_id, u.username, c.body, c.created_at
             FROM published_comments c
             JOIN users u ON c.user_id = u.id
             WHERE c.published_id = $1
             ORDER BY c.created_at ASC, c.id ASC",
        )
        .bind(published_id)
        .fetch_all(pool)
        .await
    }
}
