//! Repository for the `published_entries` table.

use sqlx::PgPool;
use kalorio_core::types::DbId;

use crate::models::entry::Entry;
use crate::models::published::PublishedFeedItem;

/// Feed column list: snapshot columns joined with the owner's username.
const FEED_COLUMNS: &str = "pe.id, pe.entry_id, pe.user_id, u.username, pe.entry_date, \
                            pe.description, pe.calories, pe.category, pe.published_at";

/// Provides the append-only public listing of published entries.
pub struct PublishedRepo;

impl PublishedRepo {
    /// Insert a snapshot of `entry` into the public feed.
    ///
    /// Keyed on the source entry id with `ON CONFLICT DO NOTHING`: returns
    /// `true` only when a new row was inserted, so a second publish of the
    /// same entry is a no-op reported as `false`, never an error. The
    /// caller must have loaded `entry` scoped to the acting user.
    pub async fn publish(pool: &PgPool, entry: &Entry) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO published_entries
                 (entry_id, user_id, entry_date, description, calories, category)
             VALUES ($1, $2, $3, $4, $5, $6)
             ON CONFLICT (entry_id) DO NOTHING",
        )
        .bind(entry.id)
        .bind(entry.user_id)
        .bind(entry.entry_date)
        .bind(&entry.description)
        .bind(entry.calories)
        .bind(&entry.category)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Find one published entry by ID, joined with its owner's username.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PublishedFeedItem>, sqlx::Error> {
        let query = format!(
            "SELECT {FEED_COLUMNS} FROM published_entries pe
             JOIN users u ON pe.user_id = u.id
             WHERE pe.id = $1"
        );
        sqlx::query_as::<_, PublishedFeedItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the most recently published entries, newest first.
    pub async fn list_recent(
        pool: &PgPool,
        limit: i64,
    ) -> Result<Vec<PublishedFeedItem>, sqlx::Error> {
        let query = format!(
            "SELECT {FEED_COLUMNS} FROM published_entries pe
             JOIN users u ON pe.user_id = u.id
             ORDER BY pe.published_at DESC, pe.id DESC
             LIMIT $1"
        );
        sqlx::query_as::<_, PublishedFeedItem>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
