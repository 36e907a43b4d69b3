//! Repository for the `entries` table.
//!
//! Every query here is owner-scoped: the `user_id` constraint is part of
//! the WHERE clause, so a lookup of someone else's entry is
//! indistinguishable from a lookup of a nonexistent one.

use chrono::NaiveDate;
use sqlx::PgPool;
use kalorio_core::types::DbId;

use crate::models::entry::{CreateEntry, Entry, EntryFilter, UpdateEntry};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, entry_date, description, calories, category, created_at";

/// Provides CRUD operations and the daily calorie sum for diary entries.
pub struct EntryRepo;

impl EntryRepo {
    /// Insert a new entry, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateEntry) -> Result<Entry, sqlx::Error> {
        let query = format!(
            "INSERT INTO entries (user_id, entry_date, description, calories, category)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Entry>(&query)
            .bind(input.user_id)
            .bind(input.entry_date)
            .bind(&input.description)
            .bind(input.calories)
            .bind(&input.category)
            .fetch_one(pool)
            .await
    }

    /// List a user's entries, newest first (`entry_date DESC, id DESC`),
    /// optionally filtered to an exact date and/or a description substring.
    pub async fn list(
        pool: &PgPool,
        user_id: DbId,
        filter: &EntryFilter,
    ) -> Result<Vec<Entry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM entries
             WHERE user_id = $1
               AND ($2::date IS NULL OR entry_date = $2)
               AND ($3::text IS NULL OR description LIKE '%' || $3 || '%')
             ORDER BY entry_date DESC, id DESC
             LIMIT $4"
        );
        sqlx::query_as::<_, Entry>(&query)
            .bind(user_id)
            .bind(filter.entry_date)
            .bind(filter.keyword.as_deref())
            .bind(filter.limit())
            .fetch_all(pool)
            .await
    }

    /// Find an entry by ID, scoped to its owner.
    pub async fn find_by_id(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
    ) -> Result<Option<Entry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM entries WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Entry>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite description, calories, and category of an owned entry.
    ///
    /// Returns `true` if a row matched both id and owner.
    pub async fn update(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
        input: &UpdateEntry,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE entries SET description = $3, calories = $4, category = $5
             WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(user_id)
        .bind(&input.description)
        .bind(input.calories)
        .bind(&input.category)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete an owned entry. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, user_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM entries WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Sum of calories for one user and date. Returns 0 when no rows match.
    pub async fn daily_total(
        pool: &PgPool,
        user_id: DbId,
        entry_date: NaiveDate,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COALESCE(SUM(calories), 0) FROM entries
             WHERE user_id = $1 AND entry_date = $2",
        )
        .bind(user_id)
        .bind(entry_date)
        .fetch_one(pool)
        .await
    }
}
