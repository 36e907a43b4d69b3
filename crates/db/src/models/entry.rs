//! Diary entry model and DTOs.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;
use kalorio_core::types::{DbId, Timestamp};

/// Full entry row from the `entries` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Entry {
    pub id: DbId,
    pub user_id: DbId,
    pub entry_date: NaiveDate,
    pub description: String,
    pub calories: i32,
    pub category: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new entry.
///
/// The caller is responsible for defaulting `entry_date` to today and for
/// normalizing `category` through the registry before insert.
#[derive(Debug)]
pub struct CreateEntry {
    pub user_id: DbId,
    pub entry_date: NaiveDate,
    pub description: String,
    pub calories: i32,
    pub category: String,
}

/// DTO for updating an entry. All three fields are overwritten; `category`
/// must already be normalized.
#[derive(Debug)]
pub struct UpdateEntry {
    pub description: String,
    pub calories: i32,
    pub category: String,
}

/// Optional filters for listing a user's entries.
#[derive(Debug, Default)]
pub struct EntryFilter {
    /// Exact calendar-date match.
    pub entry_date: Option<NaiveDate>,
    /// Substring match against the description.
    pub keyword: Option<String>,
    /// Row cap, defaults to [`EntryFilter::DEFAULT_LIMIT`] when `None`.
    pub limit: Option<i64>,
}

impl EntryFilter {
    pub const DEFAULT_LIMIT: i64 = 20;

    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(Self::DEFAULT_LIMIT)
    }
}
