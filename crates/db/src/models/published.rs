//! Published snapshot model.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;
use kalorio_core::types::{DbId, Timestamp};

/// A published entry joined with its owner's username, as shown on the
/// public feed.
///
/// `entry_id` is `None` once the source diary entry has been deleted; the
/// snapshot itself is immutable and keeps the values captured at publish
/// time.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PublishedFeedItem {
    pub id: DbId,
    pub entry_id: Option<DbId>,
    pub user_id: DbId,
    pub username: String,
    pub entry_date: NaiveDate,
    pub description: String,
    pub calories: i32,
    pub category: String,
    pub published_at: Timestamp,
}
