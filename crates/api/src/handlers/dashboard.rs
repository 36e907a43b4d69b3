//! Handler for the `/dashboard` view: one day's entries, their calorie
//! total, and the account's goal.

use axum::extract::{Query, State};
use axum::Json;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use kalorio_db::models::entry::EntryFilter;
use kalorio_db::repositories::{EntryRepo, UserRepo};

use crate::error::AppResult;
use crate::handlers::entries::{annotate_all, EntryResponse};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Query parameters for `GET /dashboard`.
#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    /// Defaults to today (server clock) when omitted.
    pub entry_date: Option<NaiveDate>,
    /// Substring match against entry descriptions.
    pub search: Option<String>,
}

/// Response body for `GET /dashboard`.
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub entry_date: NaiveDate,
    pub entries: Vec<EntryResponse>,
    /// Calorie sum for the day, 0 when there are no entries.
    pub total: i64,
    /// The account's daily goal, if one was set at registration.
    pub goal: Option<i32>,
}

/// GET /api/v1/dashboard
pub async fn dashboard(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(query): Query<DashboardQuery>,
) -> AppResult<Json<DashboardResponse>> {
    let entry_date = query.entry_date.unwrap_or_else(|| Utc::now().date_naive());

    let filter = EntryFilter {
        entry_date: Some(entry_date),
        keyword: query.search.filter(|s| !s.is_empty()),
        limit: None,
    };
    let entries = EntryRepo::list(&state.pool, auth_user.user_id, &filter).await?;
    let total = EntryRepo::daily_total(&state.pool, auth_user.user_id, entry_date).await?;
    let goal = UserRepo::find_by_id(&state.pool, auth_user.user_id)
        .await?
        .and_then(|u| u.daily_goal);

    Ok(Json(DashboardResponse {
        entry_date,
        entries: annotate_all(&state, entries).await?,
        total,
        goal,
    }))
}
