//! Handlers for the `/entries` resource: the owner's diary ledger plus
//! the publish action.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;
use kalorio_core::error::CoreError;
use kalorio_core::types::DbId;
use kalorio_db::models::entry::{CreateEntry, Entry, EntryFilter, UpdateEntry};
use kalorio_db::repositories::{EntryRepo, PublishedRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /entries`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateEntryRequest {
    /// Defaults to today (server clock) when omitted.
    pub entry_date: Option<NaiveDate>,
    #[serde(default)]
    pub description: String,
    #[validate(range(min = 1, message = "Calories must be a positive integer"))]
    pub calories: i32,
    /// Category code; unknown codes are coerced to the default.
    pub category: Option<String>,
}

/// Request body for `PUT /entries/{id}`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateEntryRequest {
    #[serde(default)]
    pub description: String,
    #[validate(range(min = 1, message = "Calories must be a positive integer"))]
    pub calories: i32,
    pub category: Option<String>,
}

/// Query parameters for `GET /entries`.
#[derive(Debug, Deserialize)]
pub struct ListEntriesQuery {
    pub entry_date: Option<NaiveDate>,
    /// Substring match against the description.
    pub search: Option<String>,
    pub limit: Option<i64>,
}

/// One diary entry annotated with its resolved category label.
#[derive(Debug, Serialize)]
pub struct EntryResponse {
    pub id: DbId,
    pub entry_date: NaiveDate,
    pub description: String,
    pub calories: i32,
    pub category: String,
    pub category_label: String,
}

/// Response body for `POST /entries/{id}/publish`.
#[derive(Debug, Serialize)]
pub struct PublishResponse {
    /// False when the entry was already on the public feed.
    pub published: bool,
}

/// Annotate an entry with its category label through the registry cache.
pub(crate) async fn annotate(state: &AppState, entry: Entry) -> AppResult<EntryResponse> {
    let category_label = state
        .categories
        .label_for(&state.pool, &entry.category)
        .await?;
    Ok(EntryResponse {
        id: entry.id,
        entry_date: entry.entry_date,
        description: entry.description,
        calories: entry.calories,
        category: entry.category,
        category_label,
    })
}

pub(crate) async fn annotate_all(
    state: &AppState,
    entries: Vec<Entry>,
) -> AppResult<Vec<EntryResponse>> {
    let mut out = Vec::with_capacity(entries.len());
    for entry in entries {
        out.push(annotate(state, entry).await?);
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/entries
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<CreateEntryRequest>,
) -> AppResult<(StatusCode, Json<EntryResponse>)> {
    input.validate()?;

    let entry_date = input.entry_date.unwrap_or_else(|| Utc::now().date_naive());
    let category = state
        .categories
        .normalize(&state.pool, input.category.as_deref().unwrap_or_default())
        .await?;

    let entry = EntryRepo::create(
        &state.pool,
        &CreateEntry {
            user_id: auth_user.user_id,
            entry_date,
            description: input.description,
            calories: input.calories,
            category,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(annotate(&state, entry).await?)))
}

/// GET /api/v1/entries
pub async fn list(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(query): Query<ListEntriesQuery>,
) -> AppResult<Json<Vec<EntryResponse>>> {
    let filter = EntryFilter {
        entry_date: query.entry_date,
        keyword: query.search.filter(|s| !s.is_empty()),
        limit: query.limit.map(|l| l.clamp(1, 200)),
    };
    let entries = EntryRepo::list(&state.pool, auth_user.user_id, &filter).await?;
    Ok(Json(annotate_all(&state, entries).await?))
}

/// GET /api/v1/entries/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<EntryResponse>> {
    let entry = EntryRepo::find_by_id(&state.pool, auth_user.user_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Entry", id }))?;
    Ok(Json(annotate(&state, entry).await?))
}

/// PUT /api/v1/entries/{id}
pub async fn update(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEntryRequest>,
) -> AppResult<StatusCode> {
    input.validate()?;

    let category = state
        .categories
        .normalize(&state.pool, input.category.as_deref().unwrap_or_default())
        .await?;

    let updated = EntryRepo::update(
        &state.pool,
        auth_user.user_id,
        id,
        &UpdateEntry {
            description: input.description,
            calories: input.calories,
            category,
        },
    )
    .await?;

    if updated {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Entry", id }))
    }
}

/// DELETE /api/v1/entries/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = EntryRepo::delete(&state.pool, auth_user.user_id, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Entry", id }))
    }
}

/// POST /api/v1/entries/{id}/publish
///
/// Snapshot an owned entry onto the public feed. Publishing an entry that
/// is already on the feed reports `published: false` rather than an error.
pub async fn publish(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<PublishResponse>> {
    let entry = EntryRepo::find_by_id(&state.pool, auth_user.user_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Entry", id }))?;

    let published = PublishedRepo::publish(&state.pool, &entry).await?;
    Ok(Json(PublishResponse { published }))
}
