//! Handlers for the public feed of published entries and their comments.
//!
//! The feed and single-item reads are unauthenticated; posting a comment
//! requires a session.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use kalorio_core::error::CoreError;
use kalorio_core::types::{DbId, Timestamp};
use kalorio_db::models::comment::{Comment, CommentWithAuthor, CreateComment};
use kalorio_db::models::published::PublishedFeedItem;
use kalorio_db::repositories::{CommentRepo, PublishedRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

const DEFAULT_FEED_LIMIT: i64 = 20;

/// Query parameters for `GET /feed`.
#[derive(Debug, Deserialize)]
pub struct FeedQuery {
    pub limit: Option<i64>,
}

/// A published entry as served to clients, with the category label resolved.
#[derive(Debug, Serialize)]
pub struct FeedItemResponse {
    pub id: DbId,
    pub user_id: DbId,
    pub username: String,
    pub entry_date: NaiveDate,
    pub description: String,
    pub calories: i32,
    pub category: String,
    pub category_label: String,
    pub published_at: Timestamp,
}

#[derive(Debug, Deserialize)]
pub struct AddCommentRequest {
    #[serde(default)]
    pub body: String,
}

async fn annotate(state: &AppState, item: PublishedFeedItem) -> AppResult<FeedItemResponse> {
    let category_label = state
        .categories
        .label_for(&state.pool, &item.category)
        .await?;
    Ok(FeedItemResponse {
        id: item.id,
        user_id: item.user_id,
        username: item.username,
        entry_date: item.entry_date,
        description: item.description,
        calories: item.calories,
        category: item.category,
        category_label,
        published_at: item.published_at,
    })
}

/// Looks up a published entry or maps its absence to a 404.
async fn resolve(state: &AppState, id: DbId) -> AppResult<PublishedFeedItem> {
    PublishedRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Published entry",
            id,
        }))
}

/// GET /api/v1/feed
pub async fn list_feed(
    State(state): State<AppState>,
    Query(query): Query<FeedQuery>,
) -> AppResult<Json<Vec<FeedItemResponse>>> {
    let limit = query.limit.unwrap_or(DEFAULT_FEED_LIMIT).clamp(1, 200);
    let items = PublishedRepo::list_recent(&state.pool, limit).await?;

    let mut out = Vec::with_capacity(items.len());
    for item in items {
        out.push(annotate(&state, item).await?);
    }
    Ok(Json(out))
}

/// GET /api/v1/feed/{id}
pub async fn get_feed_item(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<FeedItemResponse>> {
    let item = resolve(&state, id).await?;
    Ok(Json(annotate(&state, item).await?))
}

/// GET /api/v1/feed/{id}/comments
pub async fn list_comments(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<CommentWithAuthor>>> {
    // 404 for an unknown published entry rather than an empty list.
    resolve(&state, id).await?;
    let comments = CommentRepo::list_for_published(&state.pool, id).await?;
    Ok(Json(comments))
}

/// POST /api/v1/feed/{id}/comments
pub async fn add_comment(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<AddCommentRequest>,
) -> AppResult<(StatusCode, Json<Comment>)> {
    resolve(&state, id).await?;

    let body = input.body.trim();
    if body.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Comment body must not be empty".to_string(),
        )));
    }

    let comment = CommentRepo::create(
        &state.pool,
        &CreateComment {
            published_id: id,
            user_id: auth_user.user_id,
            body: body.to_string(),
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(comment)))
}
