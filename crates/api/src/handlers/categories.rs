//! Handler exposing the category choices for entry forms.

use axum::extract::State;
use axum::Json;
use kalorio_db::models::category::Category;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/categories
pub async fn list_categories(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    let choices = state.categories.choices(&state.pool).await?;
    Ok(Json(choices.as_ref().clone()))
}
