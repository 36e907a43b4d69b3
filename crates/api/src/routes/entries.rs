//! Route definitions for the `/entries` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::entries;
use crate::state::AppState;

/// Routes mounted at `/entries`. All of them require a session.
///
/// ```text
/// GET    /              -> list (filters: entry_date, search, limit)
/// POST   /              -> create
/// GET    /{id}          -> get_by_id
/// PUT    /{id}          -> update
/// DELETE /{id}          -> delete
/// POST   /{id}/publish  -> publish (idempotent)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(entries::list).post(entries::create))
        .route(
            "/{id}",
            get(entries::get_by_id)
                .put(entries::update)
                .delete(entries::delete),
        )
        .route("/{id}/publish", post(entries::publish))
}
