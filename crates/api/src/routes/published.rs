//! Route definitions for the public `/feed` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::published;
use crate::state::AppState;

/// Routes mounted at `/feed`. Reads are public; posting a comment
/// requires a session.
///
/// ```text
/// GET  /               -> list_feed
/// GET  /{id}           -> get_feed_item
/// GET  /{id}/comments  -> list_comments
/// POST /{id}/comments  -> add_comment (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(published::list_feed))
        .route("/{id}", get(published::get_feed_item))
        .route(
            "/{id}/comments",
            get(published::list_comments).post(published::add_comment),
        )
}
