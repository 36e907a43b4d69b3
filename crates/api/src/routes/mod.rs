pub mod auth;
pub mod entries;
pub mod health;
pub mod published;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register            register (public)
/// /auth/login               login (public)
/// /auth/logout              logout (requires auth)
/// /auth/me                  current account (requires auth)
///
/// /entries                  list, create (requires auth)
/// /entries/{id}             get, update, delete
/// /entries/{id}/publish     publish to the feed (POST, idempotent)
///
/// /feed                     recent published entries (public)
/// /feed/{id}                single published entry (public)
/// /feed/{id}/comments       list (public), add (requires auth)
///
/// /dashboard                one day's entries, total, and goal (requires auth)
/// /categories               category choices for entry forms (public)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Account registration and session management.
        .nest("/auth", auth::router())
        // Private diary entries and publication.
        .nest("/entries", entries::router())
        // Public feed of published entries and their comments.
        .nest("/feed", published::router())
        // Daily summary view.
        .route("/dashboard", get(handlers::dashboard::dashboard))
        // Category choices.
        .route("/categories", get(handlers::categories::list_categories))
}
