use std::sync::Arc;

use kalorio_db::CategoryRegistry;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: kalorio_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Process-lifetime category reference cache.
    pub categories: Arc<CategoryRegistry>,
}
