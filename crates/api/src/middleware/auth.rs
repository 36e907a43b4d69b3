//! Session-cookie authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{header, Method};
use kalorio_core::error::CoreError;
use kalorio_core::types::DbId;
use kalorio_db::repositories::SessionRepo;

use crate::auth::token::hash_session_token;
use crate::error::AppError;
use crate::state::AppState;

/// Name of the login session cookie.
pub const SESSION_COOKIE: &str = "session";

/// Header carrying the CSRF token on mutating requests.
pub const CSRF_HEADER: &str = "x-csrf-token";

/// Authenticated user extracted from the `session` cookie.
///
/// The cookie value is hashed and looked up in `user_sessions`; expired or
/// unknown sessions are rejected with 401. For any method other than GET or
/// HEAD the request must also carry an `x-csrf-token` header matching the
/// token issued at login, otherwise it is rejected with 403.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal database id.
    pub user_id: DbId,
    /// Hash of the session token, used to delete the session on logout.
    pub token_hash: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let cookie_header = parts
            .headers
            .get(header::COOKIE)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Not logged in".into())))?;

        let cookie_prefix = format!("{SESSION_COOKIE}=");
        let token = cookie_header
            .split(';')
            .find_map(|c| c.trim().strip_prefix(cookie_prefix.as_str()))
            .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Not logged in".into())))?;

        let token_hash = hash_session_token(token);
        let session = SessionRepo::find_active_by_token_hash(&state.pool, &token_hash)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("Session expired or invalid".into()))
            })?;

        // CSRF check for state-changing methods.
        if parts.method != Method::GET && parts.method != Method::HEAD {
            let provided = parts
                .headers
                .get(CSRF_HEADER)
                .and_then(|v| v.to_str().ok());
            if provided != Some(session.csrf_token.as_str()) {
                return Err(AppError::Core(CoreError::Forbidden(
                    "Missing or invalid CSRF token".into(),
                )));
            }
        }

        Ok(AuthUser {
            user_id: session.user_id,
            token_hash,
        })
    }
}
