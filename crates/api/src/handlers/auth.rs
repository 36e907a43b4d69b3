//! Handlers for the `/auth` resource (register, login, logout, me).

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use validator::Validate;
use kalorio_core::error::CoreError;
use kalorio_db::models::session::CreateSession;
use kalorio_db::models::user::{CreateUser, UserResponse};
use kalorio_db::repositories::{SessionRepo, UserRepo};

use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::auth::token::{generate_csrf_token, generate_session_token};
use crate::error::{is_unique_violation, AppError, AppResult};
use crate::middleware::auth::{AuthUser, SESSION_COOKIE};
use crate::state::AppState;

/// Minimum accepted password length at registration.
const MIN_PASSWORD_LENGTH: usize = 8;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "Username must not be empty"))]
    pub username: String,
    pub password: String,
    /// Optional daily calorie goal.
    #[validate(range(min = 0, message = "Daily goal must not be negative"))]
    pub daily_goal: Option<i32>,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response. The session itself travels in the cookie;
/// the CSRF token must be echoed in `x-csrf-token` on mutating requests.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: UserResponse,
    pub csrf_token: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/register
///
/// Create a new account. A taken username is a 409 conflict.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    input.validate()?;
    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            username: input.username,
            password_hash,
            daily_goal: input.daily_goal,
        },
    )
    .await
    .map_err(|e| {
        if is_unique_violation(&e, "uq_users_username") {
            AppError::Core(CoreError::Conflict("Username is already taken".into()))
        } else {
            AppError::Database(e)
        }
    })?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// POST /api/v1/auth/login
///
/// Authenticate with username + password and start a cookie session.
///
/// An unknown username and a wrong password produce byte-identical 401
/// responses, so the endpoint cannot be used to enumerate accounts.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let invalid =
        || AppError::Core(CoreError::Unauthorized("Invalid username or password".into()));

    let user = UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(invalid)?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        return Err(invalid());
    }

    let (token, token_hash) = generate_session_token();
    let csrf_token = generate_csrf_token();
    let ttl = chrono::Duration::hours(state.config.session_ttl_hours);

    SessionRepo::create(
        &state.pool,
        &CreateSession {
            user_id: user.id,
            token_hash,
            csrf_token: csrf_token.clone(),
            expires_at: Utc::now() + ttl,
        },
    )
    .await?;

    let cookie = format!(
        "{SESSION_COOKIE}={token}; HttpOnly; SameSite=Lax; Path=/; Max-Age={}",
        ttl.num_seconds()
    );

    let response = LoginResponse {
        user: user.into(),
        csrf_token,
    };

    Ok(([(header::SET_COOKIE, cookie)], Json(response)))
}

/// POST /api/v1/auth/logout
///
/// Delete the current session and clear the cookie. Returns 204 No Content.
pub async fn logout(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<impl IntoResponse> {
    SessionRepo::delete_by_token_hash(&state.pool, &auth_user.token_hash).await?;

    let cookie = format!("{SESSION_COOKIE}=; HttpOnly; SameSite=Lax; Path=/; Max-Age=0");
    Ok((StatusCode::NO_CONTENT, [(header::SET_COOKIE, cookie)]))
}

/// GET /api/v1/auth/me
///
/// Public projection of the logged-in account.
pub async fn me(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, auth_user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth_user.user_id,
        }))?;
    Ok(Json(user.into()))
}
