use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use kalorio_api::config::ServerConfig;
use kalorio_api::router::build_app_router;
use kalorio_api::state::AppState;
use kalorio_db::CategoryRegistry;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        session_ttl_hours: 720,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        categories: Arc::new(CategoryRegistry::new()),
    };
    build_app_router(state, &config)
}

/// An authenticated client session: the value of the `session` cookie and
/// the CSRF token that mutating requests must echo back.
#[derive(Debug, Clone)]
pub struct Session {
    pub cookie: String,
    pub csrf_token: String,
}

async fn send(
    app: &Router,
    method: Method,
    path: &str,
    body: Option<serde_json::Value>,
    session: Option<&Session>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(session) = session {
        builder = builder
            .header(header::COOKIE, &session.cookie)
            .header("x-csrf-token", &session.csrf_token);
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request should build"),
        None => builder.body(Body::empty()).expect("request should build"),
    };
    app.clone()
        .oneshot(request)
        .await
        .expect("request should not fail at the transport level")
}

pub async fn get(app: &Router, path: &str) -> Response<Body> {
    send(app, Method::GET, path, None, None).await
}

pub async fn get_auth(app: &Router, path: &str, session: &Session) -> Response<Body> {
    send(app, Method::GET, path, None, Some(session)).await
}

pub async fn post_json(app: &Router, path: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, path, Some(body), None).await
}

pub async fn post_json_auth(
    app: &Router,
    path: &str,
    body: serde_json::Value,
    session: &Session,
) -> Response<Body> {
    send(app, Method::POST, path, Some(body), Some(session)).await
}

pub async fn post_auth(app: &Router, path: &str, session: &Session) -> Response<Body> {
    send(app, Method::POST, path, None, Some(session)).await
}

pub async fn put_json_auth(
    app: &Router,
    path: &str,
    body: serde_json::Value,
    session: &Session,
) -> Response<Body> {
    send(app, Method::PUT, path, Some(body), Some(session)).await
}

pub async fn delete_auth(app: &Router, path: &str, session: &Session) -> Response<Body> {
    send(app, Method::DELETE, path, None, Some(session)).await
}

/// Read a response body to completion and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

/// Register an account and log in through the API, returning a ready-to-use
/// [`Session`].
pub async fn register_and_login(app: &Router, username: &str, password: &str) -> Session {
    let response = post_json(
        app,
        "/api/v1/auth/register",
        serde_json::json!({ "username": username, "password": password }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    login(app, username, password).await
}

/// Log in an existing account and return its [`Session`].
pub async fn login(app: &Router, username: &str, password: &str) -> Session {
    let response = post_json(
        app,
        "/api/v1/auth/login",
        serde_json::json!({ "username": username, "password": password }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("login must set a session cookie")
        .to_str()
        .expect("cookie should be ASCII")
        .to_string();
    // Keep only the `session=...` pair, dropping the cookie attributes.
    let cookie = set_cookie
        .split(';')
        .next()
        .expect("cookie should have a value")
        .to_string();

    let json = body_json(response).await;
    let csrf_token = json["csrf_token"]
        .as_str()
        .expect("login response must contain csrf_token")
        .to_string();

    Session { cookie, csrf_token }
}
