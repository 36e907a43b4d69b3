//! HTTP-level integration tests for the public feed and its comments.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_auth, post_json, post_json_auth, Session};
use serde_json::json;
use sqlx::PgPool;

/// Create an entry and publish it, returning the published feed item id.
async fn publish_entry(app: &axum::Router, session: &Session, description: &str) -> i64 {
    let response = post_json_auth(
        app,
        "/api/v1/entries",
        json!({ "entry_date": "2024-03-01", "description": description, "calories": 300 }),
        session,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let entry = body_json(response).await;
    let id = entry["id"].as_i64().unwrap();

    let response = post_auth(app, &format!("/api/v1/entries/{id}/publish"), session).await;
    assert_eq!(response.status(), StatusCode::OK);

    // The feed is newest-first, so the fresh item is at the front.
    let feed = body_json(get(app, "/api/v1/feed").await).await;
    feed[0]["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Feed reads
// ---------------------------------------------------------------------------

/// The feed is public and newest-first, with author and category label
/// resolved.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_feed_is_public_and_newest_first(pool: PgPool) {
    let app = common::build_test_app(pool);
    let session = common::register_and_login(&app, "maija", "correct horse").await;

    publish_entry(&app, &session, "first published").await;
    publish_entry(&app, &session, "second published").await;

    let response = get(&app, "/api/v1/feed").await;
    assert_eq!(response.status(), StatusCode::OK);
    let feed = body_json(response).await;
    let items = feed.as_array().unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["description"], "second published");
    assert_eq!(items[1]["description"], "first published");
    assert_eq!(items[0]["username"], "maija");
    assert_eq!(items[0]["category_label"], "Lounas");
}

/// Without an explicit limit the feed serves the 20 most recent items.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_feed_default_limit_is_twenty(pool: PgPool) {
    let app = common::build_test_app(pool);
    let session = common::register_and_login(&app, "maija", "correct horse").await;

    for i in 0..25 {
        let response = post_json_auth(
            &app,
            "/api/v1/entries",
            json!({
                "entry_date": "2024-03-01",
                "description": format!("meal {i}"),
                "calories": 100
            }),
            &session,
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let id = body_json(response).await["id"].as_i64().unwrap();

        let response = post_auth(&app, &format!("/api/v1/entries/{id}/publish"), &session).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let feed = body_json(get(&app, "/api/v1/feed").await).await;
    assert_eq!(feed.as_array().unwrap().len(), 20);
    // Newest first: the last published item leads.
    assert_eq!(feed[0]["description"], "meal 24");

    // An explicit limit can still raise the cap.
    let all = body_json(get(&app, "/api/v1/feed?limit=25").await).await;
    assert_eq!(all.as_array().unwrap().len(), 25);
}

/// A single feed item resolves by id; an unknown id is 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_feed_item(pool: PgPool) {
    let app = common::build_test_app(pool);
    let session = common::register_and_login(&app, "maija", "correct horse").await;

    let id = publish_entry(&app, &session, "soup").await;

    let response = get(&app, &format!("/api/v1/feed/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let item = body_json(response).await;
    assert_eq!(item["description"], "soup");

    let missing = get(&app, "/api/v1/feed/999999").await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

/// A published item keeps serving after its source entry is deleted.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_feed_item_survives_entry_deletion(pool: PgPool) {
    let app = common::build_test_app(pool);
    let session = common::register_and_login(&app, "maija", "correct horse").await;

    let response = post_json_auth(
        &app,
        "/api/v1/entries",
        json!({ "entry_date": "2024-03-01", "description": "soup", "calories": 300 }),
        &session,
    )
    .await;
    let entry = body_json(response).await;
    let entry_id = entry["id"].as_i64().unwrap();

    let response = post_auth(
        &app,
        &format!("/api/v1/entries/{entry_id}/publish"),
        &session,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = common::delete_auth(&app, &format!("/api/v1/entries/{entry_id}"), &session).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let feed = body_json(get(&app, "/api/v1/feed").await).await;
    let items = feed.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["description"], "soup");
    assert!(items[0]["entry_id"].is_null());
}

// ---------------------------------------------------------------------------
// Comments
// ---------------------------------------------------------------------------

/// Comments require a session, land in creation order, and carry the
/// author's username when listed.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_comments_flow(pool: PgPool) {
    let app = common::build_test_app(pool);
    let author = common::register_and_login(&app, "maija", "correct horse").await;
    let commenter = common::register_and_login(&app, "pekka", "correct horse").await;

    let id = publish_entry(&app, &author, "soup").await;
    let comments_path = format!("/api/v1/feed/{id}/comments");

    // Anonymous posting is rejected.
    let anonymous = post_json(&app, &comments_path, json!({ "body": "nice" })).await;
    assert_eq!(anonymous.status(), StatusCode::UNAUTHORIZED);

    let first = post_json_auth(&app, &comments_path, json!({ "body": "looks good" }), &commenter)
        .await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = post_json_auth(&app, &comments_path, json!({ "body": "thanks!" }), &author).await;
    assert_eq!(second.status(), StatusCode::CREATED);

    let response = get(&app, &comments_path).await;
    assert_eq!(response.status(), StatusCode::OK);
    let comments = body_json(response).await;
    let items = comments.as_array().unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["body"], "looks good");
    assert_eq!(items[0]["username"], "pekka");
    assert_eq!(items[1]["body"], "thanks!");
    assert_eq!(items[1]["username"], "maija");
}

/// A whitespace-only comment body is rejected with 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_empty_comment_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let session = common::register_and_login(&app, "maija", "correct horse").await;

    let id = publish_entry(&app, &session, "soup").await;

    let response = post_json_auth(
        &app,
        &format!("/api/v1/feed/{id}/comments"),
        json!({ "body": "   " }),
        &session,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

/// Comment endpoints on an unknown published id are 404, not empty lists.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_comments_unknown_published_entry(pool: PgPool) {
    let app = common::build_test_app(pool);
    let session = common::register_and_login(&app, "maija", "correct horse").await;

    let listed = get(&app, "/api/v1/feed/999999/comments").await;
    assert_eq!(listed.status(), StatusCode::NOT_FOUND);

    let posted = post_json_auth(
        &app,
        "/api/v1/feed/999999/comments",
        json!({ "body": "hello?" }),
        &session,
    )
    .await;
    assert_eq!(posted.status(), StatusCode::NOT_FOUND);
}
