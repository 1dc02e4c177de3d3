//! HTTP-level integration tests for the `/categories` API endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, delete, get, post_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Test: GET /api/v1/categories returns empty list on a fresh database
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_list_categories_empty(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(&app, "/api/v1/categories").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert!(body["data"].as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Test: POST /api/v1/categories creates and returns the row
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_create_category(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(
        &app,
        "/api/v1/categories",
        json!({ "label": "Simile", "icon": "≈" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["data"]["label"], "Simile");
    assert_eq!(body["data"]["icon"], "≈");
    assert!(body["data"]["id"].as_i64().unwrap() > 0);

    // And it shows up in the list.
    let response = get(&app, "/api/v1/categories").await;
    let body = body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Test: validation failures are 400 with a structured code
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_create_category_empty_label_rejected(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(
        &app,
        "/api/v1/categories",
        json!({ "label": "", "icon": "≈" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_create_category_empty_icon_rejected(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(
        &app,
        "/api/v1/categories",
        json!({ "label": "Simile", "icon": "" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Test: duplicate label is 409 and does not create a second row
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_duplicate_label_conflict(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(
        &app,
        "/api/v1/categories",
        json!({ "label": "Simile", "icon": "≈" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json(
        &app,
        "/api/v1/categories",
        json!({ "label": "Simile", "icon": "~" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body = body_json(response).await;
    assert_eq!(body["code"], "CONFLICT");
    assert_eq!(body["error"], "A category with this label already exists");

    let response = get(&app, "/api/v1/categories").await;
    let body = body_json(response).await;
    assert_eq!(
        body["data"].as_array().unwrap().len(),
        1,
        "conflict must not create a duplicate row"
    );
}

// ---------------------------------------------------------------------------
// Test: DELETE /api/v1/categories/{id} cascades to phrases
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_delete_category_cascades(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(
        &app,
        "/api/v1/categories",
        json!({ "label": "Doomed", "icon": "💥" }),
    )
    .await;
    let category_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    for text in ["one", "two"] {
        let response = post_json(
            &app,
            "/api/v1/phrases",
            json!({ "text": text, "category_id": category_id }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = delete(&app, &format!("/api/v1/categories/{category_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(&app, &format!("/api/v1/phrases?category_id={category_id}")).await;
    let body = body_json(response).await;
    assert!(
        body["data"].as_array().unwrap().is_empty(),
        "phrases must be removed with their category"
    );
}

// ---------------------------------------------------------------------------
// Test: deleting a nonexistent category is a no-op success
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_delete_missing_category_is_noop(pool: PgPool) {
    let app = build_test_app(pool);
    let response = delete(&app, "/api/v1/categories/424242").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

// ---------------------------------------------------------------------------
// Test: GET /health reports database status
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_health_endpoint(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(&app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db_healthy"], true);
}
