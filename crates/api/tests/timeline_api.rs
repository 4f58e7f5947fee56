//! HTTP-level integration tests for the `/api/timeline` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, era_body, get, patch_json, post_json};

#[tokio::test]
async fn seeded_timeline_is_chronological() {
    let app = common::build_seeded_app().await;

    let json = body_json(get(&app, "/api/timeline").await).await;
    let slugs: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["slug"].as_str().unwrap())
        .collect();
    assert_eq!(
        slugs,
        ["indus-valley", "vedic-age", "mauryan", "silk-road", "classical"]
    );
}

#[tokio::test]
async fn create_then_fetch_by_slug() {
    let app = common::build_test_app();

    let response = post_json(&app, "/api/timeline", era_body("indus-valley", 1)).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = get(&app, "/api/timeline/indus-valley").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["era"], "3300 BCE");
    assert_eq!(json["period"], "3300 - 1300 BCE");
}

#[tokio::test]
async fn unknown_era_returns_404() {
    let app = common::build_test_app();
    let response = get(&app, "/api/timeline/bronze-age").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Timeline era not found");
}

#[tokio::test]
async fn patch_reorders_the_list() {
    let app = common::build_test_app();
    let first = body_json(post_json(&app, "/api/timeline", era_body("first", 1)).await).await;
    post_json(&app, "/api/timeline", era_body("second", 2)).await;

    let id = first["id"].as_i64().unwrap();
    let response = patch_json(
        &app,
        &format!("/api/timeline/{id}"),
        serde_json::json!({"sortOrder": 3}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(get(&app, "/api/timeline").await).await;
    assert_eq!(json[0]["slug"], "second");
    assert_eq!(json[1]["slug"], "first");
}

#[tokio::test]
async fn delete_removes_era() {
    let app = common::build_test_app();
    let created = body_json(post_json(&app, "/api/timeline", era_body("vedic-age", 1)).await).await;
    let id = created["id"].as_i64().unwrap();

    let response = delete(&app, &format!("/api/timeline/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let json = body_json(get(&app, "/api/timeline").await).await;
    assert_eq!(json, serde_json::json!([]));
}
