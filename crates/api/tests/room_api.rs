//! HTTP-level tests for `GET /rooms`.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use sqlx::PgPool;

fn names(json: &serde_json::Value) -> Vec<String> {
    json.as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap().to_string())
        .collect()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_rooms_with_equipment(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/rooms").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 5);

    let first = &json[0];
    assert_eq!(first["name"], "Salle #1");
    assert_eq!(first["capacity"], 5);
    assert!(first["createdAt"].is_string());
    let equipment: Vec<&str> = first["equipment"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect();
    assert_eq!(equipment.len(), 2);
    assert!(equipment.contains(&"TV"));
    assert!(first["equipment"][0]["id"].is_number());
    assert!(first["equipment"][0].get("room_id").is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_capacity_filter_is_inclusive(pool: PgPool) {
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/rooms?capacity=10").await).await;
    assert_eq!(
        names(&json),
        vec!["Salle #2", "Salle Okjsdkso", "Salle de ouf", "Salle nulle"]
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_equipment_and_capacity_compose(pool: PgPool) {
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/rooms?capacity=11&equipment=tv").await).await;
    assert_eq!(names(&json), vec!["Salle nulle"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_invalid_capacity_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/rooms?capacity=-3").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("capacity"));
    assert!(json.get("code").is_none());
}
