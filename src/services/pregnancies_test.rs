use std::collections::HashMap;

use axum::Json;
use axum::extract::Query;

use super::*;
use crate::test_support::{client_for, empty_session, spawn_api};

fn pregnancy_json(id: i64) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "cow": {
            "id": 1,
            "name": "Bella",
            "breed": "Friesian",
            "date_of_birth": "2020-03-14",
            "gender": "Female",
            "availability_status": "Alive",
            "pregnancy_status": "Pregnant",
            "tag_number": "FR-2020-1"
        },
        "start_date": "2024-01-15",
        "pregnancy_status": "Confirmed",
        "due_date": "2024-10-21"
    })
}

// =============================================================================
// CRUD
// =============================================================================

#[tokio::test]
async fn list_decodes_pregnancies() {
    let app = axum::Router::new().route(
        "/dairy/pregnancies/",
        axum::routing::get(|| async { Json(serde_json::json!([pregnancy_json(1), pregnancy_json(2)])) }),
    );
    let base = spawn_api(app).await;
    let client = client_for(&base, empty_session());

    let pregnancies = list(&client).await.unwrap();
    assert_eq!(pregnancies.len(), 2);
    assert_eq!(pregnancies[0].pregnancy_status, "Confirmed");
}

#[tokio::test]
async fn get_fetches_by_id() {
    let app = axum::Router::new()
        .route("/dairy/pregnancies/8/", axum::routing::get(|| async { Json(pregnancy_json(8)) }));
    let base = spawn_api(app).await;
    let client = client_for(&base, empty_session());

    let pregnancy = get(&client, 8).await.unwrap();
    assert_eq!(pregnancy.id, 8);
    assert_eq!(pregnancy.cow.name, "Bella");
}

// =============================================================================
// Filters
// =============================================================================

#[tokio::test]
async fn list_for_cow_sends_cow_filter() {
    let app = axum::Router::new().route(
        "/dairy/pregnancies/",
        axum::routing::get(|Query(params): Query<HashMap<String, String>>| async move {
            if params.get("cow").map(String::as_str) == Some("1") {
                Json(serde_json::json!([pregnancy_json(1)]))
            } else {
                Json(serde_json::json!([]))
            }
        }),
    );
    let base = spawn_api(app).await;
    let client = client_for(&base, empty_session());

    let matched = list_for_cow(&client, 1).await.unwrap();
    assert_eq!(matched.len(), 1);

    let unmatched = list_for_cow(&client, 2).await.unwrap();
    assert!(unmatched.is_empty());
}

#[tokio::test]
async fn list_due_between_sends_date_range() {
    let app = axum::Router::new().route(
        "/dairy/pregnancies/",
        axum::routing::get(|Query(params): Query<HashMap<String, String>>| async move {
            let in_range = params.get("due_date__gte").map(String::as_str) == Some("2024-10-01")
                && params.get("due_date__lte").map(String::as_str) == Some("2024-10-31");
            if in_range {
                Json(serde_json::json!([pregnancy_json(1)]))
            } else {
                Json(serde_json::json!([]))
            }
        }),
    );
    let base = spawn_api(app).await;
    let client = client_for(&base, empty_session());

    let due = list_due_between(&client, "2024-10-01", "2024-10-31").await.unwrap();
    assert_eq!(due.len(), 1);
    assert_eq!(due[0].due_date.as_deref(), Some("2024-10-21"));
}
