use axum::Json;
use axum::http::StatusCode;

use super::*;
use crate::test_support::{client_for, empty_session, spawn_api};

fn widget_router() -> axum::Router {
    axum::Router::new()
        .route(
            "/dairy/admin/dashboard/total-alive-cows",
            axum::routing::get(|| async { Json(serde_json::json!({ "total_alive_cows": 40 })) }),
        )
        .route(
            "/dairy/admin/dashboard/total-alive-female-cows",
            axum::routing::get(|| async { Json(serde_json::json!({ "total_alive_female_cows": 30 })) }),
        )
        .route(
            "/dairy/admin/dashboard/total-alive-male-cows",
            axum::routing::get(|| async { Json(serde_json::json!({ "total_alive_male_cows": 10 })) }),
        )
        .route(
            "/dairy/admin/dashboard/pregnant-cows",
            axum::routing::get(|| async { Json(serde_json::json!({ "pregnancies_count": 5 })) }),
        )
        .route(
            "/dairy/admin/dashboard/lactating-cows",
            axum::routing::get(|| async {
                Json(serde_json::json!({ "lactating_cows_count": 3, "lactating_cows": ["Bella", "Daisy", "Clover"] }))
            }),
        )
        .route(
            "/dairy/admin/dashboard/daily-milk-production",
            axum::routing::get(|| async {
                Json(serde_json::json!({
                    "total_milk_today": 120.5,
                    "total_milk_yesterday": 110.0,
                    "percentage_difference": 9.5
                }))
            }),
        )
        .route(
            "/dairy/admin/dashboard/milked-cows",
            axum::routing::get(|| async {
                Json(serde_json::json!({ "cows_milked_today": 12, "cows_unmilked_today": 3 }))
            }),
        )
}

#[tokio::test]
async fn summary_collects_every_widget() {
    let base = spawn_api(widget_router()).await;
    let client = client_for(&base, empty_session());

    let summary = summary(&client).await.unwrap();
    assert_eq!(summary.alive_cows.total_alive_cows, 40);
    assert_eq!(summary.alive_female_cows.total_alive_female_cows, 30);
    assert_eq!(summary.alive_male_cows.total_alive_male_cows, 10);
    assert_eq!(summary.pregnant_cows.pregnancies_count, 5);
    assert_eq!(summary.lactating_cows.lactating_cows, vec!["Bella", "Daisy", "Clover"]);
    assert!((summary.daily_milk.percentage_difference - 9.5).abs() < f64::EPSILON);
    assert_eq!(summary.milked_cows.cows_milked_today, 12);
}

#[tokio::test]
async fn summary_fails_when_any_widget_fails() {
    // Same router minus the milked-cows route, which then 404s.
    let app = axum::Router::new()
        .route(
            "/dairy/admin/dashboard/total-alive-cows",
            axum::routing::get(|| async { Json(serde_json::json!({ "total_alive_cows": 40 })) }),
        )
        .route(
            "/dairy/admin/dashboard/total-alive-female-cows",
            axum::routing::get(|| async { Json(serde_json::json!({ "total_alive_female_cows": 30 })) }),
        )
        .route(
            "/dairy/admin/dashboard/total-alive-male-cows",
            axum::routing::get(|| async { Json(serde_json::json!({ "total_alive_male_cows": 10 })) }),
        )
        .route(
            "/dairy/admin/dashboard/pregnant-cows",
            axum::routing::get(|| async { Json(serde_json::json!({ "pregnancies_count": 5 })) }),
        )
        .route(
            "/dairy/admin/dashboard/lactating-cows",
            axum::routing::get(|| async {
                Json(serde_json::json!({ "lactating_cows_count": 0, "lactating_cows": [] }))
            }),
        )
        .route(
            "/dairy/admin/dashboard/daily-milk-production",
            axum::routing::get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        )
        .route(
            "/dairy/admin/dashboard/milked-cows",
            axum::routing::get(|| async {
                Json(serde_json::json!({ "cows_milked_today": 0, "cows_unmilked_today": 0 }))
            }),
        );
    let base = spawn_api(app).await;
    let client = client_for(&base, empty_session());

    let result = summary(&client).await;
    assert!(matches!(result, Err(ApiError::Response { status: 500, .. })));
}
