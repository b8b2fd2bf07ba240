use axum::Json;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{delete, get};
use serde::Deserialize;

use super::*;
use crate::test_support::{client_for, empty_session, session_with_token, spawn_api};

#[derive(Debug, Deserialize)]
struct Named {
    name: String,
}

// =============================================================================
// get_json
// =============================================================================

#[tokio::test]
async fn get_json_decodes_success_body() {
    let app = axum::Router::new().route(
        "/dairy/cows/1/",
        get(|| async { Json(serde_json::json!({ "name": "Bella" })) }),
    );
    let base = spawn_api(app).await;
    let client = client_for(&base, empty_session());

    let named: Named = client.get_json("/dairy/cows/1/").await.unwrap();
    assert_eq!(named.name, "Bella");
}

#[tokio::test]
async fn get_json_maps_error_status() {
    let app = axum::Router::new().route(
        "/dairy/cows/",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let base = spawn_api(app).await;
    let client = client_for(&base, empty_session());

    let result: Result<Named, ApiError> = client.get_json("/dairy/cows/").await;
    match result {
        Err(ApiError::Response { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("expected Response error, got {other:?}"),
    }
}

#[tokio::test]
async fn get_json_maps_undecodable_body() {
    let app = axum::Router::new().route("/dairy/cows/", get(|| async { "not json" }));
    let base = spawn_api(app).await;
    let client = client_for(&base, empty_session());

    let result: Result<Named, ApiError> = client.get_json("/dairy/cows/").await;
    assert!(matches!(result, Err(ApiError::Decode(_))));
}

#[tokio::test]
async fn transport_failure_maps_to_request_error() {
    // Nothing listens on this port.
    let client = client_for("http://127.0.0.1:9", empty_session());
    let result: Result<Named, ApiError> = client.get_json("/dairy/cows/").await;
    assert!(matches!(result, Err(ApiError::Request(_))));
}

// =============================================================================
// authorizer integration
// =============================================================================

#[tokio::test]
async fn stored_token_is_attached_to_requests() {
    let app = axum::Router::new().route(
        "/dairy/cows/",
        get(|headers: HeaderMap| async move {
            let authorization = headers
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_owned();
            Json(serde_json::json!({ "name": authorization }))
        }),
    );
    let base = spawn_api(app).await;
    let client = client_for(&base, session_with_token("my_auth_token"));

    let echoed: Named = client.get_json("/dairy/cows/").await.unwrap();
    assert_eq!(echoed.name, "Token my_auth_token");
}

#[tokio::test]
async fn missing_token_sends_no_authorization_header() {
    let app = axum::Router::new().route(
        "/dairy/cows/",
        get(|headers: HeaderMap| async move {
            Json(serde_json::json!({ "name": headers.contains_key("authorization").to_string() }))
        }),
    );
    let base = spawn_api(app).await;
    let client = client_for(&base, empty_session());

    let echoed: Named = client.get_json("/dairy/cows/").await.unwrap();
    assert_eq!(echoed.name, "false");
}

// =============================================================================
// delete / post_empty
// =============================================================================

#[tokio::test]
async fn delete_accepts_no_content() {
    let app = axum::Router::new().route(
        "/dairy/cows/3/",
        delete(|| async { StatusCode::NO_CONTENT }),
    );
    let base = spawn_api(app).await;
    let client = client_for(&base, empty_session());

    assert!(client.delete("/dairy/cows/3/").await.is_ok());
}

#[tokio::test]
async fn delete_maps_not_found() {
    let app = axum::Router::new().route(
        "/dairy/cows/99/",
        delete(|| async { StatusCode::NOT_FOUND }),
    );
    let base = spawn_api(app).await;
    let client = client_for(&base, empty_session());

    let result = client.delete("/dairy/cows/99/").await;
    assert!(matches!(result, Err(ApiError::Response { status: 404, .. })));
}

#[tokio::test]
async fn post_empty_sends_json_object_body() {
    let app = axum::Router::new().route(
        "/auth/logout/",
        axum::routing::post(|body: String| async move {
            if body == "{}" { StatusCode::OK } else { StatusCode::BAD_REQUEST }
        }),
    );
    let base = spawn_api(app).await;
    let client = client_for(&base, empty_session());

    assert!(client.post_empty("/auth/logout/").await.is_ok());
}
