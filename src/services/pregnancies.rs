//! Pregnancy records: CRUD plus the filters the pregnancy screens use.

use serde_json::Value;

use super::types::Pregnancy;
use crate::net::{ApiClient, ApiError};

pub const PREGNANCIES_PATH: &str = "/dairy/pregnancies/";

/// # Errors
/// Transport failure, non-2xx status, or an undecodable body.
pub async fn list(client: &ApiClient) -> Result<Vec<Pregnancy>, ApiError> {
    client.get_json(PREGNANCIES_PATH).await
}

/// # Errors
/// Transport failure, non-2xx status, or an undecodable body.
pub async fn get(client: &ApiClient, id: i64) -> Result<Pregnancy, ApiError> {
    client.get_json(&format!("{PREGNANCIES_PATH}{id}/")).await
}

/// # Errors
/// Transport failure, non-2xx status, or an undecodable body.
pub async fn create(client: &ApiClient, data: &Value) -> Result<Pregnancy, ApiError> {
    client.post_json(PREGNANCIES_PATH, data).await
}

/// # Errors
/// Transport failure, non-2xx status, or an undecodable body.
pub async fn update(client: &ApiClient, id: i64, data: &Value) -> Result<Pregnancy, ApiError> {
    client.put_json(&format!("{PREGNANCIES_PATH}{id}/"), data).await
}

/// # Errors
/// Transport failure or a non-2xx status.
pub async fn delete(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&format!("{PREGNANCIES_PATH}{id}/")).await
}

/// All pregnancies for one cow.
///
/// # Errors
/// Transport failure, non-2xx status, or an undecodable body.
pub async fn list_for_cow(client: &ApiClient, cow_id: i64) -> Result<Vec<Pregnancy>, ApiError> {
    client.get_json(&format!("{PREGNANCIES_PATH}?cow={cow_id}")).await
}

/// Pregnancies due within `[start, end]`, dates as `YYYY-MM-DD`.
///
/// # Errors
/// Transport failure, non-2xx status, or an undecodable body.
pub async fn list_due_between(client: &ApiClient, start: &str, end: &str) -> Result<Vec<Pregnancy>, ApiError> {
    client
        .get_json(&format!("{PREGNANCIES_PATH}?due_date__gte={start}&due_date__lte={end}"))
        .await
}

#[cfg(test)]
#[path = "pregnancies_test.rs"]
mod tests;
