//! Cow records: CRUD plus the herd-count dashboard widgets.

use serde_json::Value;

use super::types::{AliveCowsCount, AliveFemaleCowsCount, AliveMaleCowsCount, Cow, PregnantCowsCount};
use crate::net::{ApiClient, ApiError};

pub const COWS_PATH: &str = "/dairy/cows/";
const DASHBOARD_PREFIX: &str = "/dairy/admin/dashboard";

/// # Errors
/// Transport failure, non-2xx status, or an undecodable body.
pub async fn list(client: &ApiClient) -> Result<Vec<Cow>, ApiError> {
    client.get_json(COWS_PATH).await
}

/// # Errors
/// Transport failure, non-2xx status, or an undecodable body.
pub async fn get(client: &ApiClient, id: i64) -> Result<Cow, ApiError> {
    client.get_json(&format!("{COWS_PATH}{id}/")).await
}

/// # Errors
/// Transport failure, non-2xx status, or an undecodable body.
pub async fn create(client: &ApiClient, data: &Value) -> Result<Cow, ApiError> {
    client.post_json(COWS_PATH, data).await
}

/// # Errors
/// Transport failure, non-2xx status, or an undecodable body.
pub async fn update(client: &ApiClient, id: i64, data: &Value) -> Result<Cow, ApiError> {
    client.put_json(&format!("{COWS_PATH}{id}/"), data).await
}

/// # Errors
/// Transport failure or a non-2xx status.
pub async fn delete(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&format!("{COWS_PATH}{id}/")).await
}

/// # Errors
/// Transport failure, non-2xx status, or an undecodable body.
pub async fn total_alive(client: &ApiClient) -> Result<AliveCowsCount, ApiError> {
    client.get_json(&format!("{DASHBOARD_PREFIX}/total-alive-cows")).await
}

/// # Errors
/// Transport failure, non-2xx status, or an undecodable body.
pub async fn total_alive_female(client: &ApiClient) -> Result<AliveFemaleCowsCount, ApiError> {
    client
        .get_json(&format!("{DASHBOARD_PREFIX}/total-alive-female-cows"))
        .await
}

/// # Errors
/// Transport failure, non-2xx status, or an undecodable body.
pub async fn total_alive_male(client: &ApiClient) -> Result<AliveMaleCowsCount, ApiError> {
    client
        .get_json(&format!("{DASHBOARD_PREFIX}/total-alive-male-cows"))
        .await
}

/// Count of confirmed, not-yet-calved pregnancies.
///
/// # Errors
/// Transport failure, non-2xx status, or an undecodable body.
pub async fn pregnant_count(client: &ApiClient) -> Result<PregnantCowsCount, ApiError> {
    client.get_json(&format!("{DASHBOARD_PREFIX}/pregnant-cows")).await
}

#[cfg(test)]
#[path = "cows_test.rs"]
mod tests;
