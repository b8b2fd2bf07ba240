//! Lactation records: read-only listing plus the lactating-cows widget.

use super::types::{Lactation, LactatingCowsCount};
use crate::net::{ApiClient, ApiError};

pub const LACTATIONS_PATH: &str = "/dairy/lactations/";

/// # Errors
/// Transport failure, non-2xx status, or an undecodable body.
pub async fn list(client: &ApiClient) -> Result<Vec<Lactation>, ApiError> {
    client.get_json(LACTATIONS_PATH).await
}

/// # Errors
/// Transport failure, non-2xx status, or an undecodable body.
pub async fn get(client: &ApiClient, id: i64) -> Result<Lactation, ApiError> {
    client.get_json(&format!("{LACTATIONS_PATH}{id}/")).await
}

/// Count (and names) of cows with an open lactation.
///
/// # Errors
/// Transport failure, non-2xx status, or an undecodable body.
pub async fn lactating_count(client: &ApiClient) -> Result<LactatingCowsCount, ApiError> {
    client.get_json("/dairy/admin/dashboard/lactating-cows").await
}

#[cfg(test)]
#[path = "lactations_test.rs"]
mod tests;
