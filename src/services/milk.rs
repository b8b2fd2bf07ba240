//! Milk records: CRUD plus the production dashboard widgets.

use serde_json::Value;

use super::types::{DailyMilkProduction, Milk, MilkedCowsToday, WeeklyMilkEntry};
use crate::net::{ApiClient, ApiError};

pub const MILK_PATH: &str = "/dairy/milk/";
const DASHBOARD_PREFIX: &str = "/dairy/admin/dashboard";

/// # Errors
/// Transport failure, non-2xx status, or an undecodable body.
pub async fn list(client: &ApiClient) -> Result<Vec<Milk>, ApiError> {
    client.get_json(MILK_PATH).await
}

/// # Errors
/// Transport failure, non-2xx status, or an undecodable body.
pub async fn get(client: &ApiClient, id: i64) -> Result<Milk, ApiError> {
    client.get_json(&format!("{MILK_PATH}{id}/")).await
}

/// # Errors
/// Transport failure, non-2xx status, or an undecodable body.
pub async fn create(client: &ApiClient, data: &Value) -> Result<Milk, ApiError> {
    client.post_json(MILK_PATH, data).await
}

/// # Errors
/// Transport failure, non-2xx status, or an undecodable body.
pub async fn update(client: &ApiClient, id: i64, data: &Value) -> Result<Milk, ApiError> {
    client.put_json(&format!("{MILK_PATH}{id}/"), data).await
}

/// # Errors
/// Transport failure or a non-2xx status.
pub async fn delete(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&format!("{MILK_PATH}{id}/")).await
}

/// Today's production against yesterday's.
///
/// # Errors
/// Transport failure, non-2xx status, or an undecodable body.
pub async fn daily_production(client: &ApiClient) -> Result<DailyMilkProduction, ApiError> {
    client
        .get_json(&format!("{DASHBOARD_PREFIX}/daily-milk-production"))
        .await
}

/// # Errors
/// Transport failure, non-2xx status, or an undecodable body.
pub async fn milked_cows_today(client: &ApiClient) -> Result<MilkedCowsToday, ApiError> {
    client.get_json(&format!("{DASHBOARD_PREFIX}/milked-cows")).await
}

/// Per-weekday totals for the current week. Chart rendering is the
/// caller's concern; this returns the data series only.
///
/// # Errors
/// Transport failure, non-2xx status, or an undecodable body.
pub async fn weekly_chart(client: &ApiClient) -> Result<Vec<WeeklyMilkEntry>, ApiError> {
    client
        .get_json(&format!("{DASHBOARD_PREFIX}/weekly-milk-chart-data"))
        .await
}

#[cfg(test)]
#[path = "milk_test.rs"]
mod tests;
