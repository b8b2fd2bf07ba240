//! One-call aggregation of every dashboard widget count, for front-ends
//! that render the whole admin dashboard at once.

use super::types::{
    AliveCowsCount, AliveFemaleCowsCount, AliveMaleCowsCount, DailyMilkProduction, LactatingCowsCount,
    MilkedCowsToday, PregnantCowsCount,
};
use super::{cows, lactations, milk};
use crate::net::{ApiClient, ApiError};

#[derive(Debug, Clone)]
pub struct DashboardSummary {
    pub alive_cows: AliveCowsCount,
    pub alive_female_cows: AliveFemaleCowsCount,
    pub alive_male_cows: AliveMaleCowsCount,
    pub pregnant_cows: PregnantCowsCount,
    pub lactating_cows: LactatingCowsCount,
    pub daily_milk: DailyMilkProduction,
    pub milked_cows: MilkedCowsToday,
}

/// Fetch every widget count concurrently; fails on the first error.
///
/// # Errors
/// Transport failure, non-2xx status, or an undecodable body from any of
/// the aggregate endpoints.
pub async fn summary(client: &ApiClient) -> Result<DashboardSummary, ApiError> {
    let (alive_cows, alive_female_cows, alive_male_cows, pregnant_cows, lactating_cows, daily_milk, milked_cows) =
        tokio::try_join!(
            cows::total_alive(client),
            cows::total_alive_female(client),
            cows::total_alive_male(client),
            cows::pregnant_count(client),
            lactations::lactating_count(client),
            milk::daily_production(client),
            milk::milked_cows_today(client),
        )?;
    Ok(DashboardSummary {
        alive_cows,
        alive_female_cows,
        alive_male_cows,
        pregnant_cows,
        lactating_cows,
        daily_milk,
        milked_cows,
    })
}

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod tests;
