//! Dairy domain types as the API serves them.
//!
//! Dates travel as `YYYY-MM-DD` strings and are passed through untouched;
//! the client renders, it does not compute with them. Server-computed
//! display fields (durations, stages) are carried verbatim.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cow {
    pub id: i64,
    pub name: String,
    pub breed: String,
    pub date_of_birth: String,
    #[serde(default)]
    pub sire: Option<Box<Cow>>,
    #[serde(default)]
    pub dam: Option<Box<Cow>>,
    #[serde(default)]
    pub calf: Option<Box<Cow>>,
    pub gender: String,
    pub availability_status: String,
    pub pregnancy_status: String,
    #[serde(default)]
    pub date_of_death: Option<String>,
    #[serde(default)]
    pub tag_number: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lactation {
    pub id: i64,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    /// Cow id, not an embedded record.
    pub cow: i64,
    #[serde(default)]
    pub cow_tag_number: String,
    #[serde(default)]
    pub cow_breed: String,
    pub lactation_number: i64,
    #[serde(default)]
    pub pregnancy: Option<i64>,
    #[serde(default)]
    pub lactation_duration: String,
    #[serde(default)]
    pub lactation_stage: String,
    /// Raw display field; the server sometimes returns `"Ended"` here
    /// instead of a date.
    #[serde(default, rename = "end_date_")]
    pub end_date_display: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milk {
    pub id: i64,
    pub cow: Cow,
    #[serde(default)]
    pub cow_tag_number: String,
    #[serde(default)]
    pub cow_breed: String,
    pub milking_date: String,
    pub amount_in_kgs: f64,
    #[serde(default)]
    pub lactation: Option<Lactation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pregnancy {
    pub id: i64,
    pub cow: Cow,
    #[serde(default)]
    pub cow_tag_number: String,
    #[serde(default)]
    pub cow_breed: String,
    pub start_date: String,
    #[serde(default)]
    pub date_of_calving: Option<String>,
    pub pregnancy_status: String,
    #[serde(default)]
    pub pregnancy_notes: Option<String>,
    #[serde(default)]
    pub calving_notes: Option<String>,
    #[serde(default)]
    pub pregnancy_scan_date: Option<String>,
    #[serde(default)]
    pub pregnancy_failed_date: Option<String>,
    #[serde(default)]
    pub pregnancy_outcome: Option<String>,
    #[serde(default)]
    pub pregnancy_duration: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub lactation_stage: Option<String>,
}

// =============================================================================
// Dashboard aggregate payloads
// =============================================================================

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct AliveCowsCount {
    pub total_alive_cows: u64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct AliveFemaleCowsCount {
    pub total_alive_female_cows: u64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct AliveMaleCowsCount {
    pub total_alive_male_cows: u64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PregnantCowsCount {
    pub pregnancies_count: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LactatingCowsCount {
    pub lactating_cows_count: u64,
    #[serde(default)]
    pub lactating_cows: Vec<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DailyMilkProduction {
    pub total_milk_today: f64,
    #[serde(default)]
    pub total_milk_yesterday: f64,
    #[serde(default)]
    pub percentage_difference: f64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MilkedCowsToday {
    pub cows_milked_today: u64,
    #[serde(default)]
    pub cows_unmilked_today: u64,
}

/// One weekday's total on the weekly production chart.
#[derive(Debug, Clone, Deserialize)]
pub struct WeeklyMilkTotal {
    pub day: String,
    pub total_milk: f64,
}

/// Weekly chart entry as the server shapes it: a day label wrapping the
/// per-day totals.
#[derive(Debug, Clone, Deserialize)]
pub struct WeeklyMilkEntry {
    pub day: String,
    #[serde(default)]
    pub milk_records: Vec<WeeklyMilkTotal>,
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
