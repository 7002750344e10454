//! Farmer profile models

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::Language;

/// A farmer's onboarded profile, one per user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FarmerProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub crop: String,
    pub soil_type: Option<String>,
    pub sowing_date: Option<NaiveDate>,
    pub has_storage: bool,
    /// Storage capacity in quintals, when has_storage is set
    pub storage_capacity_quintals: Option<Decimal>,
    pub irrigation_method: Option<IrrigationMethod>,
    pub experience_years: Option<i32>,
    pub farm_size_acres: Option<Decimal>,
    pub previous_yield_quintals: Option<Decimal>,
    pub preferred_language: Language,
    pub is_onboarding_complete: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Irrigation methods supported by onboarding
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IrrigationMethod {
    Drip,
    Sprinkler,
    Flood,
    Furrow,
    Manual,
    RainFed,
}

impl IrrigationMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            IrrigationMethod::Drip => "drip",
            IrrigationMethod::Sprinkler => "sprinkler",
            IrrigationMethod::Flood => "flood",
            IrrigationMethod::Furrow => "furrow",
            IrrigationMethod::Manual => "manual",
            IrrigationMethod::RainFed => "rain_fed",
        }
    }
}

impl std::fmt::Display for IrrigationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for IrrigationMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "drip" => Ok(IrrigationMethod::Drip),
            "sprinkler" => Ok(IrrigationMethod::Sprinkler),
            "flood" => Ok(IrrigationMethod::Flood),
            "furrow" => Ok(IrrigationMethod::Furrow),
            "manual" => Ok(IrrigationMethod::Manual),
            "rain_fed" => Ok(IrrigationMethod::RainFed),
            other => Err(format!("Unknown irrigation method: {}", other)),
        }
    }
}

/// Partial-field input for profile upsert; every field optional
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UpdateFarmerProfileInput {
    pub crop: Option<String>,
    pub soil_type: Option<String>,
    pub sowing_date: Option<NaiveDate>,
    pub has_storage: Option<bool>,
    pub storage_capacity_quintals: Option<Decimal>,
    pub irrigation_method: Option<IrrigationMethod>,
    pub experience_years: Option<i32>,
    pub farm_size_acres: Option<Decimal>,
    pub previous_yield_quintals: Option<Decimal>,
    pub preferred_language: Option<Language>,
    pub is_onboarding_complete: Option<bool>,
}
