//! The aggregated farmer context produced by the data pipeline

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{CurrentWeather, FarmerProfile, ForecastItem, IrrigationMethod, NdviEntry, SoilEntry};
use crate::types::Language;

/// Which environmental sources were successfully fetched for one
/// aggregation call. Every flag defaults to false and is flipped true
/// only on a successful, non-null fetch.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DataCompleteness {
    pub profile: bool,
    pub weather: bool,
    pub ndvi: bool,
    pub soil: bool,
    pub forecast: bool,
    pub uv: bool,
}

/// The single consistent view of a farmer handed to the recommendation
/// generator: profile fields flattened, plus whatever environmental data
/// could be fetched. Constructed fresh per call, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregatedFarmerContext {
    pub user_id: Uuid,
    pub crop: String,
    pub soil_type: Option<String>,
    pub sowing_date: Option<NaiveDate>,
    pub has_storage: bool,
    pub storage_capacity_quintals: Option<Decimal>,
    pub irrigation_method: Option<IrrigationMethod>,
    pub experience_years: Option<i32>,
    pub farm_size_acres: Option<Decimal>,
    pub previous_yield_quintals: Option<Decimal>,
    pub preferred_language: Language,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_weather: Option<CurrentWeather>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forecast: Option<Vec<ForecastItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ndvi_data: Option<Vec<NdviEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soil_data: Option<Vec<SoilEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uv_index: Option<f64>,

    pub last_updated: DateTime<Utc>,
    pub data_completeness: DataCompleteness,
}

impl AggregatedFarmerContext {
    /// Base context from a loaded profile, environmental sections unset
    pub fn from_profile(user_id: Uuid, profile: &FarmerProfile) -> Self {
        Self {
            user_id,
            crop: profile.crop.clone(),
            soil_type: profile.soil_type.clone(),
            sowing_date: profile.sowing_date,
            has_storage: profile.has_storage,
            storage_capacity_quintals: profile.storage_capacity_quintals,
            irrigation_method: profile.irrigation_method,
            experience_years: profile.experience_years,
            farm_size_acres: profile.farm_size_acres,
            previous_yield_quintals: profile.previous_yield_quintals,
            preferred_language: profile.preferred_language.clone(),
            current_weather: None,
            forecast: None,
            ndvi_data: None,
            soil_data: None,
            uv_index: None,
            last_updated: Utc::now(),
            data_completeness: DataCompleteness {
                profile: true,
                ..DataCompleteness::default()
            },
        }
    }
}
