//! Environmental data models: weather, satellite NDVI, soil and UV

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Current weather conditions at a location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub timestamp: DateTime<Utc>,
    pub temperature_celsius: Decimal,
    pub feels_like_celsius: Decimal,
    pub humidity_percent: i32,
    pub pressure_hpa: i32,
    pub wind_speed_mps: Decimal,
    pub cloud_coverage_percent: i32,
    pub weather_condition: String,
    pub weather_description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rain_1h_mm: Option<Decimal>,
}

/// Weather forecast for a specific time slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastItem {
    pub timestamp: DateTime<Utc>,
    pub temperature_celsius: Decimal,
    pub temp_min_celsius: Decimal,
    pub temp_max_celsius: Decimal,
    pub humidity_percent: i32,
    pub weather_condition: String,
    pub weather_description: String,
    /// Probability of precipitation (0-1)
    pub pop: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rain_3h_mm: Option<Decimal>,
}

/// One NDVI observation for a monitored polygon
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NdviEntry {
    pub timestamp: DateTime<Utc>,
    /// Mean NDVI across the polygon, in [-1, 1]
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

/// One soil reading for a monitored polygon
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SoilEntry {
    pub timestamp: DateTime<Utc>,
    pub surface_temp_celsius: f64,
    pub temp_10cm_celsius: f64,
    /// Volumetric soil moisture, m³/m³
    pub moisture: f64,
}

/// A field boundary registered with the satellite monitoring provider.
/// Related to a local FarmField only by name or a previously cached id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemotePolygon {
    pub id: String,
    pub name: String,
    /// Center point in GeoJSON order: `[lon, lat]`
    pub center: [f64; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_hectares: Option<f64>,
}

/// A vertex sent to the provider when registering a new polygon
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PolygonPoint {
    pub lat: f64,
    pub lng: f64,
}
