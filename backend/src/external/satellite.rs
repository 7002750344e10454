//! Satellite monitoring API client for field-scoped NDVI, soil and UV data
//!
//! Integrates with the Agromonitoring API. Polygons registered with the
//! provider are addressed by opaque ids and scope all field-level queries.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;

use shared::{NdviEntry, PolygonPoint, RemotePolygon, SoilEntry};

use super::{check_status, FetchResult, SatelliteProvider};

const KELVIN_OFFSET: f64 = 273.15;

/// Satellite monitoring API client
#[derive(Clone)]
pub struct SatelliteClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// Agromonitoring polygon resource
#[derive(Debug, Deserialize)]
struct AgroPolygon {
    id: String,
    name: String,
    center: [f64; 2],
    area: Option<f64>,
}

impl From<AgroPolygon> for RemotePolygon {
    fn from(p: AgroPolygon) -> Self {
        RemotePolygon {
            id: p.id,
            name: p.name,
            center: p.center,
            area_hectares: p.area,
        }
    }
}

/// One NDVI history sample
#[derive(Debug, Deserialize)]
struct AgroNdvi {
    dt: i64,
    data: AgroNdviStats,
}

#[derive(Debug, Deserialize)]
struct AgroNdviStats {
    mean: f64,
    min: f64,
    max: f64,
}

/// Current soil reading; temperatures arrive in Kelvin
#[derive(Debug, Deserialize)]
struct AgroSoil {
    dt: i64,
    t0: f64,
    t10: f64,
    moisture: f64,
}

#[derive(Debug, Deserialize)]
struct AgroUvi {
    uvi: f64,
}

impl SatelliteClient {
    /// Create a new SatelliteClient against the production endpoint
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(
            api_key,
            "https://api.agromonitoring.com/agro/1.0".to_string(),
        )
    }

    /// Create a new SatelliteClient with a custom base URL (for testing)
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }
}

#[async_trait]
impl SatelliteProvider for SatelliteClient {
    /// List every polygon registered under this account
    async fn list_polygons(&self) -> FetchResult<Vec<RemotePolygon>> {
        let url = format!("{}/polygons?appid={}", self.base_url, self.api_key);

        let response = check_status(self.client.get(&url).send().await?).await?;
        let data: Vec<AgroPolygon> = response.json().await?;

        Ok(data.into_iter().map(RemotePolygon::from).collect())
    }

    /// Register a new polygon from field vertices
    async fn create_polygon(
        &self,
        name: &str,
        points: Vec<PolygonPoint>,
    ) -> FetchResult<RemotePolygon> {
        let url = format!("{}/polygons?appid={}", self.base_url, self.api_key);

        // The provider expects GeoJSON coordinate order: [lon, lat]
        let ring: Vec<[f64; 2]> = points.iter().map(|p| [p.lng, p.lat]).collect();
        let body = serde_json::json!({
            "name": name,
            "geo_json": {
                "type": "Feature",
                "properties": {},
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [ring],
                },
            },
        });

        let response = check_status(self.client.post(&url).json(&body).send().await?).await?;
        let data: AgroPolygon = response.json().await?;

        Ok(data.into())
    }

    /// Fetch NDVI history for a polygon over a unix-time window
    async fn get_ndvi_history(
        &self,
        polygon_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> FetchResult<Vec<NdviEntry>> {
        let url = format!(
            "{}/ndvi/history?polyid={}&start={}&end={}&appid={}",
            self.base_url,
            polygon_id,
            start.timestamp(),
            end.timestamp(),
            self.api_key
        );

        let response = check_status(self.client.get(&url).send().await?).await?;
        let data: Vec<AgroNdvi> = response.json().await?;

        Ok(data
            .into_iter()
            .map(|entry| NdviEntry {
                timestamp: DateTime::from_timestamp(entry.dt, 0).unwrap_or_else(Utc::now),
                mean: entry.data.mean,
                min: entry.data.min,
                max: entry.data.max,
            })
            .collect())
    }

    /// Fetch the current soil reading for a polygon
    async fn get_current_soil(&self, polygon_id: &str) -> FetchResult<SoilEntry> {
        let url = format!(
            "{}/soil?polyid={}&appid={}",
            self.base_url, polygon_id, self.api_key
        );

        let response = check_status(self.client.get(&url).send().await?).await?;
        let data: AgroSoil = response.json().await?;

        Ok(SoilEntry {
            timestamp: DateTime::from_timestamp(data.dt, 0).unwrap_or_else(Utc::now),
            surface_temp_celsius: data.t0 - KELVIN_OFFSET,
            temp_10cm_celsius: data.t10 - KELVIN_OFFSET,
            moisture: data.moisture,
        })
    }

    /// Fetch the current UV index for a polygon
    async fn get_current_uvi(&self, polygon_id: &str) -> FetchResult<f64> {
        let url = format!(
            "{}/uvi?polyid={}&appid={}",
            self.base_url, polygon_id, self.api_key
        );

        let response = check_status(self.client.get(&url).send().await?).await?;
        let data: AgroUvi = response.json().await?;

        Ok(data.uvi)
    }
}
