//! Clients for third-party data providers
//!
//! Each provider is consumed through a capability trait so the aggregation
//! pipeline can be exercised against in-memory fakes. The concrete clients
//! here are the production bindings.

pub mod advisor;
pub mod satellite;
pub mod weather;

pub use advisor::AdvisorClient;
pub use satellite::SatelliteClient;
pub use weather::WeatherClient;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use shared::{CurrentWeather, ForecastItem, NdviEntry, PolygonPoint, RemotePolygon, SoilEntry};

/// Errors from environmental data providers.
///
/// These never propagate past the aggregation orchestrator; each failed
/// fetch is logged and recorded as a missing source in the completeness map.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Provider returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Request timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("Unexpected payload: {0}")]
    Payload(String),
}

/// Result type alias for provider calls
pub type FetchResult<T> = Result<T, FetchError>;

/// Current-conditions and forecast capability
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn get_current_weather(&self, lat: f64, lon: f64) -> FetchResult<CurrentWeather>;

    async fn get_forecast(&self, lat: f64, lon: f64) -> FetchResult<Vec<ForecastItem>>;
}

/// Field-scoped satellite monitoring capability
#[async_trait]
pub trait SatelliteProvider: Send + Sync {
    async fn list_polygons(&self) -> FetchResult<Vec<RemotePolygon>>;

    async fn create_polygon(
        &self,
        name: &str,
        points: Vec<PolygonPoint>,
    ) -> FetchResult<RemotePolygon>;

    async fn get_ndvi_history(
        &self,
        polygon_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> FetchResult<Vec<NdviEntry>>;

    /// Current soil reading only; historical soil series are not fetched
    async fn get_current_soil(&self, polygon_id: &str) -> FetchResult<SoilEntry>;

    async fn get_current_uvi(&self, polygon_id: &str) -> FetchResult<f64>;
}

/// Reject non-2xx responses, preserving the provider's error body
pub(crate) async fn check_status(response: reqwest::Response) -> FetchResult<reqwest::Response> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(FetchError::Status { status, body })
}
