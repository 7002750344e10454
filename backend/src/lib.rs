//! Farm Advisory Platform - Backend
//!
//! A farming-advisory backend: farmers onboard a profile, register field
//! boundaries, and receive recommendations synthesized from weather,
//! satellite NDVI, soil and UV data.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use crate::config::Config;

use external::{AdvisorClient, SatelliteClient, WeatherClient};
use services::advisory::AdvisoryService;
use services::aggregation::FarmerDataService;
use services::profile::PgProfileStore;

/// The orchestrator bound to its production collaborators
pub type FarmerData = FarmerDataService<PgProfileStore, WeatherClient, SatelliteClient>;

/// Application state shared across handlers.
///
/// All services are constructed once at startup and cloned into handlers;
/// there are no module-level singletons.
#[derive(Clone)]
pub struct AppState {
    pub db: sqlx::PgPool,
    pub config: Arc<Config>,
    pub store: PgProfileStore,
    pub advisory: AdvisoryService<PgProfileStore, WeatherClient, SatelliteClient>,
}

impl AppState {
    /// Wire up services from configuration and a connected pool
    pub fn new(db: sqlx::PgPool, config: Config) -> Self {
        let store = PgProfileStore::new(db.clone());
        let weather = WeatherClient::with_base_url(
            config.weather.api_key.clone(),
            config.weather.api_endpoint.clone(),
        );
        let satellite = SatelliteClient::with_base_url(
            config.satellite.api_key.clone(),
            config.satellite.api_endpoint.clone(),
        );
        let advisor = AdvisorClient::new(
            config.advisor.endpoint.clone(),
            config.advisor.api_key.clone(),
        );
        let farmer_data = FarmerDataService::new(store.clone(), weather, satellite)
            .with_fetch_timeout(std::time::Duration::from_secs(
                config.aggregation.fetch_timeout_secs,
            ));

        Self {
            db,
            config: Arc::new(config),
            store,
            advisory: AdvisoryService::new(farmer_data, advisor),
        }
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Farm Advisory Platform API v1.0"
}
