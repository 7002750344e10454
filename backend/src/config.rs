//! Configuration management for the Farm Advisory Platform
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with FARM_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Weather API configuration
    pub weather: WeatherConfig,

    /// Satellite monitoring API configuration
    pub satellite: SatelliteConfig,

    /// Recommendation generator configuration
    pub advisor: AdvisorConfig,

    /// Aggregation pipeline tuning
    pub aggregation: AggregationConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections in the pool
    pub min_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    /// Weather API endpoint
    pub api_endpoint: String,

    /// Weather API key
    pub api_key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SatelliteConfig {
    /// Satellite monitoring API endpoint
    pub api_endpoint: String,

    /// Satellite monitoring API key
    pub api_key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AdvisorConfig {
    /// Recommendation generator endpoint
    pub endpoint: String,

    /// Recommendation generator API key
    pub api_key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AggregationConfig {
    /// Per-fetcher timeout in seconds
    pub fetch_timeout_secs: u64,

    /// Default NDVI/soil lookback window in days
    pub default_history_days: u32,

    /// Upper bound on the lookback window callers may request
    pub max_history_days: u32,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("FARM_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 2)?
            .set_default(
                "weather.api_endpoint",
                "https://api.openweathermap.org/data/2.5",
            )?
            .set_default(
                "satellite.api_endpoint",
                "https://api.agromonitoring.com/agro/1.0",
            )?
            .set_default("aggregation.fetch_timeout_secs", 10)?
            .set_default("aggregation.default_history_days", 30)?
            .set_default("aggregation.max_history_days", 90)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (FARM_ prefix)
            .add_source(
                Environment::with_prefix("FARM")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}
