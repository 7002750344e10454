//! Weather API client for fetching current conditions and forecasts
//!
//! Integrates with the OpenWeatherMap API

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;

use shared::{CurrentWeather, ForecastItem};

use super::{check_status, FetchResult, WeatherProvider};

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// OpenWeatherMap API response for current weather
#[derive(Debug, Deserialize)]
struct OwmCurrentResponse {
    weather: Vec<OwmWeather>,
    main: OwmMain,
    wind: OwmWind,
    clouds: OwmClouds,
    rain: Option<OwmRain>,
    dt: i64,
}

#[derive(Debug, Deserialize)]
struct OwmWeather {
    main: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
    feels_like: f64,
    temp_min: f64,
    temp_max: f64,
    pressure: i32,
    humidity: i32,
}

#[derive(Debug, Deserialize)]
struct OwmWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwmClouds {
    all: i32,
}

#[derive(Debug, Deserialize)]
struct OwmRain {
    #[serde(rename = "1h")]
    one_hour: Option<f64>,
    #[serde(rename = "3h")]
    three_hour: Option<f64>,
}

/// OpenWeatherMap API response for forecast
#[derive(Debug, Deserialize)]
struct OwmForecastResponse {
    list: Vec<OwmForecastItem>,
}

#[derive(Debug, Deserialize)]
struct OwmForecastItem {
    dt: i64,
    main: OwmMain,
    weather: Vec<OwmWeather>,
    pop: f64,
    rain: Option<OwmRain>,
}

impl WeatherClient {
    /// Create a new WeatherClient against the production endpoint
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(
            api_key,
            "https://api.openweathermap.org/data/2.5".to_string(),
        )
    }

    /// Create a new WeatherClient with a custom base URL (for testing)
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    fn convert_current(&self, data: OwmCurrentResponse) -> CurrentWeather {
        let weather = data.weather.first();

        CurrentWeather {
            timestamp: DateTime::from_timestamp(data.dt, 0).unwrap_or_else(Utc::now),
            temperature_celsius: Decimal::from_f64_retain(data.main.temp).unwrap_or_default(),
            feels_like_celsius: Decimal::from_f64_retain(data.main.feels_like).unwrap_or_default(),
            humidity_percent: data.main.humidity,
            pressure_hpa: data.main.pressure,
            wind_speed_mps: Decimal::from_f64_retain(data.wind.speed).unwrap_or_default(),
            cloud_coverage_percent: data.clouds.all,
            weather_condition: weather.map(|w| w.main.clone()).unwrap_or_default(),
            weather_description: weather.map(|w| w.description.clone()).unwrap_or_default(),
            rain_1h_mm: data
                .rain
                .as_ref()
                .and_then(|r| r.one_hour)
                .map(|v| Decimal::from_f64_retain(v).unwrap_or_default()),
        }
    }

    fn convert_forecast(&self, data: OwmForecastResponse) -> Vec<ForecastItem> {
        data.list
            .into_iter()
            .map(|item| {
                let weather = item.weather.first();
                ForecastItem {
                    timestamp: DateTime::from_timestamp(item.dt, 0).unwrap_or_else(Utc::now),
                    temperature_celsius: Decimal::from_f64_retain(item.main.temp)
                        .unwrap_or_default(),
                    temp_min_celsius: Decimal::from_f64_retain(item.main.temp_min)
                        .unwrap_or_default(),
                    temp_max_celsius: Decimal::from_f64_retain(item.main.temp_max)
                        .unwrap_or_default(),
                    humidity_percent: item.main.humidity,
                    weather_condition: weather.map(|w| w.main.clone()).unwrap_or_default(),
                    weather_description: weather
                        .map(|w| w.description.clone())
                        .unwrap_or_default(),
                    pop: Decimal::from_f64_retain(item.pop).unwrap_or_default(),
                    rain_3h_mm: item
                        .rain
                        .and_then(|r| r.three_hour)
                        .map(|v| Decimal::from_f64_retain(v).unwrap_or_default()),
                }
            })
            .collect()
    }
}

#[async_trait]
impl WeatherProvider for WeatherClient {
    /// Fetch current weather conditions by GPS coordinates
    async fn get_current_weather(&self, lat: f64, lon: f64) -> FetchResult<CurrentWeather> {
        let url = format!(
            "{}/weather?lat={}&lon={}&appid={}&units=metric",
            self.base_url, lat, lon, self.api_key
        );

        let response = check_status(self.client.get(&url).send().await?).await?;
        let data: OwmCurrentResponse = response.json().await?;

        Ok(self.convert_current(data))
    }

    /// Fetch the 5-day/3-hour forecast by GPS coordinates
    async fn get_forecast(&self, lat: f64, lon: f64) -> FetchResult<Vec<ForecastItem>> {
        let url = format!(
            "{}/forecast?lat={}&lon={}&appid={}&units=metric",
            self.base_url, lat, lon, self.api_key
        );

        let response = check_status(self.client.get(&url).send().await?).await?;
        let data: OwmForecastResponse = response.json().await?;

        Ok(self.convert_forecast(data))
    }
}
