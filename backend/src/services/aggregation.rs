//! The farmer data aggregation pipeline
//!
//! Reconciles a farmer's stored profile with independent, unreliable
//! environmental sources under partial-failure semantics. Exactly two
//! failure modes propagate to the caller: an incomplete profile, and
//! missing coordinates when the caller demanded complete data. Every
//! other failure is absorbed and reflected only in the completeness map,
//! so callers can always render something from partial data.

use std::time::Duration;

use chrono::Utc;
use uuid::Uuid;

use shared::{AggregatedFarmerContext, NdviEntry, SoilEntry, UserWithFarm};

use crate::error::{AppError, AppResult};
use crate::external::{FetchResult, SatelliteProvider, WeatherProvider};
use crate::services::geo;
use crate::services::polygon;
use crate::services::profile::ProfileStore;

/// Default NDVI/soil lookback window in days
pub const DEFAULT_HISTORY_DAYS: u32 = 30;

/// Longest lookback window callers may request
pub const MAX_HISTORY_DAYS: u32 = 90;

const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Options controlling one aggregation call
#[derive(Debug, Clone)]
pub struct FarmerDataOptions {
    /// Fetch NDVI and soil history; when false they are skipped entirely
    pub include_historical_data: bool,
    /// Lookback window for NDVI/soil, clamped to [1, MAX_HISTORY_DAYS]
    pub max_history_days: u32,
    /// Treat unresolvable coordinates as a hard failure
    pub require_all_data: bool,
}

impl Default for FarmerDataOptions {
    fn default() -> Self {
        Self {
            include_historical_data: true,
            max_history_days: DEFAULT_HISTORY_DAYS,
            require_all_data: false,
        }
    }
}

/// Caller-side selection hints, e.g. the field picked in the UI
#[derive(Debug, Clone, Default)]
pub struct SelectionContext {
    pub selected_polygon_id: Option<String>,
}

/// The aggregation orchestrator, generic over its collaborators so tests
/// can substitute in-memory fakes
#[derive(Clone)]
pub struct FarmerDataService<S, W, P> {
    store: S,
    weather: W,
    satellite: P,
    fetch_timeout: Duration,
}

impl<S, W, P> FarmerDataService<S, W, P>
where
    S: ProfileStore,
    W: WeatherProvider,
    P: SatelliteProvider,
{
    pub fn new(store: S, weather: W, satellite: P) -> Self {
        Self {
            store,
            weather,
            satellite,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }

    /// Bound every provider call; a hung provider hangs only its branch
    /// and only until this deadline
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Build the aggregated context for one farmer.
    ///
    /// Fails only when the profile is absent or onboarding is incomplete,
    /// or when no coordinates resolve and `require_all_data` is set.
    pub async fn get_farmer_data(
        &self,
        user_id: Uuid,
        options: FarmerDataOptions,
        selection: SelectionContext,
    ) -> AppResult<AggregatedFarmerContext> {
        let user = self
            .store
            .get_user_with_profile_and_fields(user_id)
            .await?
            .ok_or(AppError::OnboardingIncomplete)?;

        let profile = user
            .profile
            .as_ref()
            .filter(|p| p.is_onboarding_complete)
            .ok_or(AppError::OnboardingIncomplete)?;

        let mut context = AggregatedFarmerContext::from_profile(user_id, profile);

        let fields = user
            .farms
            .first()
            .map(|farm| farm.fields.as_slice())
            .unwrap_or(&[]);
        let coords = geo::resolve_coordinates(user.account.location.as_deref(), fields);

        let Some(coords) = coords else {
            if options.require_all_data {
                return Err(AppError::LocationRequired);
            }
            tracing::warn!(%user_id, "No coordinates resolved; skipping environmental data");
            context.last_updated = Utc::now();
            return Ok(context);
        };

        // Weather, forecast and the field-scoped branch settle
        // independently; a failing or slow source never poisons a sibling.
        let (current_weather, forecast, (polygon_id, ndvi, soil)) = tokio::join!(
            self.fetch_optional(
                "weather",
                self.weather.get_current_weather(coords.lat, coords.lon)
            ),
            self.fetch_optional("forecast", self.weather.get_forecast(coords.lat, coords.lon)),
            self.fetch_field_scoped(&user, &options, selection.selected_polygon_id.as_deref()),
        );

        if let Some(weather) = current_weather {
            context.current_weather = Some(weather);
            context.data_completeness.weather = true;
        }
        if let Some(forecast) = forecast {
            context.forecast = Some(forecast);
            context.data_completeness.forecast = true;
        }
        if let Some(ndvi) = ndvi {
            context.ndvi_data = Some(ndvi);
            context.data_completeness.ndvi = true;
        }
        if let Some(soil) = soil {
            context.soil_data = Some(soil);
            context.data_completeness.soil = true;
        }

        // UV after the parallel batch, reusing the resolved polygon id
        if let Some(id) = polygon_id.as_deref() {
            if let Some(uvi) = self
                .fetch_optional("uv", self.satellite.get_current_uvi(id))
                .await
            {
                context.uv_index = Some(uvi);
                context.data_completeness.uv = true;
            }
        }

        context.last_updated = Utc::now();
        Ok(context)
    }

    /// Resolve the monitoring polygon, then fetch NDVI history and the
    /// current soil reading. Resolution must complete before either fetch;
    /// the two fetches settle independently of each other.
    async fn fetch_field_scoped(
        &self,
        user: &UserWithFarm,
        options: &FarmerDataOptions,
        selected_polygon_id: Option<&str>,
    ) -> (Option<String>, Option<Vec<NdviEntry>>, Option<Vec<SoilEntry>>) {
        let resolution = tokio::time::timeout(
            self.fetch_timeout,
            polygon::resolve_polygon_id(&self.satellite, user, selected_polygon_id),
        )
        .await;

        let polygon_id = match resolution {
            Ok(id) => id,
            Err(_) => {
                tracing::warn!(user_id = %user.account.id, "Polygon resolution timed out");
                None
            }
        };

        if !options.include_historical_data {
            return (polygon_id, None, None);
        }

        let Some(id) = polygon_id.as_deref() else {
            return (None, None, None);
        };

        let history_days = options.max_history_days.clamp(1, MAX_HISTORY_DAYS);
        let end = Utc::now();
        let start = end - chrono::Duration::days(history_days as i64);

        let (ndvi, soil) = tokio::join!(
            self.fetch_optional("ndvi", self.satellite.get_ndvi_history(id, start, end)),
            self.fetch_optional("soil", async {
                self.satellite
                    .get_current_soil(id)
                    .await
                    .map(|entry| vec![entry])
            }),
        );

        (polygon_id, ndvi, soil)
    }

    /// Run one provider call under the fetch timeout, mapping any failure
    /// to None. The failure is logged here and recorded only as a false
    /// completeness flag by the caller.
    async fn fetch_optional<T>(
        &self,
        source: &'static str,
        fut: impl std::future::Future<Output = FetchResult<T>> + Send,
    ) -> Option<T> {
        match tokio::time::timeout(self.fetch_timeout, fut).await {
            Ok(Ok(value)) => Some(value),
            Ok(Err(err)) => {
                tracing::warn!(source, error = %err, "Environmental fetch failed");
                None
            }
            Err(_) => {
                tracing::warn!(source, timeout = ?self.fetch_timeout, "Environmental fetch timed out");
                None
            }
        }
    }
}
