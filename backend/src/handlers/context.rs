//! HTTP handler for the aggregated farmer context endpoint

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use shared::AggregatedFarmerContext;

use crate::error::AppResult;
use crate::services::aggregation::{FarmerDataOptions, SelectionContext};
use crate::AppState;

/// Query parameters controlling context aggregation
#[derive(Debug, Deserialize)]
pub struct ContextQuery {
    pub include_historical_data: Option<bool>,
    pub max_history_days: Option<u32>,
    pub require_all_data: Option<bool>,
    pub selected_polygon_id: Option<String>,
}

/// Get the aggregated context for a farmer
pub async fn get_farmer_context(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Query(query): Query<ContextQuery>,
) -> AppResult<Json<AggregatedFarmerContext>> {
    let aggregation = &state.config.aggregation;
    let options = FarmerDataOptions {
        include_historical_data: query.include_historical_data.unwrap_or(true),
        // Operators may cap the window below the service's hard limit
        max_history_days: query
            .max_history_days
            .unwrap_or(aggregation.default_history_days)
            .min(aggregation.max_history_days),
        require_all_data: query.require_all_data.unwrap_or(false),
    };
    let selection = SelectionContext {
        selected_polygon_id: query.selected_polygon_id,
    };

    let context = state
        .advisory
        .farmer_data()
        .get_farmer_data(user_id, options, selection)
        .await?;

    Ok(Json(context))
}
