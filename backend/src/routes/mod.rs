//! Route definitions for the Farm Advisory Platform

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Farmer-scoped routes
        .nest("/farmers/:user_id", farmer_routes())
}

/// Per-farmer routes: profile, aggregated context, advice
fn farmer_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/profile",
            get(handlers::get_farmer_profile).put(handlers::update_farmer_profile),
        )
        .route("/context", get(handlers::get_farmer_context))
        .route("/advice", post(handlers::ask_advice))
}
