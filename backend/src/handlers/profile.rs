//! HTTP handlers for farmer profile endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use shared::{FarmerProfile, UpdateFarmerProfileInput};

use crate::error::{AppError, AppResult};
use crate::services::profile::ProfileStore;
use crate::AppState;

/// Get a farmer's profile
pub async fn get_farmer_profile(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> AppResult<Json<FarmerProfile>> {
    let user = state
        .store
        .get_user_with_profile_and_fields(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {}", user_id)))?;

    let profile = user
        .profile
        .ok_or_else(|| AppError::NotFound(format!("Profile for user {}", user_id)))?;

    Ok(Json(profile))
}

/// Create or update a farmer's profile.
///
/// First write completes onboarding; later writes merge only the supplied
/// fields. Replaying the same payload leaves the profile unchanged apart
/// from `updated_at`.
pub async fn update_farmer_profile(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(input): Json<UpdateFarmerProfileInput>,
) -> AppResult<Json<FarmerProfile>> {
    let profile = state.store.upsert_farmer_profile(user_id, input).await?;
    Ok(Json(profile))
}
