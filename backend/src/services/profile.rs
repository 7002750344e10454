//! Farmer profile store: the read side the aggregation pipeline depends on
//! and the write side of onboarding.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use shared::{
    Farm, FarmField, FarmWithFields, FarmerAccount, FarmerProfile, Language,
    UpdateFarmerProfileInput, UserWithFarm,
};

use crate::error::AppResult;

/// Storage capability consumed by the aggregation orchestrator
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Load a user with their profile and every farm's fields, or None if
    /// the user does not exist
    async fn get_user_with_profile_and_fields(
        &self,
        user_id: Uuid,
    ) -> AppResult<Option<UserWithFarm>>;

    /// Upsert the farmer profile. Creates the row if absent (forcing
    /// onboarding complete), otherwise merges the supplied fields and
    /// refreshes `updated_at`. Trusts its input; the form layer validates.
    async fn upsert_farmer_profile(
        &self,
        user_id: Uuid,
        input: UpdateFarmerProfileInput,
    ) -> AppResult<FarmerProfile>;
}

/// PostgreSQL-backed profile store
#[derive(Clone)]
pub struct PgProfileStore {
    db: PgPool,
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: Uuid,
    name: String,
    location: Option<String>,
}

#[derive(Debug, FromRow)]
struct FarmerProfileRow {
    id: Uuid,
    user_id: Uuid,
    crop: String,
    soil_type: Option<String>,
    sowing_date: Option<NaiveDate>,
    has_storage: bool,
    storage_capacity_quintals: Option<Decimal>,
    irrigation_method: Option<String>,
    experience_years: Option<i32>,
    farm_size_acres: Option<Decimal>,
    previous_yield_quintals: Option<Decimal>,
    preferred_language: String,
    is_onboarding_complete: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<FarmerProfileRow> for FarmerProfile {
    fn from(row: FarmerProfileRow) -> Self {
        FarmerProfile {
            id: row.id,
            user_id: row.user_id,
            crop: row.crop,
            soil_type: row.soil_type,
            sowing_date: row.sowing_date,
            has_storage: row.has_storage,
            storage_capacity_quintals: row.storage_capacity_quintals,
            // Unknown stored values are treated as unset rather than fatal
            irrigation_method: row.irrigation_method.and_then(|m| m.parse().ok()),
            experience_years: row.experience_years,
            farm_size_acres: row.farm_size_acres,
            previous_yield_quintals: row.previous_yield_quintals,
            preferred_language: row.preferred_language.parse().unwrap_or_default(),
            is_onboarding_complete: row.is_onboarding_complete,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, FromRow)]
struct FarmRow {
    id: Uuid,
    user_id: Uuid,
    name: String,
    created_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
struct FarmFieldRow {
    id: Uuid,
    farm_id: Uuid,
    name: String,
    boundary: serde_json::Value,
    created_at: DateTime<Utc>,
}

impl From<FarmFieldRow> for FarmField {
    fn from(row: FarmFieldRow) -> Self {
        FarmField {
            id: row.id,
            farm_id: row.farm_id,
            name: row.name,
            boundary: row.boundary,
            created_at: row.created_at,
        }
    }
}

impl PgProfileStore {
    /// Create a new PgProfileStore instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileStore for PgProfileStore {
    async fn get_user_with_profile_and_fields(
        &self,
        user_id: Uuid,
    ) -> AppResult<Option<UserWithFarm>> {
        let user = sqlx::query_as::<_, UserRow>(
            "SELECT id, name, location FROM users WHERE id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?;

        let Some(user) = user else {
            return Ok(None);
        };

        let profile = sqlx::query_as::<_, FarmerProfileRow>(
            r#"
            SELECT id, user_id, crop, soil_type, sowing_date, has_storage,
                   storage_capacity_quintals, irrigation_method, experience_years,
                   farm_size_acres, previous_yield_quintals, preferred_language,
                   is_onboarding_complete, created_at, updated_at
            FROM farmer_profiles
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?;

        let farm_rows = sqlx::query_as::<_, FarmRow>(
            "SELECT id, user_id, name, created_at FROM farms WHERE user_id = $1 ORDER BY created_at ASC",
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await?;

        let mut farms = Vec::with_capacity(farm_rows.len());
        for farm in farm_rows {
            let fields = sqlx::query_as::<_, FarmFieldRow>(
                r#"
                SELECT id, farm_id, name, boundary, created_at
                FROM farm_fields
                WHERE farm_id = $1
                ORDER BY created_at ASC
                "#,
            )
            .bind(farm.id)
            .fetch_all(&self.db)
            .await?;

            farms.push(FarmWithFields {
                farm: Farm {
                    id: farm.id,
                    user_id: farm.user_id,
                    name: farm.name,
                    created_at: farm.created_at,
                },
                fields: fields.into_iter().map(FarmField::from).collect(),
            });
        }

        Ok(Some(UserWithFarm {
            account: FarmerAccount {
                id: user.id,
                name: user.name,
                location: user.location,
            },
            profile: profile.map(FarmerProfile::from),
            farms,
        }))
    }

    async fn upsert_farmer_profile(
        &self,
        user_id: Uuid,
        input: UpdateFarmerProfileInput,
    ) -> AppResult<FarmerProfile> {
        let irrigation = input.irrigation_method.map(|m| m.as_str().to_string());
        let language = input
            .preferred_language
            .as_ref()
            .map(|l| l.code().to_string());

        let row = sqlx::query_as::<_, FarmerProfileRow>(
            r#"
            INSERT INTO farmer_profiles (
                user_id, crop, soil_type, sowing_date, has_storage,
                storage_capacity_quintals, irrigation_method, experience_years,
                farm_size_acres, previous_yield_quintals, preferred_language,
                is_onboarding_complete
            )
            VALUES ($1, COALESCE($2, ''), $3, $4, COALESCE($5, false),
                    $6, $7, $8, $9, $10, COALESCE($11, 'en'), true)
            ON CONFLICT (user_id) DO UPDATE SET
                crop = COALESCE($2, farmer_profiles.crop),
                soil_type = COALESCE($3, farmer_profiles.soil_type),
                sowing_date = COALESCE($4, farmer_profiles.sowing_date),
                has_storage = COALESCE($5, farmer_profiles.has_storage),
                storage_capacity_quintals = COALESCE($6, farmer_profiles.storage_capacity_quintals),
                irrigation_method = COALESCE($7, farmer_profiles.irrigation_method),
                experience_years = COALESCE($8, farmer_profiles.experience_years),
                farm_size_acres = COALESCE($9, farmer_profiles.farm_size_acres),
                previous_yield_quintals = COALESCE($10, farmer_profiles.previous_yield_quintals),
                preferred_language = COALESCE($11, farmer_profiles.preferred_language),
                is_onboarding_complete = COALESCE($12, farmer_profiles.is_onboarding_complete),
                updated_at = NOW()
            RETURNING id, user_id, crop, soil_type, sowing_date, has_storage,
                      storage_capacity_quintals, irrigation_method, experience_years,
                      farm_size_acres, previous_yield_quintals, preferred_language,
                      is_onboarding_complete, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(&input.crop)
        .bind(&input.soil_type)
        .bind(input.sowing_date)
        .bind(input.has_storage)
        .bind(input.storage_capacity_quintals)
        .bind(&irrigation)
        .bind(input.experience_years)
        .bind(input.farm_size_acres)
        .bind(input.previous_yield_quintals)
        .bind(&language)
        .bind(input.is_onboarding_complete)
        .fetch_one(&self.db)
        .await?;

        Ok(row.into())
    }
}
