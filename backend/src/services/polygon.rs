//! Remote monitoring-polygon resolution
//!
//! The local FarmField and the provider-side polygon share no foreign key;
//! resolution is a three-tier fallback, each tier short-circuiting:
//!
//! 1. an explicit id supplied by the caller (a field selected in the UI)
//! 2. a name-matched polygon among those already registered remotely
//! 3. a polygon newly created from the field's boundary
//!
//! Remote errors degrade to None; downstream fetchers treat None as
//! "skip field-scoped data".

use shared::{PolygonPoint, UserWithFarm};

use crate::external::SatelliteProvider;

pub async fn resolve_polygon_id<P: SatelliteProvider>(
    satellite: &P,
    user: &UserWithFarm,
    selected_polygon_id: Option<&str>,
) -> Option<String> {
    // Tier 1: caller-selected id is authoritative, no remote lookup
    if let Some(id) = selected_polygon_id {
        return Some(id.to_string());
    }

    let field = user.first_field()?;

    // Tier 2: substring match against the field name or the farmer's name
    let polygons = match satellite.list_polygons().await {
        Ok(polygons) => polygons,
        Err(err) => {
            tracing::warn!(user_id = %user.account.id, error = %err, "Remote polygon listing failed");
            return None;
        }
    };

    if let Some(matched) = polygons
        .iter()
        .find(|p| p.name.contains(&field.name) || p.name.contains(&user.account.name))
    {
        return Some(matched.id.clone());
    }

    // Tier 3: register a new polygon from the field boundary
    let geometry = field.geometry()?;
    let ring = geometry.outer_ring()?;
    if ring.len() < 3 {
        return None;
    }

    let points: Vec<PolygonPoint> = ring
        .iter()
        .map(|p| PolygonPoint { lat: p[1], lng: p[0] })
        .collect();

    match satellite.create_polygon(&field.name, points).await {
        Ok(created) => {
            tracing::info!(user_id = %user.account.id, polygon_id = %created.id, "Registered new monitoring polygon");
            Some(created.id)
        }
        Err(err) => {
            tracing::warn!(user_id = %user.account.id, error = %err, "Remote polygon creation failed");
            None
        }
    }
}
