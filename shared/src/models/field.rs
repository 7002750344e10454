//! Farm and field boundary models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::FarmerProfile;

/// A farm registered by a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Farm {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// A field within a farm, bounded by a GeoJSON polygon drawn on the map
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FarmField {
    pub id: Uuid,
    pub farm_id: Uuid,
    pub name: String,
    /// Raw GeoJSON geometry as stored; parse with [`FieldGeometry`]
    pub boundary: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

impl FarmField {
    /// Parse the stored boundary, returning None for anything that is not
    /// a well-formed GeoJSON geometry this platform understands.
    pub fn geometry(&self) -> Option<FieldGeometry> {
        serde_json::from_value(self.boundary.clone()).ok()
    }
}

/// GeoJSON geometries accepted for field boundaries.
///
/// Coordinates follow GeoJSON order: `[longitude, latitude]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum FieldGeometry {
    Polygon { coordinates: Vec<Vec<[f64; 2]>> },
}

impl FieldGeometry {
    /// The outer ring of a polygon, if present and non-empty
    pub fn outer_ring(&self) -> Option<&[[f64; 2]]> {
        match self {
            FieldGeometry::Polygon { coordinates } => coordinates
                .first()
                .map(|ring| ring.as_slice())
                .filter(|ring| !ring.is_empty()),
        }
    }
}

/// A user's account record as read alongside the profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FarmerAccount {
    pub id: Uuid,
    pub name: String,
    /// Free-text location, optionally in the form `"<pincode> (<lat>,<lng>)"`
    pub location: Option<String>,
}

/// A farm with its fields, as loaded for aggregation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FarmWithFields {
    #[serde(flatten)]
    pub farm: Farm,
    pub fields: Vec<FarmField>,
}

/// The full read-model for one user: account, profile and farms
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserWithFarm {
    pub account: FarmerAccount,
    pub profile: Option<FarmerProfile>,
    pub farms: Vec<FarmWithFields>,
}

impl UserWithFarm {
    /// First field of the first farm, the default subject for
    /// field-scoped queries
    pub fn first_field(&self) -> Option<&FarmField> {
        self.farms.first().and_then(|farm| farm.fields.first())
    }
}
