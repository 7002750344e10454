//! Coordinate resolution for a farmer
//!
//! Prefers an explicit coordinate pair embedded in the stored location
//! string, falling back to the centroid of the first registered field
//! boundary. A None result is meaningful downstream: it disables all
//! environmental fetches.

use regex::Regex;

use shared::{validate_coordinates, FarmField, GpsCoordinates};

/// Resolve a usable coordinate pair for a farmer.
///
/// An explicit `(lat,lng)` in the location string is authoritative and
/// short-circuits: field geometry is never consulted when it parses.
pub fn resolve_coordinates(
    location: Option<&str>,
    fields: &[FarmField],
) -> Option<GpsCoordinates> {
    if let Some(coords) = location.and_then(parse_location_string) {
        return Some(coords);
    }

    fields.first().and_then(field_centroid)
}

/// Parse a coordinate pair out of a free-text location string, matching
/// the `"<pincode> (<lat>,<lng>)"` convention
pub fn parse_location_string(location: &str) -> Option<GpsCoordinates> {
    let pattern =
        Regex::new(r"\((-?\d+\.?\d*),\s*(-?\d+\.?\d*)\)").expect("valid coordinate regex");
    let caps = pattern.captures(location)?;
    let lat: f64 = caps.get(1)?.as_str().parse().ok()?;
    let lon: f64 = caps.get(2)?.as_str().parse().ok()?;
    validate_coordinates(lat, lon).ok()?;
    Some(GpsCoordinates::new(lat, lon))
}

/// Centroid of a field's outer ring as the arithmetic mean of every listed
/// point. A closed ring's duplicated final vertex is counted; downstream
/// consumers are anchored to that value.
pub fn field_centroid(field: &FarmField) -> Option<GpsCoordinates> {
    let geometry = field.geometry()?;
    let ring = geometry.outer_ring()?;
    if ring.len() < 3 {
        return None;
    }

    let n = ring.len() as f64;
    let (sum_lon, sum_lat) = ring
        .iter()
        .fold((0.0, 0.0), |(lon, lat), p| (lon + p[0], lat + p[1]));

    let coords = GpsCoordinates::new(sum_lat / n, sum_lon / n);
    validate_coordinates(coords.lat, coords.lon).ok()?;
    Some(coords)
}
