//! Coordinate resolution tests: location-string parsing, field centroids
//! and the precedence between them.

use chrono::Utc;
use proptest::prelude::*;
use serde_json::json;
use uuid::Uuid;

use farm_advisory_backend::services::geo;
use shared::FarmField;

fn field_with_boundary(boundary: serde_json::Value) -> FarmField {
    FarmField {
        id: Uuid::new_v4(),
        farm_id: Uuid::new_v4(),
        name: "North field".to_string(),
        boundary,
        created_at: Utc::now(),
    }
}

fn square_field() -> FarmField {
    field_with_boundary(json!({
        "type": "Polygon",
        "coordinates": [[[0.0, 0.0], [0.0, 2.0], [2.0, 2.0], [2.0, 0.0], [0.0, 0.0]]]
    }))
}

#[test]
fn parses_coordinates_from_location_string() {
    let coords = geo::parse_location_string("411001 (18.52,73.85)").unwrap();
    assert_eq!(coords.lat, 18.52);
    assert_eq!(coords.lon, 73.85);
}

#[test]
fn parses_coordinates_with_space_after_comma() {
    let coords = geo::parse_location_string("(51.5, -0.12)").unwrap();
    assert_eq!(coords.lat, 51.5);
    assert_eq!(coords.lon, -0.12);
}

#[test]
fn parses_negative_and_integer_coordinates() {
    let coords = geo::parse_location_string("somewhere (-33,151)").unwrap();
    assert_eq!(coords.lat, -33.0);
    assert_eq!(coords.lon, 151.0);
}

#[test]
fn rejects_location_without_coordinate_pair() {
    assert!(geo::parse_location_string("Pune, Maharashtra").is_none());
    assert!(geo::parse_location_string("411001").is_none());
    assert!(geo::parse_location_string("").is_none());
}

#[test]
fn rejects_out_of_range_coordinates() {
    assert!(geo::parse_location_string("(95.0,73.85)").is_none());
    assert!(geo::parse_location_string("(18.52,190.0)").is_none());
}

#[test]
fn location_string_wins_over_field_geometry() {
    let fields = vec![square_field()];
    let coords = geo::resolve_coordinates(Some("411001 (18.52,73.85)"), &fields).unwrap();
    assert_eq!(coords.lat, 18.52);
    assert_eq!(coords.lon, 73.85);
}

#[test]
fn unparseable_location_falls_back_to_centroid() {
    let fields = vec![square_field()];
    let coords = geo::resolve_coordinates(Some("Pune, Maharashtra"), &fields).unwrap();
    assert!((coords.lat - 0.8).abs() < 1e-9);
    assert!((coords.lon - 0.8).abs() < 1e-9);
}

// The centroid is the mean over every listed point, counting the closed
// ring's duplicated final vertex. Downstream consumers are anchored to
// these exact values.
#[test]
fn closed_square_centroid_counts_duplicated_vertex() {
    let coords = geo::field_centroid(&square_field()).unwrap();
    assert!((coords.lat - 0.8).abs() < 1e-9);
    assert!((coords.lon - 0.8).abs() < 1e-9);
}

#[test]
fn centroid_of_missing_or_malformed_boundary_is_none() {
    assert!(geo::field_centroid(&field_with_boundary(json!(null))).is_none());
    assert!(geo::field_centroid(&field_with_boundary(json!({"type": "Point"}))).is_none());
    assert!(geo::field_centroid(&field_with_boundary(json!({
        "type": "Polygon",
        "coordinates": []
    })))
    .is_none());
}

#[test]
fn centroid_requires_at_least_three_points() {
    let degenerate = field_with_boundary(json!({
        "type": "Polygon",
        "coordinates": [[[0.0, 0.0], [1.0, 1.0]]]
    }));
    assert!(geo::field_centroid(&degenerate).is_none());
}

#[test]
fn no_location_and_no_fields_resolves_to_none() {
    assert!(geo::resolve_coordinates(None, &[]).is_none());
    assert!(geo::resolve_coordinates(Some("no coords here"), &[]).is_none());
}

#[test]
fn only_the_first_field_is_consulted() {
    let far_field = field_with_boundary(json!({
        "type": "Polygon",
        "coordinates": [[[100.0, 40.0], [100.0, 42.0], [102.0, 42.0], [100.0, 40.0]]]
    }));
    let fields = vec![square_field(), far_field];
    let coords = geo::resolve_coordinates(None, &fields).unwrap();
    assert!(coords.lat < 1.0 && coords.lon < 1.0);
}

proptest! {
    #[test]
    fn formatted_coordinates_round_trip(
        lat in -89.0f64..89.0,
        lon in -179.0f64..179.0,
    ) {
        let location = format!("411001 ({:.4},{:.4})", lat, lon);
        let coords = geo::parse_location_string(&location).unwrap();
        prop_assert!((coords.lat - lat).abs() < 1e-3);
        prop_assert!((coords.lon - lon).abs() < 1e-3);
    }

    #[test]
    fn centroid_stays_inside_bounding_box(
        points in proptest::collection::vec((-50.0f64..50.0, -50.0f64..50.0), 3..8),
    ) {
        let mut ring: Vec<[f64; 2]> = points.iter().map(|&(lon, lat)| [lon, lat]).collect();
        ring.push(ring[0]);

        let field = field_with_boundary(json!({
            "type": "Polygon",
            "coordinates": [ring]
        }));
        let coords = geo::field_centroid(&field).unwrap();

        let (min_lat, max_lat) = points.iter().fold((f64::MAX, f64::MIN), |(lo, hi), &(_, lat)| {
            (lo.min(lat), hi.max(lat))
        });
        let (min_lon, max_lon) = points.iter().fold((f64::MAX, f64::MIN), |(lo, hi), &(lon, _)| {
            (lo.min(lon), hi.max(lon))
        });

        prop_assert!(coords.lat >= min_lat - 1e-9 && coords.lat <= max_lat + 1e-9);
        prop_assert!(coords.lon >= min_lon - 1e-9 && coords.lon <= max_lon + 1e-9);
    }
}
