//! Validation utilities for the Farm Advisory Platform

/// Validate a coordinate pair is on the globe
pub fn validate_coordinates(lat: f64, lon: f64) -> Result<(), &'static str> {
    if !lat.is_finite() || !lon.is_finite() {
        return Err("Coordinates must be finite numbers");
    }
    if !(-90.0..=90.0).contains(&lat) {
        return Err("Latitude must be between -90 and 90");
    }
    if !(-180.0..=180.0).contains(&lon) {
        return Err("Longitude must be between -180 and 180");
    }
    Ok(())
}

/// Validate an NDVI value is in the index's defined range
pub fn validate_ndvi(value: f64) -> Result<(), &'static str> {
    if !(-1.0..=1.0).contains(&value) {
        return Err("NDVI must be between -1 and 1");
    }
    Ok(())
}

/// Validate farming experience is plausible
pub fn validate_experience_years(years: i32) -> Result<(), &'static str> {
    if !(0..=80).contains(&years) {
        return Err("Experience years must be between 0 and 80");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_validate_coordinates_valid() {
        assert!(validate_coordinates(18.52, 73.85).is_ok());
        assert!(validate_coordinates(-90.0, 180.0).is_ok());
        assert!(validate_coordinates(0.0, 0.0).is_ok());
    }

    #[test]
    fn test_validate_coordinates_out_of_range() {
        assert!(validate_coordinates(90.1, 0.0).is_err());
        assert!(validate_coordinates(-91.0, 0.0).is_err());
        assert!(validate_coordinates(0.0, 180.5).is_err());
        assert!(validate_coordinates(0.0, -181.0).is_err());
    }

    #[test]
    fn test_validate_coordinates_non_finite() {
        assert!(validate_coordinates(f64::NAN, 0.0).is_err());
        assert!(validate_coordinates(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_ndvi_bounds() {
        assert!(validate_ndvi(-1.0).is_ok());
        assert!(validate_ndvi(0.62).is_ok());
        assert!(validate_ndvi(1.0).is_ok());
        assert!(validate_ndvi(1.01).is_err());
        assert!(validate_ndvi(-1.5).is_err());
    }

    #[test]
    fn test_validate_experience_years_bounds() {
        assert!(validate_experience_years(0).is_ok());
        assert!(validate_experience_years(80).is_ok());
        assert!(validate_experience_years(-1).is_err());
        assert!(validate_experience_years(81).is_err());
    }

    proptest! {
        #[test]
        fn test_coordinates_in_range_always_valid(
            lat in -90.0f64..=90.0,
            lon in -180.0f64..=180.0,
        ) {
            prop_assert!(validate_coordinates(lat, lon).is_ok());
        }
    }
}
