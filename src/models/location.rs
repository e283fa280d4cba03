//! Geographic coordinates for weather lookups

use serde::Serialize;

use crate::{FishTripError, Result};

/// A validated latitude/longitude pair
#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct Coordinates {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl Coordinates {
    /// Create coordinates, rejecting values outside the valid ranges
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(FishTripError::validation(format!(
                "Latitude must be between -90 and 90, got: {latitude}"
            )));
        }

        if !(-180.0..=180.0).contains(&longitude) {
            return Err(FishTripError::validation(format!(
                "Longitude must be between -180 and 180, got: {longitude}"
            )));
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Format location as coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_zero_is_a_valid_coordinate() {
        let coords = Coordinates::new(0.0, 0.0).unwrap();
        assert_eq!(coords.format_coordinates(), "0.0000, 0.0000");
    }

    #[rstest]
    #[case(91.0, 8.0)]
    #[case(-91.0, 8.0)]
    #[case(46.0, 181.0)]
    #[case(46.0, -181.0)]
    #[case(f64::NAN, 0.0)]
    fn test_out_of_range_rejected(#[case] lat: f64, #[case] lon: f64) {
        let err = Coordinates::new(lat, lon).unwrap_err();
        assert!(matches!(err, FishTripError::Validation { .. }));
    }
}
