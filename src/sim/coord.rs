//! Geographic coordinates in decimal degrees

use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::normalize_longitude;

/// A (latitude, longitude) pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }

    /// Validate a coordinate arriving from the rendering surface.
    ///
    /// Longitude wraps into [-180, 180); latitude must already be in range.
    pub fn from_input(lat: f64, lon: f64) -> Result<Self, SimError> {
        if !lat.is_finite() || !lon.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(SimError::InvalidCoordinate { lat, lon });
        }
        Ok(Self::new(lat, normalize_longitude(lon)))
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.4}, {:.4})", self.lat, self.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_input_accepts_plain_coordinate() {
        let c = Coordinate::from_input(34.69, 135.20).unwrap();
        assert_eq!(c, Coordinate::new(34.69, 135.20));
    }

    #[test]
    fn test_from_input_wraps_longitude() {
        let c = Coordinate::from_input(10.0, 200.0).unwrap();
        assert!((c.lon - (-160.0)).abs() < 1e-9);
    }

    #[test]
    fn test_from_input_rejects_bad_values() {
        assert!(matches!(
            Coordinate::from_input(91.0, 0.0),
            Err(SimError::InvalidCoordinate { .. })
        ));
        assert!(Coordinate::from_input(f64::NAN, 0.0).is_err());
        assert!(Coordinate::from_input(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Coordinate::new(35.0, 135.0).to_string(), "(35.0000, 135.0000)");
    }
}
