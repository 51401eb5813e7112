//! Renderable scene payload and the fixed city table

use serde::{Deserialize, Serialize};

use super::coord::Coordinate;
use super::wave::{RingSample, WaveType};
use crate::error::SimError;

/// Number of fixed city markers
pub const CITY_COUNT: usize = 10;

/// Fixed city table (name, lat, lon), loaded once at startup
pub const CITIES: [(&str, f64, f64); CITY_COUNT] = [
    ("Tokyo", 35.6895, 139.6917),
    ("Osaka", 34.6937, 135.5023),
    ("Nagoya", 35.1815, 136.9066),
    ("Sapporo", 43.0621, 141.3544),
    ("Fukuoka", 33.5902, 130.4017),
    ("Kobe", 34.6901, 135.1956),
    ("Kyoto", 35.0116, 135.7681),
    ("Sendai", 38.2682, 140.8694),
    ("Hiroshima", 34.3853, 132.4553),
    ("Naha", 26.2124, 127.6809),
];

/// A labelled point marker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointMarker {
    pub lat: f64,
    pub lon: f64,
    pub label: String,
}

impl PointMarker {
    pub fn new(label: impl Into<String>, at: Coordinate) -> Self {
        Self {
            lat: at.lat,
            lon: at.lon,
            label: label.into(),
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lon)
    }
}

/// Build the static city markers
pub fn city_markers() -> Vec<PointMarker> {
    CITIES
        .iter()
        .map(|&(name, lat, lon)| PointMarker::new(name, Coordinate::new(lat, lon)))
        .collect()
}

/// A ring overlay anchored at the epicenter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingOverlay {
    pub lat: f64,
    pub lon: f64,
    pub display_size: f64,
    pub opacity: f64,
}

impl RingOverlay {
    pub fn anchored(epicenter: Coordinate, sample: &RingSample, opacity: f64) -> Self {
        Self {
            lat: epicenter.lat,
            lon: epicenter.lon,
            display_size: sample.weight,
            opacity,
        }
    }

    pub fn anchor(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lon)
    }
}

/// Complete render payload, regenerated in full on every recomputation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Static city markers
    pub markers: Vec<PointMarker>,
    /// Wavefront rings, innermost first (empty until an epicenter exists)
    pub rings: Vec<RingOverlay>,
    /// Selected wave type
    pub wave_type: WaveType,
    /// Speed of the selected wave type (reported only, not applied to radii)
    pub wave_speed: f64,
}

impl Scene {
    pub fn to_json(&self) -> Result<String, SimError> {
        serde_json::to_string(self).map_err(|e| SimError::Serialization(e.to_string()))
    }

    pub fn has_epicenter(&self) -> bool {
        !self.rings.is_empty()
    }
}
