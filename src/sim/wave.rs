//! Wave model: wave types and wavefront ring sampling
//!
//! Rings are evenly spaced samples of a bounded display region, not a
//! time-stepped propagation. The wave speed is looked up but does not change
//! the ring geometry; it is only reported alongside the scene.

use serde::{Deserialize, Serialize};

use super::coord::Coordinate;
use crate::consts::*;
use crate::error::SimError;

/// Seismic wave classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WaveType {
    /// Primary (compressional) waves
    #[default]
    P,
    /// Secondary (shear) waves
    S,
    /// Love (surface) waves
    L,
}

impl WaveType {
    pub const ALL: [WaveType; 3] = [WaveType::P, WaveType::S, WaveType::L];

    /// Propagation speed (abstract distance units per time unit)
    pub fn speed(&self) -> f64 {
        match self {
            WaveType::P => 6.0,
            WaveType::S => 3.5,
            WaveType::L => 2.0,
        }
    }

    /// Single-letter token used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            WaveType::P => "P",
            WaveType::S => "S",
            WaveType::L => "L",
        }
    }

    /// Human-readable label for selection controls
    pub fn label(&self) -> &'static str {
        match self {
            WaveType::P => "P waves",
            WaveType::S => "S waves",
            WaveType::L => "L waves",
        }
    }
}

impl std::str::FromStr for WaveType {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "P" => Ok(WaveType::P),
            "S" => Ok(WaveType::S),
            "L" => Ok(WaveType::L),
            _ => Err(SimError::InvalidWaveType(s.to_string())),
        }
    }
}

impl std::fmt::Display for WaveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One wavefront sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingSample {
    /// Distance from the epicenter (abstract units)
    pub radius: f64,
    /// Display weight, grows with radius
    pub weight: f64,
}

/// How the display region is partitioned into rings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingLayout {
    pub max_radius: f64,
    pub ring_count: usize,
    pub marker_size_per_unit: f64,
}

impl Default for RingLayout {
    fn default() -> Self {
        Self {
            max_radius: MAX_RADIUS,
            ring_count: RING_COUNT,
            marker_size_per_unit: MARKER_SIZE_PER_UNIT,
        }
    }
}

impl RingLayout {
    pub fn validate(&self) -> Result<(), SimError> {
        if self.ring_count == 0 || self.ring_count > MAX_RING_COUNT {
            return Err(SimError::Configuration(format!(
                "ring_count must be within [1, {}], got {}",
                MAX_RING_COUNT, self.ring_count
            )));
        }
        if !self.max_radius.is_finite() || self.max_radius <= 0.0 {
            return Err(SimError::Configuration(format!(
                "max_radius must be finite and positive, got {}",
                self.max_radius
            )));
        }
        if !self.marker_size_per_unit.is_finite() || self.marker_size_per_unit <= 0.0 {
            return Err(SimError::Configuration(format!(
                "marker_size_per_unit must be finite and positive, got {}",
                self.marker_size_per_unit
            )));
        }

        // Innermost ring and outermost weight bound every sample
        let spacing = self.max_radius / self.ring_count as f64;
        if !spacing.is_normal() || !(spacing * self.marker_size_per_unit).is_normal() {
            return Err(SimError::Configuration(format!(
                "ring spacing {} is too small to display",
                spacing
            )));
        }
        if !(self.max_radius * self.marker_size_per_unit).is_finite() {
            return Err(SimError::Configuration(format!(
                "max_radius {} * marker_size_per_unit {} overflows",
                self.max_radius, self.marker_size_per_unit
            )));
        }
        Ok(())
    }

    /// Radius of ring `index` (1-based)
    #[inline]
    pub fn radius_at(&self, index: usize) -> f64 {
        self.max_radius * (index as f64 / self.ring_count as f64)
    }
}

/// Stateless ring generator over a fixed layout
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WaveModel {
    layout: RingLayout,
}

impl WaveModel {
    /// Build a model, rejecting layouts that cannot produce rings
    pub fn new(layout: RingLayout) -> Result<Self, SimError> {
        layout.validate()?;
        Ok(Self { layout })
    }

    pub fn layout(&self) -> &RingLayout {
        &self.layout
    }

    /// Compute the wavefront rings around `epicenter` for `wave_type`.
    ///
    /// Returns exactly `ring_count` samples with strictly increasing radius.
    /// The result depends only on the layout; the epicenter anchors the
    /// overlay and the wave type selects the reported speed.
    pub fn compute_rings(
        &self,
        epicenter: Coordinate,
        wave_type: WaveType,
    ) -> Result<Vec<RingSample>, SimError> {
        self.layout.validate()?;

        let speed = wave_type.speed();
        log::trace!(
            "computing {} rings at {} for {} (speed {})",
            self.layout.ring_count,
            epicenter,
            wave_type,
            speed
        );

        let rings = (1..=self.layout.ring_count)
            .map(|i| {
                let radius = self.layout.radius_at(i);
                RingSample {
                    radius,
                    weight: radius * self.layout.marker_size_per_unit,
                }
            })
            .collect();

        Ok(rings)
    }
}

/// Compute rings with the default layout
pub fn compute_rings(
    epicenter: Coordinate,
    wave_type: WaveType,
) -> Result<Vec<RingSample>, SimError> {
    WaveModel::default().compute_rings(epicenter, wave_type)
}
