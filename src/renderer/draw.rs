//! Screen-space draw list for a scene

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::viewport::MapViewport;
use crate::consts::*;
use crate::error::SimError;
use crate::sim::Scene;

/// Where a marker label sits relative to its dot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelAnchor {
    #[default]
    TopRight,
    TopLeft,
    BottomRight,
    BottomLeft,
}

/// Colors and sizes the host surface paints with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawStyle {
    /// City marker diameter in pixels
    pub city_marker_size: f64,
    /// CSS color of city markers
    pub city_marker_color: String,
    pub label_anchor: LabelAnchor,
    /// CSS color of wavefront discs
    pub ring_color: String,
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self {
            city_marker_size: CITY_MARKER_SIZE,
            city_marker_color: CITY_MARKER_COLOR.to_string(),
            label_anchor: LabelAnchor::TopRight,
            ring_color: RING_COLOR.to_string(),
        }
    }
}

impl DrawStyle {
    pub fn validate(&self) -> Result<(), SimError> {
        if !self.city_marker_size.is_finite() || self.city_marker_size <= 0.0 {
            return Err(SimError::Configuration(format!(
                "city_marker_size must be finite and positive, got {}",
                self.city_marker_size
            )));
        }
        if self.city_marker_color.trim().is_empty() || self.ring_color.trim().is_empty() {
            return Err(SimError::Configuration("colors must not be empty".to_string()));
        }
        Ok(())
    }
}

/// A single primitive for the rendering surface
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    /// Labelled city dot
    Marker {
        pos: DVec2,
        radius: f64,
        color: String,
        label: String,
        label_anchor: LabelAnchor,
    },
    /// Translucent wavefront disc
    Disc {
        pos: DVec2,
        radius: f64,
        color: String,
        opacity: f64,
    },
}

/// Primitives in paint order (markers first, rings innermost to outermost)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn to_json(&self) -> Result<String, SimError> {
        serde_json::to_string(self).map_err(|e| SimError::Serialization(e.to_string()))
    }
}

/// Project a scene through the viewport.
///
/// Marker and ring sizes are diameters in pixels, independent of zoom.
pub fn build_draw_list(scene: &Scene, viewport: &MapViewport, style: &DrawStyle) -> DrawList {
    let mut commands = Vec::with_capacity(scene.markers.len() + scene.rings.len());

    for marker in &scene.markers {
        commands.push(DrawCommand::Marker {
            pos: viewport.project(marker.coordinate()),
            radius: style.city_marker_size / 2.0,
            color: style.city_marker_color.clone(),
            label: marker.label.clone(),
            label_anchor: style.label_anchor,
        });
    }

    for ring in &scene.rings {
        commands.push(DrawCommand::Disc {
            pos: viewport.project(ring.anchor()),
            radius: ring.display_size / 2.0,
            color: style.ring_color.clone(),
            opacity: ring.opacity,
        });
    }

    DrawList { commands }
}
