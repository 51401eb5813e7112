//! Inbound events from the rendering surface
//!
//! Events are decoded and validated here, at the boundary. A rejected event
//! never reaches the viewer state.

use serde::{Deserialize, Serialize};

use super::coord::Coordinate;
use super::state::WaveViewer;
use crate::error::SimError;

/// A single input event (one JSON object per event on the wire)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViewEvent {
    /// The map was clicked at a geographic position
    MapClicked { lat: f64, lon: f64 },
    /// A wave-type control changed; `value` is the raw token
    WaveTypeChanged { value: String },
}

impl ViewEvent {
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        serde_json::from_str(json).map_err(|e| SimError::MalformedEvent(e.to_string()))
    }
}

/// Apply one event to the viewer
pub fn apply_event(viewer: &mut WaveViewer, event: &ViewEvent) -> Result<(), SimError> {
    match event {
        ViewEvent::MapClicked { lat, lon } => {
            let coord = Coordinate::from_input(*lat, *lon)?;
            viewer.on_map_click(coord);
        }
        ViewEvent::WaveTypeChanged { value } => viewer.select_wave_type(value)?,
    }
    Ok(())
}
