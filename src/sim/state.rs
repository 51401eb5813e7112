//! View controller state
//!
//! The only mutable state in the crate: the last clicked epicenter and the
//! selected wave type. Scenes are pulled on demand and rebuilt in full.

use serde::{Deserialize, Serialize};

use super::coord::Coordinate;
use super::scene::{PointMarker, RingOverlay, Scene, city_markers};
use super::wave::{WaveModel, WaveType};
use crate::consts::RING_OPACITY;
use crate::error::SimError;
use crate::settings::Settings;

/// Controller phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewPhase {
    /// No click yet, overlay is empty
    NoEpicenter,
    /// An epicenter has been chosen; no event returns to `NoEpicenter`
    HasEpicenter,
}

/// Owns the epicenter/wave-type pair and assembles scenes
#[derive(Debug, Clone)]
pub struct WaveViewer {
    epicenter: Option<Coordinate>,
    wave_type: WaveType,
    markers: Vec<PointMarker>,
    model: WaveModel,
    ring_opacity: f64,
    /// Bumped for every accepted event
    revision: u64,
}

impl Default for WaveViewer {
    fn default() -> Self {
        Self::new(city_markers(), WaveModel::default())
    }
}

impl WaveViewer {
    /// Create a viewer over a fixed marker set and wave model
    pub fn new(markers: Vec<PointMarker>, model: WaveModel) -> Self {
        Self {
            epicenter: None,
            wave_type: WaveType::default(),
            markers,
            model,
            ring_opacity: RING_OPACITY,
            revision: 0,
        }
    }

    /// Create a viewer from validated settings with the built-in city table
    pub fn from_settings(settings: &Settings) -> Result<Self, SimError> {
        settings.validate()?;
        let mut viewer = Self::new(city_markers(), WaveModel::new(settings.rings)?);
        viewer.wave_type = settings.default_wave_type;
        viewer.ring_opacity = settings.ring_opacity;
        Ok(viewer)
    }

    pub fn phase(&self) -> ViewPhase {
        match self.epicenter {
            Some(_) => ViewPhase::HasEpicenter,
            None => ViewPhase::NoEpicenter,
        }
    }

    pub fn epicenter(&self) -> Option<Coordinate> {
        self.epicenter
    }

    pub fn wave_type(&self) -> WaveType {
        self.wave_type
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace the epicenter with the clicked coordinate
    pub fn on_map_click(&mut self, coord: Coordinate) {
        if self.epicenter.is_none() {
            log::info!("Epicenter set at {}", coord);
        } else {
            log::debug!("Epicenter moved to {}", coord);
        }
        self.epicenter = Some(coord);
        self.revision += 1;
    }

    /// Select a wave type (state-only while there is no epicenter)
    pub fn on_wave_type_selected(&mut self, wave_type: WaveType) {
        log::debug!("Wave type {} -> {}", self.wave_type, wave_type);
        self.wave_type = wave_type;
        self.revision += 1;
    }

    /// Decode a wave-type token and select it; state is untouched on error
    pub fn select_wave_type(&mut self, token: &str) -> Result<(), SimError> {
        let wave_type = token.parse::<WaveType>()?;
        self.on_wave_type_selected(wave_type);
        Ok(())
    }

    /// Build the scene for the current state
    pub fn current_scene(&self) -> Result<Scene, SimError> {
        let rings = match self.epicenter {
            Some(epicenter) => self
                .model
                .compute_rings(epicenter, self.wave_type)?
                .into_iter()
                .map(|sample| RingOverlay::anchored(epicenter, &sample, self.ring_opacity))
                .collect(),
            None => Vec::new(),
        };

        Ok(Scene {
            markers: self.markers.clone(),
            rings,
            wave_type: self.wave_type,
            wave_speed: self.wave_type.speed(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::scene::CITY_COUNT;
    use crate::sim::wave::RingLayout;

    #[test]
    fn test_initial_state() {
        let viewer = WaveViewer::default();
        assert_eq!(viewer.phase(), ViewPhase::NoEpicenter);
        assert_eq!(viewer.wave_type(), WaveType::P);
        assert_eq!(viewer.revision(), 0);

        let scene = viewer.current_scene().unwrap();
        assert_eq!(scene.markers.len(), CITY_COUNT);
        assert!(scene.rings.is_empty());
        assert!(!scene.has_epicenter());
    }

    #[test]
    fn test_first_click_anchors_rings() {
        let mut viewer = WaveViewer::default();
        viewer.on_map_click(Coordinate::new(35.0, 135.0));
        assert_eq!(viewer.phase(), ViewPhase::HasEpicenter);

        let scene = viewer.current_scene().unwrap();
        assert_eq!(scene.rings.len(), 5);
        for ring in &scene.rings {
            assert_eq!(ring.anchor(), Coordinate::new(35.0, 135.0));
        }
    }

    #[test]
    fn test_end_to_end_select_then_click() {
        let mut viewer = WaveViewer::default();
        viewer.select_wave_type("S").unwrap();
        let scene = viewer.current_scene().unwrap();
        assert!(scene.rings.is_empty());
        assert_eq!(scene.wave_type, WaveType::S);

        viewer.on_map_click(Coordinate::new(34.69, 135.20));
        let scene = viewer.current_scene().unwrap();
        let sizes: Vec<f64> = scene.rings.iter().map(|r| r.display_size).collect();
        assert_eq!(sizes, vec![20.0, 40.0, 60.0, 80.0, 100.0]);
        assert!(scene
            .rings
            .iter()
            .all(|r| r.anchor() == Coordinate::new(34.69, 135.20)));
        assert_eq!(scene.wave_speed, 3.5);
    }

    #[test]
    fn test_click_overwrites_epicenter() {
        let mut viewer = WaveViewer::default();
        viewer.on_map_click(Coordinate::new(35.0, 135.0));
        viewer.on_map_click(Coordinate::new(43.0, 141.0));
        assert_eq!(viewer.epicenter(), Some(Coordinate::new(43.0, 141.0)));

        let scene = viewer.current_scene().unwrap();
        assert_eq!(scene.rings.len(), 5);
        assert!(scene
            .rings
            .iter()
            .all(|r| r.anchor() == Coordinate::new(43.0, 141.0)));
    }

    #[test]
    fn test_invalid_wave_type_leaves_state() {
        let mut viewer = WaveViewer::default();
        viewer.select_wave_type("L").unwrap();
        let before = viewer.revision();

        let err = viewer.select_wave_type("X").unwrap_err();
        assert_eq!(err, SimError::InvalidWaveType("X".to_string()));
        assert_eq!(viewer.wave_type(), WaveType::L);
        assert_eq!(viewer.revision(), before);
        assert_eq!(viewer.current_scene().unwrap().wave_type, WaveType::L);
    }

    #[test]
    fn test_scene_idempotent() {
        let mut viewer = WaveViewer::default();
        viewer.on_map_click(Coordinate::new(33.59, 130.40));
        viewer.on_wave_type_selected(WaveType::L);
        assert_eq!(viewer.current_scene().unwrap(), viewer.current_scene().unwrap());
    }

    #[test]
    fn test_wave_type_does_not_change_geometry() {
        let mut viewer = WaveViewer::default();
        viewer.on_map_click(Coordinate::new(35.0, 135.0));
        let p = viewer.current_scene().unwrap();
        viewer.on_wave_type_selected(WaveType::L);
        let l = viewer.current_scene().unwrap();
        assert_eq!(p.rings, l.rings);
        assert_ne!(p.wave_speed, l.wave_speed);
    }

    #[test]
    fn test_markers_fixed_across_events() {
        let mut viewer = WaveViewer::default();
        let initial = viewer.current_scene().unwrap().markers;
        viewer.on_wave_type_selected(WaveType::S);
        viewer.on_map_click(Coordinate::new(26.2, 127.7));
        assert_eq!(viewer.current_scene().unwrap().markers, initial);
    }

    #[test]
    fn test_from_settings() {
        let settings = Settings {
            rings: RingLayout {
                ring_count: 3,
                ..Default::default()
            },
            ring_opacity: 0.5,
            default_wave_type: WaveType::S,
            ..Default::default()
        };
        let mut viewer = WaveViewer::from_settings(&settings).unwrap();
        assert_eq!(viewer.wave_type(), WaveType::S);

        viewer.on_map_click(Coordinate::new(35.0, 135.0));
        let scene = viewer.current_scene().unwrap();
        assert_eq!(scene.rings.len(), 3);
        assert!(scene.rings.iter().all(|r| r.opacity == 0.5));
    }

    #[test]
    fn test_from_settings_rejects_bad_layout() {
        let settings = Settings {
            rings: RingLayout {
                ring_count: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            WaveViewer::from_settings(&settings),
            Err(SimError::Configuration(_))
        ));
    }
}
