//! Viewer settings
//!
//! Ring layout, overlay style and the initial map view. Missing fields fall
//! back to defaults, so a settings file only needs the values it changes.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SimError;
use crate::renderer::DrawStyle;
use crate::sim::{Coordinate, RingLayout, WaveType};

/// Initial map view
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapView {
    pub center: Coordinate,
    pub zoom: f64,
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            center: Coordinate::new(MAP_CENTER_LAT, MAP_CENTER_LON),
            zoom: MAP_ZOOM,
        }
    }
}

/// Viewer settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Ring partitioning
    pub rings: RingLayout,
    /// Ring overlay opacity (0.0 - 1.0)
    pub ring_opacity: f64,
    /// Marker and ring colors, marker size, label placement
    pub style: DrawStyle,
    /// Wave type selected at startup
    pub default_wave_type: WaveType,
    /// Initial map view
    pub map: MapView,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rings: RingLayout::default(),
            ring_opacity: RING_OPACITY,
            style: DrawStyle::default(),
            default_wave_type: WaveType::P,
            map: MapView::default(),
        }
    }
}

impl Settings {
    /// Environment variable naming a settings file (native only)
    pub const PATH_ENV: &'static str = "QUAKE_WAVES_SETTINGS";

    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "quake_waves_settings";

    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let settings: Settings =
            serde_json::from_str(json).map_err(|e| SimError::Configuration(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SimError> {
        self.rings.validate()?;

        if !(0.0..=1.0).contains(&self.ring_opacity) {
            return Err(SimError::Configuration(format!(
                "ring_opacity must be within [0, 1], got {}",
                self.ring_opacity
            )));
        }
        self.style.validate()?;
        if !self.map.center.is_finite() || !(-90.0..=90.0).contains(&self.map.center.lat) {
            return Err(SimError::Configuration(format!(
                "map center {} is out of range",
                self.map.center
            )));
        }
        if !(0.0..=22.0).contains(&self.map.zoom) {
            return Err(SimError::Configuration(format!(
                "map zoom must be within [0, 22], got {}",
                self.map.zoom
            )));
        }
        Ok(())
    }

    /// Load settings from the file named by `QUAKE_WAVES_SETTINGS` (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Result<Self, SimError> {
        let Ok(path) = std::env::var(Self::PATH_ENV) else {
            log::info!("Using default settings");
            return Ok(Self::default());
        };

        let json = std::fs::read_to_string(&path)
            .map_err(|e| SimError::Configuration(format!("reading {path}: {e}")))?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path);
        Ok(settings)
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Result<Self, SimError> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                let settings = Self::from_json(&json)?;
                log::info!("Loaded settings from LocalStorage");
                return Ok(settings);
            }
        }

        log::info!("Using default settings");
        Ok(Self::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.rings.ring_count, 5);
        assert_eq!(settings.rings.max_radius, 10.0);
        assert_eq!(settings.ring_opacity, 0.3);
        assert_eq!(settings.map.zoom, 4.0);
        assert_eq!(settings.style.city_marker_color, "red");
        assert_eq!(settings.style.ring_color, "blue");
    }

    #[test]
    fn test_oversized_layout_rejected() {
        assert!(matches!(
            Settings::from_json(r#"{"rings": {"max_radius": 1e308}}"#),
            Err(SimError::Configuration(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{"rings": {"ring_count": 18446744073709551615}}"#),
            Err(SimError::Configuration(_))
        ));
        assert!(Settings::from_json(r#"{"rings": {"ring_count": 65}}"#).is_err());
        assert!(Settings::from_json(r#"{"rings": {"ring_count": 64}}"#).is_ok());
    }

    #[test]
    fn test_json_style() {
        let settings =
            Settings::from_json(r#"{"style": {"ring_color": "green", "label_anchor": "top_left"}}"#)
                .unwrap();
        assert_eq!(settings.style.ring_color, "green");
        assert_eq!(settings.style.label_anchor, crate::renderer::LabelAnchor::TopLeft);
        assert_eq!(settings.style.city_marker_color, "red");
        assert!(Settings::from_json(r#"{"style": {"city_marker_size": -1}}"#).is_err());
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let settings = Settings::from_json(r#"{"rings": {"ring_count": 8}}"#).unwrap();
        assert_eq!(settings.rings.ring_count, 8);
        assert_eq!(settings.rings.max_radius, MAX_RADIUS);
        assert_eq!(settings.default_wave_type, WaveType::P);
        assert_eq!(settings.map, MapView::default());
    }

    #[test]
    fn test_json_wave_type_and_map() {
        let settings = Settings::from_json(
            r#"{"default_wave_type": "L", "map": {"center": {"lat": 35.0, "lon": 135.0}}}"#,
        )
        .unwrap();
        assert_eq!(settings.default_wave_type, WaveType::L);
        assert_eq!(settings.map.center, Coordinate::new(35.0, 135.0));
        assert_eq!(settings.map.zoom, MAP_ZOOM);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        assert!(matches!(
            Settings::from_json(r#"{"rings": {"ring_count": 0}}"#),
            Err(SimError::Configuration(_))
        ));
        assert!(Settings::from_json(r#"{"ring_opacity": 1.5}"#).is_err());
        assert!(Settings::from_json(r#"{"map": {"zoom": 40}}"#).is_err());
        assert!(Settings::from_json(r#"{"default_wave_type": "X"}"#).is_err());
        assert!(Settings::from_json("not json").is_err());
    }
}
