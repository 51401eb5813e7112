//! Browser bindings
//!
//! The page forwards canvas clicks and radio-button changes here and pulls
//! a fresh draw list whenever `revision()` changes.

use glam::DVec2;
use wasm_bindgen::prelude::*;

use crate::renderer::{DrawStyle, MapViewport, build_draw_list};
use crate::settings::Settings;
use crate::sim::{Coordinate, ViewEvent, WaveViewer, apply_event};

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Quake Waves (web) starting...");
}

/// Viewer plus the map viewport it is drawn through
#[wasm_bindgen]
pub struct WebViewer {
    viewer: WaveViewer,
    viewport: MapViewport,
    style: DrawStyle,
}

#[wasm_bindgen]
impl WebViewer {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> Result<WebViewer, JsValue> {
        let settings = Settings::load().map_err(to_js)?;
        Ok(Self {
            viewer: WaveViewer::from_settings(&settings).map_err(to_js)?,
            viewport: MapViewport::new(settings.map, width, height),
            style: settings.style,
        })
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.viewport.resize(width, height);
    }

    pub fn revision(&self) -> f64 {
        self.viewer.revision() as f64
    }

    /// Map clicked at a geographic position
    pub fn map_clicked(&mut self, lat: f64, lon: f64) -> Result<(), JsValue> {
        apply_event(&mut self.viewer, &ViewEvent::MapClicked { lat, lon }).map_err(to_js)
    }

    /// Canvas clicked at pixel position
    pub fn canvas_clicked(&mut self, x: f64, y: f64) -> Result<(), JsValue> {
        let Coordinate { lat, lon } = self.viewport.unproject(DVec2::new(x, y));
        self.map_clicked(lat, lon)
    }

    /// Wave-type radio changed; unknown tokens are rejected and ignored
    pub fn wave_type_changed(&mut self, value: &str) -> Result<(), JsValue> {
        let event = ViewEvent::WaveTypeChanged {
            value: value.to_string(),
        };
        apply_event(&mut self.viewer, &event).map_err(|e| {
            log::warn!("Ignored event: {}", e);
            to_js(e)
        })
    }

    pub fn scene_json(&self) -> Result<String, JsValue> {
        self.viewer
            .current_scene()
            .and_then(|scene| scene.to_json())
            .map_err(to_js)
    }

    pub fn draw_list_json(&self) -> Result<String, JsValue> {
        let scene = self.viewer.current_scene().map_err(to_js)?;
        build_draw_list(&scene, &self.viewport, &self.style)
            .to_json()
            .map_err(to_js)
    }
}
