//! Web-Mercator map viewport
//!
//! Pixel space has its origin at the top-left of the surface with y
//! pointing down, matching browser canvas coordinates.

use glam::DVec2;
use std::f64::consts::PI;

use crate::consts::TILE_SIZE;
use crate::settings::MapView;
use crate::sim::Coordinate;
use crate::{clamp_mercator_latitude, normalize_longitude};

/// A map view of a given pixel size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapViewport {
    pub center: Coordinate,
    pub zoom: f64,
    pub size: DVec2,
}

impl MapViewport {
    pub fn new(view: MapView, width: f64, height: f64) -> Self {
        Self {
            center: view.center,
            zoom: view.zoom,
            size: DVec2::new(width, height),
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.size = DVec2::new(width, height);
    }

    /// Edge length of the whole world at this zoom (pixels)
    #[inline]
    pub fn world_size(&self) -> f64 {
        TILE_SIZE * 2f64.powf(self.zoom)
    }

    /// Coordinate to absolute world pixels
    pub fn to_world(&self, coord: Coordinate) -> DVec2 {
        let world = self.world_size();
        let x = (coord.lon + 180.0) / 360.0 * world;
        let sin_lat = clamp_mercator_latitude(coord.lat).to_radians().sin();
        let y = (0.5 - ((1.0 + sin_lat) / (1.0 - sin_lat)).ln() / (4.0 * PI)) * world;
        DVec2::new(x, y)
    }

    /// Absolute world pixels to coordinate
    pub fn from_world(&self, world_px: DVec2) -> Coordinate {
        let world = self.world_size();
        let lon = normalize_longitude(world_px.x / world * 360.0 - 180.0);
        let lat = (PI * (1.0 - 2.0 * world_px.y / world)).sinh().atan().to_degrees();
        Coordinate::new(clamp_mercator_latitude(lat), lon)
    }

    /// Coordinate to surface pixels
    pub fn project(&self, coord: Coordinate) -> DVec2 {
        self.to_world(coord) - self.to_world(self.center) + self.size / 2.0
    }

    /// Surface pixels to coordinate (used to decode clicks)
    pub fn unproject(&self, screen: DVec2) -> Coordinate {
        self.from_world(screen - self.size / 2.0 + self.to_world(self.center))
    }
}
