//! Quake Waves - seismic wavefront rings on a map
//!
//! Core modules:
//! - `sim`: Wave model, view controller and inbound events (pure, synchronous)
//! - `renderer`: Map viewport projection and draw-list assembly
//! - `platform`: Browser bindings (wasm32 only)
//! - `settings`: Ring layout, overlay style and map view

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::SimError;
pub use settings::Settings;

/// Simulation configuration constants
pub mod consts {
    /// Outermost ring radius (abstract distance units)
    pub const MAX_RADIUS: f64 = 10.0;
    /// Number of wavefront rings per epicenter
    pub const RING_COUNT: usize = 5;
    /// Upper bound on configured ring count
    pub const MAX_RING_COUNT: usize = 64;
    /// Display size per unit of ring radius
    pub const MARKER_SIZE_PER_UNIT: f64 = 10.0;
    /// Ring overlay opacity
    pub const RING_OPACITY: f64 = 0.3;

    /// City marker diameter (pixels)
    pub const CITY_MARKER_SIZE: f64 = 10.0;
    pub const CITY_MARKER_COLOR: &str = "red";
    pub const RING_COLOR: &str = "blue";

    /// Default map view (central Honshu)
    pub const MAP_CENTER_LAT: f64 = 36.2048;
    pub const MAP_CENTER_LON: f64 = 138.2529;
    pub const MAP_ZOOM: f64 = 4.0;

    /// Web-Mercator tile edge (pixels)
    pub const TILE_SIZE: f64 = 256.0;
    /// Latitude limit of the Web-Mercator square
    pub const MERCATOR_MAX_LAT: f64 = 85.051_128_78;
}

/// Wrap a longitude into [-180, 180)
#[inline]
pub fn normalize_longitude(lon: f64) -> f64 {
    if (-180.0..180.0).contains(&lon) {
        return lon;
    }
    (lon + 180.0).rem_euclid(360.0) - 180.0
}

/// Clamp a latitude into the range Web-Mercator can represent
#[inline]
pub fn clamp_mercator_latitude(lat: f64) -> f64 {
    lat.clamp(-consts::MERCATOR_MAX_LAT, consts::MERCATOR_MAX_LAT)
}
