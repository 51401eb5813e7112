//! Wave simulation module
//!
//! Pure and synchronous:
//! - No rendering or platform dependencies
//! - Scenes are rebuilt in full from the viewer state on every query
//! - Input is validated before it reaches the state

pub mod coord;
pub mod event;
pub mod scene;
pub mod state;
pub mod wave;

pub use coord::Coordinate;
pub use event::{ViewEvent, apply_event};
pub use scene::{CITIES, CITY_COUNT, PointMarker, RingOverlay, Scene, city_markers};
pub use state::{ViewPhase, WaveViewer};
pub use wave::{RingLayout, RingSample, WaveModel, WaveType, compute_rings};
