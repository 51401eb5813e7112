//! Rendering helpers
//!
//! Turns scenes into screen-space primitives. Drawing itself belongs to the
//! host surface (browser canvas or a native consumer of the JSON output).

pub mod draw;
pub mod viewport;

pub use draw::{DrawCommand, DrawList, DrawStyle, LabelAnchor, build_draw_list};
pub use viewport::MapViewport;
