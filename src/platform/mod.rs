//! Platform abstraction layer
//!
//! Browser builds expose the viewer to JavaScript; native builds drive it
//! from `main.rs` over stdin/stdout.

#[cfg(target_arch = "wasm32")]
pub mod web;
