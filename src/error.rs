//! Error types shared by the wave model, controller and event decoding

use thiserror::Error;

/// Errors raised while decoding input or computing a scene.
///
/// Every error is local to one call: a rejected event leaves the viewer
/// state exactly as it was.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// Wave-type token outside {P, S, L}
    #[error("invalid wave type {0:?} (expected one of P, S, L)")]
    InvalidWaveType(String),

    /// Click coordinate that is not finite or has latitude outside [-90, 90]
    #[error("invalid coordinate ({lat}, {lon})")]
    InvalidCoordinate { lat: f64, lon: f64 },

    /// Event payload that could not be decoded
    #[error("malformed event: {0}")]
    MalformedEvent(String),

    /// Scene or draw list could not be encoded for the rendering surface
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Ring layout or settings that violate an internal invariant
    #[error("configuration error: {0}")]
    Configuration(String),
}
