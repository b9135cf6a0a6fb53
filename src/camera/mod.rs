//! Orbit camera for the editor viewport.
//!
//! Provides rotation, panning, zoom, screen-to-world ray casting, and the
//! GPU-facing camera uniform.

/// Core orbit camera and GPU uniform types.
pub mod core;

pub use self::core::{Camera, CameraUniform, MAX_VERTICAL_ANGLE};
