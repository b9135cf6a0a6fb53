//! Crate-level error types.

use std::fmt;

/// Errors produced by the voxsculpt crate.
///
/// Precondition violations (`NegativeRadius`, `PolarAngleOutOfRange`,
/// `ZeroLengthVector`, `DegenerateViewport`) abort the offending operation
/// before any camera or scene state is touched.
#[derive(Debug)]
pub enum SculptError {
    /// Spherical coordinates built with a negative (or NaN) radius.
    NegativeRadius(f32),
    /// Spherical polar angle outside `[-90, 90]` degrees.
    PolarAngleOutOfRange(f32),
    /// Attempted to normalize a zero-length or non-finite vector.
    ZeroLengthVector,
    /// Viewport with a zero dimension, or none configured yet.
    DegenerateViewport {
        /// Viewport width in pixels.
        width: u32,
        /// Viewport height in pixels.
        height: u32,
    },
    /// Options that cannot produce a working camera.
    InvalidOptions(String),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// Failed to spawn a background thread.
    ThreadSpawn(std::io::Error),
}

impl fmt::Display for SculptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeRadius(r) => {
                write!(f, "radius must be non-negative, got {r}")
            }
            Self::PolarAngleOutOfRange(theta) => {
                write!(f, "polar angle must be in [-90, 90], got {theta}")
            }
            Self::ZeroLengthVector => {
                write!(f, "cannot normalize a zero-length vector")
            }
            Self::DegenerateViewport { width, height } => {
                write!(f, "degenerate viewport {width}x{height}")
            }
            Self::InvalidOptions(msg) => write!(f, "invalid options: {msg}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ThreadSpawn(e) => {
                write!(f, "failed to spawn thread: {e}")
            }
        }
    }
}

impl std::error::Error for SculptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) | Self::ThreadSpawn(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SculptError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
