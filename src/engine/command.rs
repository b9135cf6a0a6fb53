//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation, whether it comes from a gesture, a tool
//! button, or a programmatic call, is a [`SculptCommand`]. Consumers
//! construct commands and pass them to
//! [`SculptEngine::execute`](super::SculptEngine::execute).

use glam::Vec2;

use crate::tool::Tool;

/// A discrete or parameterized operation the engine can perform.
///
/// The engine never cares *how* a command was triggered:
///
/// ```ignore
/// engine.execute(SculptCommand::Zoom { delta: -2.0 })?;
/// engine.execute(SculptCommand::UseTool { at: Vec2::new(400.0, 300.0) })?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SculptCommand {
    // ── Camera ──────────────────────────────────────────────────────
    /// Orbit the camera.
    RotateCamera {
        /// Azimuth change in degrees.
        horizontal: f32,
        /// Elevation change in degrees.
        vertical: f32,
    },

    /// Slide the camera target in the screen plane.
    PanCamera {
        /// World units along the camera's right vector.
        horizontal: f32,
        /// World units along the camera's up vector.
        vertical: f32,
    },

    /// Change the orbit distance (negative = closer).
    Zoom {
        /// Distance change in world units.
        delta: f32,
    },

    /// Move the camera target onto the selected voxel.
    CenterOnSelection,

    // ── Editing ─────────────────────────────────────────────────────
    /// Switch the active tool.
    SetTool(Tool),

    /// Apply the active tool at a pixel.
    UseTool {
        /// Screen position in pixels (origin top-left, Y down).
        at: Vec2,
    },

    /// Select the voxel under the viewport center, if any.
    SelectAtScreenCenter,

    // ── Surface ─────────────────────────────────────────────────────
    /// The drawable surface changed size.
    Resize {
        /// New width in pixels.
        width: u32,
        /// New height in pixels.
        height: u32,
    },
}
