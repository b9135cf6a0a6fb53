//! Converts recognized gestures into engine commands.
//!
//! The `GestureProcessor` owns the little transient state gestures need
//! (whether the current touch sequence panned) and the speed factors from
//! [`InputOptions`]. It is the only thing that sits between the platform's
//! gesture detectors and the engine's
//! [`execute`](crate::SculptEngine::execute) method.

use glam::Vec2;

use super::event::GestureEvent;
use crate::engine::command::SculptCommand;
use crate::options::InputOptions;

/// Converts [`GestureEvent`]s into [`SculptCommand`]s.
///
/// # Usage
///
/// ```ignore
/// // In the gesture callback:
/// if let Some(cmd) = gestures.handle_event(event) {
///     engine.execute(cmd)?;
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct GestureProcessor {
    speeds: InputOptions,
    /// Whether a multi-pointer drag happened since the last release.
    panning: bool,
}

impl GestureProcessor {
    /// Create a processor with the given speed factors.
    #[must_use]
    pub fn new(speeds: InputOptions) -> Self {
        Self {
            speeds,
            panning: false,
        }
    }

    /// Replace the speed factors.
    pub fn set_speeds(&mut self, speeds: InputOptions) {
        self.speeds = speeds;
    }

    /// Current speed factors.
    #[must_use]
    pub fn speeds(&self) -> &InputOptions {
        &self.speeds
    }

    /// Whether the current touch sequence is a pan.
    #[must_use]
    pub fn panning(&self) -> bool {
        self.panning
    }

    /// Process a gesture and return zero or one commands.
    pub fn handle_event(&mut self, event: GestureEvent) -> Option<SculptCommand> {
        match event {
            GestureEvent::Drag { dx, dy, pointers } => {
                self.handle_drag(dx, dy, pointers)
            }
            GestureEvent::Pinch { delta } => Some(SculptCommand::Zoom {
                delta: -delta * self.speeds.zoom_speed,
            }),
            GestureEvent::Tap { x, y } => Some(SculptCommand::UseTool {
                at: Vec2::new(x, y),
            }),
            GestureEvent::DoubleTap => Some(SculptCommand::CenterOnSelection),
            GestureEvent::Release => {
                // A finished pan selects whatever ended up in the middle.
                std::mem::take(&mut self.panning)
                    .then_some(SculptCommand::SelectAtScreenCenter)
            }
            GestureEvent::ToolSelected(tool) => Some(SculptCommand::SetTool(tool)),
        }
    }

    /// One pointer orbits, two or more pan.
    fn handle_drag(
        &mut self,
        dx: f32,
        dy: f32,
        pointers: u32,
    ) -> Option<SculptCommand> {
        match pointers {
            0 => None,
            1 => Some(SculptCommand::RotateCamera {
                horizontal: -dx * self.speeds.rotate_speed,
                vertical: dy * self.speeds.rotate_speed,
            }),
            _ => {
                self.panning = true;
                Some(SculptCommand::PanCamera {
                    horizontal: -dx * self.speeds.pan_speed,
                    vertical: dy * self.speeds.pan_speed,
                })
            }
        }
    }
}
