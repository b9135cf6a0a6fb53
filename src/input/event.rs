use crate::tool::Tool;

/// Already-recognized, platform-agnostic gestures.
///
/// The platform shell runs its own gesture detectors and forwards the
/// results here; these are fed into a
/// [`GestureProcessor`](super::GestureProcessor) which converts them into
/// [`SculptCommand`](crate::SculptCommand) values.
///
/// # Example
///
/// ```ignore
/// if let Some(cmd) = gestures.handle_event(GestureEvent::Pinch { delta: 12.0 }) {
///     engine.execute(cmd)?;
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// Pointers moved while down.
    Drag {
        /// Horizontal movement in pixels (positive = right).
        dx: f32,
        /// Vertical movement in pixels (positive = down).
        dy: f32,
        /// Number of pointers on screen.
        pointers: u32,
    },
    /// Change in distance between two pointers (positive = spreading).
    Pinch {
        /// Span change in pixels.
        delta: f32,
    },
    /// Single tap at a screen position.
    Tap {
        /// Horizontal position in pixels.
        x: f32,
        /// Vertical position in pixels (origin top-left).
        y: f32,
    },
    /// Double tap anywhere.
    DoubleTap,
    /// All pointers lifted.
    Release,
    /// A tool button was pressed.
    ToolSelected(Tool),
}
