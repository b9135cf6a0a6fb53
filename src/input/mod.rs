//! Gesture handling: recognized gesture types and the processor that
//! converts them into engine commands.

/// Platform-agnostic gesture events.
pub mod event;
/// Converts gestures into engine commands.
pub mod processor;

pub use event::GestureEvent;
pub use processor::GestureProcessor;
