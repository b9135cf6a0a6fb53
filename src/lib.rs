// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Voxel sculpting core: an orbit camera, a copy-on-write voxel scene,
//! and screen-space picking that turns taps into voxel edits.
//!
//! The crate draws nothing itself. A platform shell feeds recognized
//! gestures in, and a renderer on another thread reads finished frames
//! out.
//!
//! # Key entry points
//!
//! - [`engine::SculptEngine`] - owns the scene and executes commands
//! - [`scene::Scene`] - camera, voxels, selection, and picking
//! - [`camera::Camera`] - orbit camera with screen-ray unprojection
//! - [`input::GestureProcessor`] - gestures to [`SculptCommand`]s
//! - [`options::Options`] - runtime configuration (camera, gestures,
//!   colors)
//!
//! # Architecture
//!
//! All edits happen on the gesture thread through
//! [`SculptEngine::execute`]. After every change the engine publishes a
//! [`scene::RenderFrame`] through a lock-free triple buffer; the frame
//! holds an immutable snapshot of the voxel set, so the render thread can
//! iterate it while the next edit is already under way.

pub mod camera;
pub mod engine;
pub mod error;
pub mod input;
pub mod math;
pub mod options;
pub mod scene;
pub mod tool;

pub use engine::command::SculptCommand;
pub use engine::SculptEngine;
pub use error::SculptError;
pub use tool::{Tool, ToolOutcome};
