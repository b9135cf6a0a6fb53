//! Editing tools selectable from the platform shell.

use glam::Vec2;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::SculptError;
use crate::scene::{Scene, Voxel, VoxelId};

/// What a tap does.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Tool {
    /// Place a voxel against the tapped face.
    #[default]
    Add,
    /// Delete the tapped voxel.
    Remove,
    /// Recolor the tapped voxel (not supported yet; taps are ignored).
    Paint,
}

/// Result of applying a tool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToolOutcome {
    /// A voxel was created.
    Added(VoxelId),
    /// A voxel was deleted.
    Removed(Voxel),
    /// Nothing changed (miss, last voxel, or unsupported tool).
    Unchanged,
}

impl Tool {
    /// Apply this tool at the pixel `at`.
    ///
    /// # Errors
    ///
    /// [`SculptError::DegenerateViewport`] before a viewport is set.
    pub fn apply(
        self,
        scene: &mut Scene,
        at: Vec2,
    ) -> Result<ToolOutcome, SculptError> {
        let outcome = match self {
            Self::Add => scene
                .add_voxel_adjacent_to_pick(at)?
                .map_or(ToolOutcome::Unchanged, ToolOutcome::Added),
            Self::Remove => scene
                .remove_voxel_at_pick(at)?
                .map_or(ToolOutcome::Unchanged, ToolOutcome::Removed),
            Self::Paint => {
                log::debug!("paint tool used at {at}; painting is not supported");
                ToolOutcome::Unchanged
            }
        };
        Ok(outcome)
    }
}
