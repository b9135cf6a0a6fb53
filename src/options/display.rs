use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Display", inline)]
#[serde(default)]
/// Colors handed to the renderer with every frame.
pub struct DisplayOptions {
    /// RGBA fill color of every voxel.
    pub voxel_color: [f32; 4],
    /// RGBA color of the selected voxel's wireframe.
    pub highlight_color: [f32; 4],
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            voxel_color: [1.0, 0.5, 0.0, 1.0],
            highlight_color: [1.0, 1.0, 1.0, 1.0],
        }
    }
}
