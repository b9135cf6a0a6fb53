//! Render-frame publication from the editing thread to a render thread.
//!
//! The editor builds a [`RenderFrame`] after each scene change and writes
//! it into a lock-free triple buffer. The render loop reads the most
//! recent frame whenever it draws; neither side ever blocks the other,
//! and a frame is never observed half-written.

use super::{Scene, VoxelId, VoxelInstance, VoxelSnapshot};
use crate::camera::CameraUniform;
use crate::options::DisplayOptions;

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, Default)]
pub struct RenderFrame {
    /// Camera matrices and light direction.
    pub camera: CameraUniform,
    /// Voxels at publication time.
    pub voxels: VoxelSnapshot,
    /// Handle of the voxel drawn with a wireframe highlight.
    pub selected: Option<VoxelId>,
    /// Model matrix of the selected voxel.
    pub selected_transform: [[f32; 4]; 4],
    /// RGBA fill color for every voxel.
    pub voxel_color: [f32; 4],
    /// RGBA color of the selection wireframe.
    pub highlight_color: [f32; 4],
}

impl RenderFrame {
    /// Capture the scene's current state.
    #[must_use]
    pub fn from_scene(scene: &Scene, display: &DisplayOptions) -> Self {
        let selected = scene.selected_voxel();
        Self {
            camera: CameraUniform::from_camera(scene.camera()),
            voxels: scene.snapshot(),
            selected: Some(selected.id()),
            selected_transform: selected.transform().to_cols_array_2d(),
            voxel_color: display.voxel_color,
            highlight_color: display.highlight_color,
        }
    }

    /// Instance data for the solid pass.
    #[must_use]
    pub fn instances(&self) -> Vec<VoxelInstance> {
        self.voxels.instances(self.voxel_color)
    }

    /// Instance data for the wireframe pass, if anything is selected.
    #[must_use]
    pub fn highlight_instance(&self) -> Option<VoxelInstance> {
        self.selected.map(|_| VoxelInstance {
            model: self.selected_transform,
            color: self.highlight_color,
        })
    }
}

/// Create a connected publisher/reader pair seeded with `initial`.
#[must_use]
pub fn channel(initial: &RenderFrame) -> (FramePublisher, FrameReader) {
    let (input, output) = triple_buffer::triple_buffer(initial);
    (FramePublisher { input }, FrameReader { output })
}

/// Writing end, owned by the editing thread.
pub struct FramePublisher {
    input: triple_buffer::Input<RenderFrame>,
}

impl FramePublisher {
    /// Make `frame` the latest frame (non-blocking).
    pub fn publish(&mut self, frame: RenderFrame) {
        self.input.write(frame);
    }

    /// Whether the reader has picked up the last published frame.
    #[must_use]
    pub fn consumed(&self) -> bool {
        self.input.consumed()
    }
}

/// Reading end, owned by the render thread.
pub struct FrameReader {
    output: triple_buffer::Output<RenderFrame>,
}

impl FrameReader {
    /// Whether a newer frame is waiting.
    #[must_use]
    pub fn has_update(&self) -> bool {
        self.output.updated()
    }

    /// The most recently published frame (non-blocking).
    pub fn latest(&mut self) -> &RenderFrame {
        self.output.read()
    }
}
