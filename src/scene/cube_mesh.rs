//! Unit cube geometry shared by every voxel.
//!
//! Renderers upload these once and draw each voxel with its
//! [`VoxelInstance`](super::VoxelInstance) transform. Faces are listed
//! front (+Z), back (-Z), left (-X), right (+X), top (+Y), bottom (-Y),
//! four vertices each.

/// Vertex with position and face normal.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CubeVertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Outward face normal.
    pub normal: [f32; 3],
}

const fn v(position: [f32; 3], normal: [f32; 3]) -> CubeVertex {
    CubeVertex { position, normal }
}

const H: f32 = super::voxel::HALF_SIDE;

/// 24 vertices: each face owns its corners so normals stay flat.
#[rustfmt::skip]
pub const VERTICES: [CubeVertex; 24] = [
    // Front
    v([-H, -H,  H], [0.0, 0.0, 1.0]),
    v([ H, -H,  H], [0.0, 0.0, 1.0]),
    v([ H,  H,  H], [0.0, 0.0, 1.0]),
    v([-H,  H,  H], [0.0, 0.0, 1.0]),
    // Back
    v([-H, -H, -H], [0.0, 0.0, -1.0]),
    v([ H, -H, -H], [0.0, 0.0, -1.0]),
    v([ H,  H, -H], [0.0, 0.0, -1.0]),
    v([-H,  H, -H], [0.0, 0.0, -1.0]),
    // Left
    v([-H,  H,  H], [-1.0, 0.0, 0.0]),
    v([-H,  H, -H], [-1.0, 0.0, 0.0]),
    v([-H, -H, -H], [-1.0, 0.0, 0.0]),
    v([-H, -H,  H], [-1.0, 0.0, 0.0]),
    // Right
    v([ H,  H,  H], [1.0, 0.0, 0.0]),
    v([ H,  H, -H], [1.0, 0.0, 0.0]),
    v([ H, -H, -H], [1.0, 0.0, 0.0]),
    v([ H, -H,  H], [1.0, 0.0, 0.0]),
    // Top
    v([-H,  H,  H], [0.0, 1.0, 0.0]),
    v([ H,  H,  H], [0.0, 1.0, 0.0]),
    v([ H,  H, -H], [0.0, 1.0, 0.0]),
    v([-H,  H, -H], [0.0, 1.0, 0.0]),
    // Bottom
    v([-H, -H,  H], [0.0, -1.0, 0.0]),
    v([ H, -H,  H], [0.0, -1.0, 0.0]),
    v([ H, -H, -H], [0.0, -1.0, 0.0]),
    v([-H, -H, -H], [0.0, -1.0, 0.0]),
];

/// Triangle list, two triangles per face.
#[rustfmt::skip]
pub const SOLID_INDICES: [u16; 36] = [
    0, 1, 2, 0, 2, 3,
    4, 5, 6, 4, 6, 7,
    8, 9, 10, 8, 10, 11,
    12, 13, 14, 12, 14, 15,
    16, 17, 18, 16, 18, 19,
    20, 21, 22, 20, 22, 23,
];

/// Line list over the front and back face corners: the 12 cube edges.
#[rustfmt::skip]
pub const WIREFRAME_INDICES: [u16; 24] = [
    0, 1, 1, 2, 2, 3, 3, 0,
    4, 5, 5, 6, 6, 7, 7, 4,
    0, 4, 1, 5, 2, 6, 3, 7,
];
