//! Voxel entity and its per-instance render data.

use std::fmt;

use glam::{Mat4, Vec3};

use crate::math::Aabb;

/// Edge length of every voxel.
pub const SIDE: f32 = 1.0;
/// Half of [`SIDE`]; the distance from a voxel's center to each face.
pub const HALF_SIDE: f32 = SIDE / 2.0;

/// Stable voxel handle. Two voxels at the same position are still
/// distinct entities with distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VoxelId(pub(crate) u64);

impl VoxelId {
    /// Raw numeric id.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for VoxelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "voxel#{}", self.get())
    }
}

/// A unit cube placed in the scene.
///
/// Voxels never move; the translation-only placement transform is fixed
/// at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Voxel {
    id: VoxelId,
    position: Vec3,
    transform: Mat4,
}

impl Voxel {
    pub(crate) fn new(id: VoxelId, position: Vec3) -> Self {
        Self {
            id,
            position,
            transform: Mat4::from_translation(position),
        }
    }

    /// Handle of this voxel.
    #[must_use]
    pub fn id(&self) -> VoxelId {
        self.id
    }

    /// Center of the cube in world space.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Model matrix placing the unit cube mesh at [`position`](Self::position).
    #[must_use]
    pub fn transform(&self) -> Mat4 {
        self.transform
    }

    /// Collision box: the cube itself.
    #[must_use]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center(self.position, HALF_SIDE)
    }

    /// Per-instance data for a renderer.
    #[must_use]
    pub fn instance(&self, color: [f32; 4]) -> VoxelInstance {
        VoxelInstance {
            model: self.transform.to_cols_array_2d(),
            color,
        }
    }
}

/// Instance buffer entry: model matrix plus RGBA fill color.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct VoxelInstance {
    /// Column-major model matrix.
    pub model: [[f32; 4]; 4],
    /// RGBA color.
    pub color: [f32; 4],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_is_pure_translation() {
        let voxel = Voxel::new(VoxelId(7), Vec3::new(1.0, -2.0, 3.0));
        let (scale, rotation, translation) =
            voxel.transform().to_scale_rotation_translation();
        assert!(scale.abs_diff_eq(Vec3::ONE, 1e-6));
        assert!(rotation.abs_diff_eq(glam::Quat::IDENTITY, 1e-6));
        assert_eq!(translation, Vec3::new(1.0, -2.0, 3.0));
    }

    #[test]
    fn aabb_spans_unit_cube() {
        let voxel = Voxel::new(VoxelId(0), Vec3::new(0.0, 0.0, 1.0));
        let aabb = voxel.aabb();
        assert_eq!(aabb.min, Vec3::new(-0.5, -0.5, 0.5));
        assert_eq!(aabb.max, Vec3::new(0.5, 0.5, 1.5));
    }

    #[test]
    fn same_position_distinct_identity() {
        let a = Voxel::new(VoxelId(1), Vec3::ZERO);
        let b = Voxel::new(VoxelId(2), Vec3::ZERO);
        assert_ne!(a, b);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn id_display_uses_raw_value() {
        let id = VoxelId(42);
        assert_eq!(id.get(), 42);
        assert_eq!(id.to_string(), "voxel#42");
    }

    #[test]
    fn instance_is_tightly_packed() {
        let voxel = Voxel::new(VoxelId(0), Vec3::X);
        let inst = voxel.instance([1.0, 0.5, 0.0, 1.0]);
        let bytes: &[u8] = bytemuck::bytes_of(&inst);
        assert_eq!(bytes.len(), 80);
        assert_eq!(inst.model[3], [1.0, 0.0, 0.0, 1.0]);
    }
}
