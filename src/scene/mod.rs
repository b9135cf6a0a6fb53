//! Authoritative scene: the orbit camera, the voxel set, and the
//! selection.
//!
//! Voxels live in a copy-on-write vector. Readers take a
//! [`VoxelSnapshot`] (a shared, immutable `Arc` view); mutation clones the
//! vector only while such a snapshot is alive, so a render thread never
//! observes a half-applied add or remove.

pub mod cube_mesh;
pub mod frame;
mod picking;
mod voxel;

use std::ops::Deref;
use std::sync::Arc;

use glam::Vec3;

pub use self::frame::{FramePublisher, FrameReader, RenderFrame};
pub use self::picking::PickHit;
pub use self::voxel::{Voxel, VoxelId, VoxelInstance, HALF_SIDE, SIDE};
use crate::camera::Camera;

// ---------------------------------------------------------------------------
// VoxelSnapshot
// ---------------------------------------------------------------------------

/// Immutable view of the voxel set at one point in time.
///
/// Cheap to clone; later scene mutations never affect it.
#[derive(Debug, Clone, Default)]
pub struct VoxelSnapshot(Arc<Vec<Voxel>>);

impl VoxelSnapshot {
    /// Per-instance render data for every voxel, in insertion order.
    #[must_use]
    pub fn instances(&self, color: [f32; 4]) -> Vec<VoxelInstance> {
        self.0.iter().map(|v| v.instance(color)).collect()
    }

    /// Whether both snapshots share the same storage.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for VoxelSnapshot {
    type Target = [Voxel];

    fn deref(&self) -> &[Voxel] {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// Scene
// ---------------------------------------------------------------------------

/// The editable world. Always holds at least one voxel, and the selection
/// always names a voxel that is present.
pub struct Scene {
    camera: Camera,
    /// Voxels in insertion order.
    voxels: Arc<Vec<Voxel>>,
    selected: Voxel,
    next_voxel_id: u64,
    /// Monotonically increasing generation; bumped on any mutation.
    generation: u64,
    /// Generation that was last consumed by the renderer.
    rendered_generation: u64,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(Camera::default())
    }
}

impl Scene {
    /// Scene holding a single seed voxel at the origin, selected.
    #[must_use]
    pub fn new(camera: Camera) -> Self {
        let seed = Voxel::new(VoxelId(0), Vec3::ZERO);
        Self {
            camera,
            voxels: Arc::new(vec![seed]),
            selected: seed,
            next_voxel_id: 1,
            generation: 1,
            rendered_generation: 0,
        }
    }

    // -- Mutation helpers --

    fn invalidate(&mut self) {
        self.generation += 1;
    }

    /// Whether scene data changed since last `mark_rendered()`.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.generation != self.rendered_generation
    }

    /// Mark current generation as rendered (call after publishing a frame).
    pub fn mark_rendered(&mut self) {
        self.rendered_generation = self.generation;
    }

    /// Append a voxel at `position` and return its handle.
    pub(crate) fn add_voxel(&mut self, position: Vec3) -> VoxelId {
        let id = VoxelId(self.next_voxel_id);
        self.next_voxel_id += 1;
        Arc::make_mut(&mut self.voxels).push(Voxel::new(id, position));
        self.invalidate();
        id
    }

    /// Remove a voxel by handle. Refuses to empty the scene and re-homes
    /// the selection when the selected voxel goes away.
    pub(crate) fn remove_voxel(&mut self, id: VoxelId) -> Option<Voxel> {
        if self.voxels.len() <= 1 {
            return None;
        }
        let idx = self.voxels.iter().position(|v| v.id() == id)?;
        let removed = Arc::make_mut(&mut self.voxels).remove(idx);
        if removed.id() == self.selected.id() {
            let closest = self.closest_voxel(removed.position()).copied();
            if let Some(closest) = closest {
                self.selected = closest;
            }
        }
        self.invalidate();
        Some(removed)
    }

    /// Select a voxel by handle. Returns `false` if it is not present.
    pub fn select(&mut self, id: VoxelId) -> bool {
        match self.voxel(id).copied() {
            Some(voxel) => {
                self.selected = voxel;
                self.invalidate();
                true
            }
            None => false,
        }
    }

    // -- Camera --

    /// Read access to the camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Write access (invalidates the published frame).
    pub fn camera_mut(&mut self) -> &mut Camera {
        self.invalidate();
        &mut self.camera
    }

    // -- Voxel queries --

    /// All voxels in insertion order.
    #[must_use]
    pub fn voxels(&self) -> &[Voxel] {
        &self.voxels
    }

    /// Shared immutable view of the current voxel set.
    #[must_use]
    pub fn snapshot(&self) -> VoxelSnapshot {
        VoxelSnapshot(Arc::clone(&self.voxels))
    }

    /// Number of voxels (never zero).
    #[must_use]
    pub fn voxel_count(&self) -> usize {
        self.voxels.len()
    }

    /// Look up a voxel by handle.
    #[must_use]
    pub fn voxel(&self, id: VoxelId) -> Option<&Voxel> {
        self.voxels.iter().find(|v| v.id() == id)
    }

    /// Check if a voxel exists.
    #[must_use]
    pub fn contains(&self, id: VoxelId) -> bool {
        self.voxels.iter().any(|v| v.id() == id)
    }

    /// The selected voxel.
    #[must_use]
    pub fn selected_voxel(&self) -> &Voxel {
        &self.selected
    }

    /// Voxel whose center is nearest to `position`; ties keep the earliest
    /// inserted. `None` only for an empty scene, which cannot occur.
    #[must_use]
    pub fn closest_voxel(&self, position: Vec3) -> Option<&Voxel> {
        self.voxels.iter().min_by(|a, b| {
            a.position()
                .distance(position)
                .total_cmp(&b.position().distance(position))
        })
    }

    /// Move the camera target onto the selected voxel.
    pub fn center_camera_on_selection(&mut self) {
        let target = self.selected.position();
        self.camera_mut().set_target(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_selected_seed_at_origin() {
        let scene = Scene::default();
        assert_eq!(scene.voxel_count(), 1);
        assert_eq!(scene.voxels()[0].position(), Vec3::ZERO);
        assert_eq!(scene.selected_voxel().id(), scene.voxels()[0].id());
        assert!(scene.is_dirty());
    }

    #[test]
    fn ids_are_unique_even_for_shared_positions() {
        let mut scene = Scene::default();
        let a = scene.add_voxel(Vec3::X);
        let b = scene.add_voxel(Vec3::X);
        assert_ne!(a, b);
        assert_eq!(scene.voxel_count(), 3);
        let removed = scene.remove_voxel(a).unwrap();
        assert_eq!(removed.id(), a);
        assert!(scene.contains(b));
        assert!(!scene.contains(a));
    }

    #[test]
    fn last_voxel_is_never_removed() {
        let mut scene = Scene::default();
        let seed = scene.selected_voxel().id();
        assert!(scene.remove_voxel(seed).is_none());
        assert_eq!(scene.voxel_count(), 1);
    }

    #[test]
    fn removing_selected_moves_selection_to_closest() {
        let mut scene = Scene::default();
        let seed = scene.selected_voxel().id();
        let near = scene.add_voxel(Vec3::new(0.0, 0.0, 1.0));
        let _far = scene.add_voxel(Vec3::new(0.0, 0.0, 5.0));
        let _ = scene.remove_voxel(seed).unwrap();
        assert_eq!(scene.selected_voxel().id(), near);
    }

    #[test]
    fn removing_unselected_keeps_selection() {
        let mut scene = Scene::default();
        let seed = scene.selected_voxel().id();
        let other = scene.add_voxel(Vec3::Y);
        let _ = scene.remove_voxel(other).unwrap();
        assert_eq!(scene.selected_voxel().id(), seed);
    }

    #[test]
    fn closest_voxel_prefers_first_on_ties() {
        let mut scene = Scene::default();
        let a = scene.add_voxel(Vec3::new(2.0, 0.0, 0.0));
        let _b = scene.add_voxel(Vec3::new(-2.0, 0.0, 0.0));
        let seed = scene.voxels()[0].id();
        let closest = scene.closest_voxel(Vec3::new(0.1, 0.0, 0.0)).unwrap();
        assert_eq!(closest.id(), seed);
        let _ = scene.remove_voxel(seed);
        assert_eq!(scene.closest_voxel(Vec3::ZERO).unwrap().id(), a);
    }

    #[test]
    fn snapshot_is_unaffected_by_later_mutation() {
        let mut scene = Scene::default();
        let before = scene.snapshot();
        let id = scene.add_voxel(Vec3::Z);
        assert_eq!(before.len(), 1);
        assert_eq!(scene.voxel_count(), 2);

        let during = scene.snapshot();
        let _ = scene.remove_voxel(id);
        assert_eq!(during.len(), 2);
        assert!(during.iter().any(|v| v.id() == id));
        assert!(!scene.snapshot().ptr_eq(&during));
    }

    #[test]
    fn mutation_without_readers_reuses_storage() {
        let mut scene = Scene::default();
        let _ = scene.add_voxel(Vec3::Z);
        let first = Arc::as_ptr(&scene.voxels);
        let _ = scene.add_voxel(Vec3::X);
        // No outstanding snapshot: make_mut mutates in place (modulo Vec
        // reallocation, which does not move the Arc allocation).
        assert_eq!(first, Arc::as_ptr(&scene.voxels));
    }

    #[test]
    fn dirty_tracking() {
        let mut scene = Scene::default();
        scene.mark_rendered();
        assert!(!scene.is_dirty());
        scene.camera_mut().zoom(1.0);
        assert!(scene.is_dirty());
        scene.mark_rendered();
        let _ = scene.add_voxel(Vec3::Y);
        assert!(scene.is_dirty());
    }

    #[test]
    fn select_requires_presence() {
        let mut scene = Scene::default();
        let id = scene.add_voxel(Vec3::Y);
        assert!(scene.select(id));
        assert_eq!(scene.selected_voxel().id(), id);
        assert!(!scene.select(VoxelId(999)));
        assert_eq!(scene.selected_voxel().id(), id);
    }

    #[test]
    fn centering_moves_target_only() {
        let mut scene = Scene::default();
        let id = scene.add_voxel(Vec3::new(0.0, 0.0, 1.0));
        assert!(scene.select(id));
        let distance = scene.camera().distance();
        scene.center_camera_on_selection();
        assert_eq!(scene.camera().target(), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(scene.camera().distance(), distance);
    }
}
