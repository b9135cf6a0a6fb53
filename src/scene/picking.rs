//! Screen-space picking and the edits built on it.
//!
//! Every pick casts one camera ray and slab-tests it against each voxel's
//! box, so cost is linear in the voxel count.

use glam::{Vec2, Vec3};

use super::{Scene, Voxel, VoxelId};
use crate::error::SculptError;
use crate::math::Ray;

/// Closest voxel under a pick ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    /// The voxel that was hit.
    pub voxel: Voxel,
    /// Ray parameter of the entry point (distance, for unit rays).
    pub t: f32,
    /// Outward normal of the face the ray entered through.
    pub normal: Vec3,
}

impl Scene {
    /// Closest voxel hit in front of `ray`'s origin.
    ///
    /// Hits with `t < 0` (the origin is inside that voxel) are ignored.
    /// Equal-`t` hits resolve to the voxel inserted first.
    #[must_use]
    pub fn pick_ray(&self, ray: &Ray) -> Option<PickHit> {
        let mut best: Option<PickHit> = None;
        for voxel in self.voxels.iter() {
            let Some(hit) = voxel.aabb().intersect_ray(ray) else {
                continue;
            };
            if hit.t < 0.0 {
                continue;
            }
            if best.is_none_or(|b| hit.t < b.t) {
                best = Some(PickHit {
                    voxel: *voxel,
                    t: hit.t,
                    normal: hit.normal,
                });
            }
        }
        best
    }

    /// Closest voxel under the pixel `screen_pos`.
    ///
    /// # Errors
    ///
    /// [`SculptError::DegenerateViewport`] before a viewport is set.
    pub fn pick_voxel_at_screen_pos(
        &self,
        screen_pos: Vec2,
    ) -> Result<Option<PickHit>, SculptError> {
        let ray = self.camera.screen_pos_to_world_ray(screen_pos)?;
        Ok(self.pick_ray(&ray))
    }

    /// Place a voxel flush against the face under `screen_pos`.
    ///
    /// Returns the new voxel's handle, or `None` if nothing was hit.
    ///
    /// # Errors
    ///
    /// [`SculptError::DegenerateViewport`] before a viewport is set.
    pub fn add_voxel_adjacent_to_pick(
        &mut self,
        screen_pos: Vec2,
    ) -> Result<Option<VoxelId>, SculptError> {
        let Some(hit) = self.pick_voxel_at_screen_pos(screen_pos)? else {
            log::debug!("add: no voxel under {screen_pos}");
            return Ok(None);
        };
        let position = hit.voxel.position() + hit.normal;
        let id = self.add_voxel(position);
        log::debug!("add: {id} at {position} next to {}", hit.voxel.id());
        Ok(Some(id))
    }

    /// Remove the voxel under `screen_pos`.
    ///
    /// No-op when nothing is hit or only one voxel remains. Removing the
    /// selected voxel moves the selection to the survivor closest to it.
    ///
    /// # Errors
    ///
    /// [`SculptError::DegenerateViewport`] before a viewport is set.
    pub fn remove_voxel_at_pick(
        &mut self,
        screen_pos: Vec2,
    ) -> Result<Option<Voxel>, SculptError> {
        let Some(hit) = self.pick_voxel_at_screen_pos(screen_pos)? else {
            log::debug!("remove: no voxel under {screen_pos}");
            return Ok(None);
        };
        let removed = self.remove_voxel(hit.voxel.id());
        if removed.is_none() {
            log::debug!("remove: refusing to remove the last voxel");
        }
        Ok(removed)
    }

    /// Select whatever voxel sits under the viewport center.
    ///
    /// Returns the newly selected handle, or `None` (selection unchanged)
    /// if the center ray misses.
    ///
    /// # Errors
    ///
    /// [`SculptError::DegenerateViewport`] before a viewport is set.
    pub fn select_voxel_at_screen_center(
        &mut self,
    ) -> Result<Option<VoxelId>, SculptError> {
        let center = self.camera.viewport_center();
        let Some(hit) = self.pick_voxel_at_screen_pos(center)? else {
            return Ok(None);
        };
        let id = hit.voxel.id();
        let _ = self.select(id);
        Ok(Some(id))
    }
}
