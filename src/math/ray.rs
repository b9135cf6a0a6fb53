use glam::Vec3;

/// Half-line `origin + t * direction` used for picking.
///
/// `inv_direction` is computed once at construction. A zero direction
/// component yields an infinite inverse, which the slab test in
/// [`Aabb::intersect_ray`](super::Aabb::intersect_ray) consumes as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Starting point in world space.
    pub origin: Vec3,
    /// Direction (unit length when produced by the camera).
    pub direction: Vec3,
    /// Component-wise reciprocal of `direction`.
    pub inv_direction: Vec3,
}

impl Ray {
    /// Create a ray and precompute its inverse direction.
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction,
            inv_direction: direction.recip(),
        }
    }

    /// Point at parameter `t` along the ray.
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + t * self.direction
    }
}
