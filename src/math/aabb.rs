use glam::Vec3;

use super::Ray;

/// Axis-aligned bounding box, `min <= max` component-wise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

/// Where a ray enters a box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Ray parameter of the entry point.
    pub t: f32,
    /// Outward normal of the face the ray entered through.
    pub normal: Vec3,
}

impl Aabb {
    /// Box spanning `min..=max`.
    #[must_use]
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Box centered on `center` extending `half_extent` along each axis.
    #[must_use]
    pub fn from_center(center: Vec3, half_extent: f32) -> Self {
        let half = Vec3::splat(half_extent);
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Center point.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Whether `point` lies inside or on the boundary.
    #[must_use]
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Slab test that also recovers the entry face.
    ///
    /// Clips `[-inf, +inf]` against each axis slab in turn. Whenever an
    /// axis raises `tmin`, the entry face is that axis' negative face if
    /// the ray reaches `min` before `max`, else its positive face. Fails as
    /// soon as the interval empties or lies entirely behind the origin.
    ///
    /// The returned `t` may be negative when the origin is inside the
    /// box. Infinite inverse directions (axis-parallel rays) flow through
    /// the comparisons unchanged.
    #[must_use]
    pub fn intersect_ray(&self, ray: &Ray) -> Option<RayHit> {
        let mut tmin = f32::NEG_INFINITY;
        let mut tmax = f32::INFINITY;
        let mut normal = None;

        for axis in 0..3 {
            let t1 = (self.min[axis] - ray.origin[axis]) * ray.inv_direction[axis];
            let t2 = (self.max[axis] - ray.origin[axis]) * ray.inv_direction[axis];

            let (near, far) = if t1 < t2 { (t1, t2) } else { (t2, t1) };

            if near > tmin {
                tmin = near;
                let sign = if t1 < t2 { -1.0 } else { 1.0 };
                normal = Some(Vec3::AXES[axis] * sign);
            }

            if far < tmax {
                tmax = far;
            }

            if tmin > tmax || tmax < 0.0 {
                return None;
            }
        }

        normal.map(|normal| RayHit { t: tmin, normal })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_cube() -> Aabb {
        Aabb::from_center(Vec3::ZERO, 0.5)
    }

    #[test]
    fn straight_down_minus_z_hits_front_face() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z);
        let hit = unit_cube().intersect_ray(&ray).unwrap();
        assert!((hit.t - 9.5).abs() < 1e-6);
        assert_eq!(hit.normal, Vec3::Z);
    }

    #[test]
    fn each_face_reports_its_outward_normal() {
        let cases = [
            (Vec3::new(5.0, 0.1, 0.2), Vec3::NEG_X, Vec3::X),
            (Vec3::new(-5.0, 0.1, 0.2), Vec3::X, Vec3::NEG_X),
            (Vec3::new(0.1, 5.0, 0.2), Vec3::NEG_Y, Vec3::Y),
            (Vec3::new(0.1, -5.0, 0.2), Vec3::Y, Vec3::NEG_Y),
            (Vec3::new(0.1, 0.2, -5.0), Vec3::Z, Vec3::NEG_Z),
        ];
        for (origin, dir, expected) in cases {
            let hit = unit_cube().intersect_ray(&Ray::new(origin, dir)).unwrap();
            assert_eq!(hit.normal, expected, "origin {origin}");
            assert!((hit.t - 4.5).abs() < 1e-5);
        }
    }

    #[test]
    fn oblique_ray_enters_through_last_raised_slab() {
        // Only the x slab raises tmin, so the entry is the +X face.
        let origin = Vec3::new(2.0, 0.3, 0.0);
        let dir = (Vec3::new(0.0, 0.0, 0.0) - origin).normalize();
        let hit = unit_cube().intersect_ray(&Ray::new(origin, dir)).unwrap();
        assert_eq!(hit.normal, Vec3::X);
        let entry = Ray::new(origin, dir).at(hit.t);
        assert!((entry.x - 0.5).abs() < 1e-5);
    }

    #[test]
    fn misses_return_none() {
        let aabb = unit_cube();
        // Parallel, outside the x slab.
        assert!(aabb
            .intersect_ray(&Ray::new(Vec3::new(2.0, 0.0, 10.0), Vec3::NEG_Z))
            .is_none());
        // Pointing away.
        assert!(aabb
            .intersect_ray(&Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::Z))
            .is_none());
        // Skew miss.
        let dir = Vec3::new(1.0, 1.0, -1.0).normalize();
        assert!(aabb
            .intersect_ray(&Ray::new(Vec3::new(0.0, 0.0, 10.0), dir))
            .is_none());
    }

    #[test]
    fn origin_inside_box_yields_negative_entry() {
        let hit = unit_cube()
            .intersect_ray(&Ray::new(Vec3::ZERO, Vec3::Z))
            .unwrap();
        assert!(hit.t < 0.0);
        assert!((hit.t + 0.5).abs() < 1e-6);
    }

    #[test]
    fn contains_and_center() {
        let aabb = Aabb::new(Vec3::new(0.0, 1.0, 2.0), Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(aabb.center(), Vec3::new(1.0, 2.0, 3.0));
        assert!(aabb.contains_point(Vec3::new(2.0, 1.0, 3.0)));
        assert!(!aabb.contains_point(Vec3::new(2.1, 1.0, 3.0)));
    }
}
