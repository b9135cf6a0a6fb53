use glam::Vec3;

use crate::error::SculptError;

/// Convert spherical coordinates to a cartesian point.
///
/// `theta` is the polar (elevation) angle and `phi` the azimuth, both in
/// degrees:
///
/// ```text
/// x = r·cos(theta)·sin(phi)
/// y = r·sin(theta)
/// z = r·cos(theta)·cos(phi)
/// ```
///
/// # Errors
///
/// [`SculptError::NegativeRadius`] if `r < 0`,
/// [`SculptError::PolarAngleOutOfRange`] if `theta` is outside
/// `[-90, 90]`. NaN inputs fail the same checks.
pub fn from_spherical_coords(
    r: f32,
    theta: f32,
    phi: f32,
) -> Result<Vec3, SculptError> {
    if r.is_nan() || r < 0.0 {
        return Err(SculptError::NegativeRadius(r));
    }
    if !(-90.0..=90.0).contains(&theta) {
        return Err(SculptError::PolarAngleOutOfRange(theta));
    }
    Ok(spherical_offset(r, theta, phi))
}

/// Unchecked spherical conversion for callers that already hold the
/// range invariants (the orbit camera clamps both inputs).
pub(crate) fn spherical_offset(r: f32, theta: f32, phi: f32) -> Vec3 {
    let (theta_sin, theta_cos) = theta.to_radians().sin_cos();
    let (phi_sin, phi_cos) = phi.to_radians().sin_cos();
    Vec3::new(r * theta_cos * phi_sin, r * theta_sin, r * theta_cos * phi_cos)
}

/// Normalize `v`, failing instead of producing NaNs.
///
/// # Errors
///
/// [`SculptError::ZeroLengthVector`] if `v` has zero (or non-finite)
/// length.
pub fn try_unit(v: Vec3) -> Result<Vec3, SculptError> {
    v.try_normalize().ok_or(SculptError::ZeroLengthVector)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn spherical_axes() {
        let p = from_spherical_coords(2.0, 0.0, 0.0).unwrap();
        assert!(p.abs_diff_eq(Vec3::new(0.0, 0.0, 2.0), 1e-6));

        let p = from_spherical_coords(2.0, 0.0, 90.0).unwrap();
        assert!(p.abs_diff_eq(Vec3::new(2.0, 0.0, 0.0), 1e-6));

        let p = from_spherical_coords(2.0, 90.0, 0.0).unwrap();
        assert!(p.abs_diff_eq(Vec3::new(0.0, 2.0, 0.0), 1e-6));
    }

    #[test]
    fn spherical_point_lies_at_radius() {
        for &r in &[0.0_f32, 0.5, 1.0, 5.0, 60.0, 200.0] {
            for theta in (-90..=90).step_by(15) {
                for phi in (-720..=720).step_by(37) {
                    let p = from_spherical_coords(
                        r,
                        theta as f32,
                        phi as f32,
                    )
                    .unwrap();
                    assert!(
                        (p.length() - r).abs() <= 1e-4 * r.max(1.0),
                        "r={r} theta={theta} phi={phi} len={}",
                        p.length()
                    );
                }
            }
        }
    }

    #[test]
    fn spherical_rejects_bad_input() {
        assert!(matches!(
            from_spherical_coords(-1.0, 0.0, 0.0),
            Err(SculptError::NegativeRadius(_))
        ));
        assert!(matches!(
            from_spherical_coords(1.0, 90.5, 0.0),
            Err(SculptError::PolarAngleOutOfRange(_))
        ));
        assert!(matches!(
            from_spherical_coords(1.0, -91.0, 0.0),
            Err(SculptError::PolarAngleOutOfRange(_))
        ));
        assert!(from_spherical_coords(f32::NAN, 0.0, 0.0).is_err());
        assert!(from_spherical_coords(1.0, f32::NAN, 0.0).is_err());
    }

    #[test]
    fn try_unit_rejects_zero() {
        assert!(matches!(
            try_unit(Vec3::ZERO),
            Err(SculptError::ZeroLengthVector)
        ));
        let n = try_unit(Vec3::new(3.0, 0.0, 4.0)).unwrap();
        assert!(approx(n.length(), 1.0));
        assert!(n.abs_diff_eq(Vec3::new(0.6, 0.0, 0.8), 1e-6));
    }
}
