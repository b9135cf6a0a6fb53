use glam::{Mat4, Vec2, Vec3, Vec4};

use crate::error::SculptError;
use crate::math::{spherical_offset, try_unit, Ray};
use crate::options::CameraOptions;

/// Vertical orbit angle limit in degrees, short of the poles so the
/// look-at basis never flips.
pub const MAX_VERTICAL_ANGLE: f32 = 89.0;

/// Aspect ratio used until the first viewport arrives.
const DEFAULT_ASPECT: f32 = 16.0 / 9.0;

/// Orbiting perspective camera.
///
/// The eye is never stored: it sits at
/// `target + spherical(distance, vertical_angle, horizontal_angle)` and
/// always looks at `target` with world-up `+Y`. Every mutation recomputes
/// the view, projection, combined, and inverse-combined matrices before
/// returning, so readers never see stale transforms.
#[derive(Debug, Clone)]
pub struct Camera {
    target: Vec3,
    distance: f32,
    /// Elevation in degrees, `[-89, 89]`.
    vertical_angle: f32,
    /// Azimuth in degrees, `[0, 360)`.
    horizontal_angle: f32,

    viewport_width: u32,
    viewport_height: u32,
    aspect: f32,
    fovy: f32,
    znear: f32,
    zfar: f32,
    min_distance: f32,
    max_distance: f32,

    view: Mat4,
    projection: Mat4,
    view_proj: Mat4,
    inverse_view_proj: Mat4,
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_valid_options(&CameraOptions::default())
    }
}

impl Camera {
    /// Camera orbiting the origin at the configured initial distance.
    ///
    /// The viewport is unset (0x0) until [`set_viewport`](Self::set_viewport)
    /// is called; projection uses a 16:9 aspect in the meantime.
    ///
    /// # Errors
    ///
    /// [`SculptError::InvalidOptions`] if `options` fail validation.
    pub fn new(options: &CameraOptions) -> Result<Self, SculptError> {
        options.validate()?;
        Ok(Self::from_valid_options(options))
    }

    fn from_valid_options(options: &CameraOptions) -> Self {
        let mut camera = Self {
            target: Vec3::ZERO,
            distance: options.initial_distance,
            vertical_angle: 0.0,
            horizontal_angle: 0.0,
            viewport_width: 0,
            viewport_height: 0,
            aspect: DEFAULT_ASPECT,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
            min_distance: options.min_distance,
            max_distance: options.max_distance,
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
            view_proj: Mat4::IDENTITY,
            inverse_view_proj: Mat4::IDENTITY,
        };
        camera.distance = camera.clamp_distance(camera.distance);
        camera.update_view();
        camera.update_projection();
        camera.update_combined();
        camera
    }

    /// Re-read projection and distance limits from `options`.
    ///
    /// # Errors
    ///
    /// [`SculptError::InvalidOptions`] if `options` fail validation; the
    /// camera is left untouched.
    pub fn apply_options(
        &mut self,
        options: &CameraOptions,
    ) -> Result<(), SculptError> {
        options.validate()?;
        self.fovy = options.fovy;
        self.znear = options.znear;
        self.zfar = options.zfar;
        self.min_distance = options.min_distance;
        self.max_distance = options.max_distance;
        self.distance = self.clamp_distance(self.distance);
        self.update_view();
        self.update_projection();
        self.update_combined();
        Ok(())
    }

    // -- Mutation --

    /// Orbit by the given angle deltas in degrees.
    ///
    /// The azimuth wraps into `[0, 360)`; the elevation is clamped to
    /// `[-89, 89]`.
    pub fn rotate(&mut self, horizontal_delta: f32, vertical_delta: f32) {
        self.horizontal_angle =
            wrap_degrees(self.horizontal_angle + horizontal_delta);
        self.vertical_angle = (self.vertical_angle + vertical_delta)
            .clamp(-MAX_VERTICAL_ANGLE, MAX_VERTICAL_ANGLE);
        self.update_view();
        self.update_combined();
    }

    /// Move toward (negative) or away from (positive) the target.
    pub fn zoom(&mut self, delta: f32) {
        self.distance = self.clamp_distance(self.distance + delta);
        self.update_view();
        self.update_combined();
    }

    /// Slide the target in the camera's screen plane.
    ///
    /// # Errors
    ///
    /// [`SculptError::ZeroLengthVector`] if the eye coincides with the
    /// target, which the distance clamp rules out in practice. The camera
    /// is left untouched on error.
    pub fn pan(
        &mut self,
        horizontal_delta: f32,
        vertical_delta: f32,
    ) -> Result<(), SculptError> {
        let forward = try_unit(self.target - self.position())?;
        let right = try_unit(forward.cross(Vec3::Y))?;
        let up = try_unit(right.cross(forward))?;

        self.target += right * horizontal_delta + up * vertical_delta;
        self.update_view();
        self.update_combined();
        Ok(())
    }

    /// Jump the orbit target to `point`.
    pub fn set_target(&mut self, point: Vec3) {
        self.target = point;
        self.update_view();
        self.update_combined();
    }

    /// Record the drawable size in pixels.
    ///
    /// # Errors
    ///
    /// [`SculptError::DegenerateViewport`] if either dimension is zero; the
    /// previous viewport stays in effect.
    pub fn set_viewport(
        &mut self,
        width: u32,
        height: u32,
    ) -> Result<(), SculptError> {
        if width == 0 || height == 0 {
            return Err(SculptError::DegenerateViewport { width, height });
        }
        self.viewport_width = width;
        self.viewport_height = height;
        self.aspect = width as f32 / height as f32;
        self.update_projection();
        self.update_combined();
        Ok(())
    }

    // -- Queries --

    /// Cast a world-space ray through a pixel.
    ///
    /// `screen_pos` is in pixels with the origin at the top-left and Y
    /// growing downward. The ray starts on the near plane and points
    /// toward the matching far-plane point.
    ///
    /// # Errors
    ///
    /// [`SculptError::DegenerateViewport`] before a viewport is set.
    pub fn screen_pos_to_world_ray(
        &self,
        screen_pos: Vec2,
    ) -> Result<Ray, SculptError> {
        if self.viewport_width == 0 || self.viewport_height == 0 {
            return Err(SculptError::DegenerateViewport {
                width: self.viewport_width,
                height: self.viewport_height,
            });
        }

        let ndc_x = 2.0 * screen_pos.x / self.viewport_width as f32 - 1.0;
        let ndc_y = 1.0 - 2.0 * screen_pos.y / self.viewport_height as f32;

        let near = self.unproject(Vec4::new(ndc_x, ndc_y, -1.0, 1.0));
        let far = self.unproject(Vec4::new(ndc_x, ndc_y, 1.0, 1.0));

        Ok(Ray::new(near, try_unit(far - near)?))
    }

    /// Unit vector from the target back toward the eye.
    #[must_use]
    pub fn look_direction(&self) -> Vec3 {
        self.orbit_offset() / self.distance
    }

    /// Eye position in world space.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.target + self.orbit_offset()
    }

    /// Orbit target.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Current orbit distance.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Azimuth in degrees, `[0, 360)`.
    #[must_use]
    pub fn horizontal_angle(&self) -> f32 {
        self.horizontal_angle
    }

    /// Elevation in degrees, `[-89, 89]`.
    #[must_use]
    pub fn vertical_angle(&self) -> f32 {
        self.vertical_angle
    }

    /// Viewport `(width, height)` in pixels; `(0, 0)` until configured.
    #[must_use]
    pub fn viewport(&self) -> (u32, u32) {
        (self.viewport_width, self.viewport_height)
    }

    /// Viewport center in pixels.
    #[must_use]
    pub fn viewport_center(&self) -> Vec2 {
        Vec2::new(
            self.viewport_width as f32 / 2.0,
            self.viewport_height as f32 / 2.0,
        )
    }

    /// Aspect ratio (width / height).
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// World-to-view matrix.
    #[must_use]
    pub fn view(&self) -> Mat4 {
        self.view
    }

    /// View-to-clip matrix (OpenGL depth range).
    #[must_use]
    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    /// Combined `projection * view`.
    #[must_use]
    pub fn view_proj(&self) -> Mat4 {
        self.view_proj
    }

    /// Inverse of [`view_proj`](Self::view_proj).
    #[must_use]
    pub fn inverse_view_proj(&self) -> Mat4 {
        self.inverse_view_proj
    }

    // -- Derived transforms --

    fn orbit_offset(&self) -> Vec3 {
        spherical_offset(
            self.distance,
            self.vertical_angle,
            self.horizontal_angle,
        )
    }

    fn clamp_distance(&self, distance: f32) -> f32 {
        distance.clamp(self.min_distance, self.max_distance)
    }

    fn unproject(&self, clip: Vec4) -> Vec3 {
        let world = self.inverse_view_proj * clip;
        world.truncate() / world.w
    }

    fn update_view(&mut self) {
        self.view = Mat4::look_at_rh(self.position(), self.target, Vec3::Y);
    }

    fn update_projection(&mut self) {
        self.projection = Mat4::perspective_rh_gl(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        );
    }

    fn update_combined(&mut self) {
        self.view_proj = self.projection * self.view;
        self.inverse_view_proj = self.view_proj.inverse();
    }
}

/// Wrap an angle in degrees into `[0, 360)`.
fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360.
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform holding the view-projection matrix and lighting inputs.
pub struct CameraUniform {
    /// Combined view-projection matrix (column-major).
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Padding for GPU alignment.
    pub(crate) _pad0: f32,
    /// Direction toward the camera, used as the light direction.
    pub light_dir: [f32; 3],
    /// Padding for GPU alignment.
    pub(crate) _pad1: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a uniform with identity view-projection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            _pad0: 0.0,
            light_dir: [0.0, 0.0, 1.0],
            _pad1: 0.0,
        }
    }

    /// Uniform reflecting `camera`'s current state.
    #[must_use]
    pub fn from_camera(camera: &Camera) -> Self {
        let mut uniform = Self::new();
        uniform.update_view_proj(camera);
        uniform
    }

    /// Update uniform fields from the given camera's current state.
    pub fn update_view_proj(&mut self, camera: &Camera) {
        self.view_proj = camera.view_proj().to_cols_array_2d();
        self.position = camera.position().to_array();
        self.light_dir = camera.look_direction().to_array();
    }
}
