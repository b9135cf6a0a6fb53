use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::SculptError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and orbit-distance parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Orbit distance the camera starts at.
    #[schemars(title = "Initial Distance", range(min = 5.0, max = 80.0))]
    pub initial_distance: f32,
    /// Closest the camera may zoom to its target.
    #[schemars(skip)]
    pub min_distance: f32,
    /// Farthest the camera may zoom from its target.
    #[schemars(skip)]
    pub max_distance: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            znear: 1.0,
            zfar: 200.0,
            initial_distance: 60.0,
            min_distance: 5.0,
            max_distance: 80.0,
        }
    }
}

impl CameraOptions {
    /// Reject values that cannot produce a usable orbit camera.
    ///
    /// # Errors
    ///
    /// [`SculptError::InvalidOptions`] naming the first offending field.
    pub fn validate(&self) -> Result<(), SculptError> {
        if !(self.fovy > 0.0 && self.fovy < 180.0) {
            return Err(SculptError::InvalidOptions(format!(
                "camera.fovy must be in (0, 180), got {}",
                self.fovy
            )));
        }
        if !(self.znear > 0.0 && self.zfar > self.znear) {
            return Err(SculptError::InvalidOptions(format!(
                "camera clip planes must satisfy 0 < znear < zfar, got {} / {}",
                self.znear, self.zfar
            )));
        }
        if !(self.min_distance > 0.0 && self.max_distance >= self.min_distance)
        {
            return Err(SculptError::InvalidOptions(format!(
                "camera distance limits must satisfy 0 < min <= max, got {} / {}",
                self.min_distance, self.max_distance
            )));
        }
        if !self.initial_distance.is_finite() {
            return Err(SculptError::InvalidOptions(
                "camera.initial_distance must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}
