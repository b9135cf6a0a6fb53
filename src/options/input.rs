use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Gestures", inline)]
#[serde(default)]
/// Scale factors from gesture deltas (pixels) to camera units.
pub struct InputOptions {
    /// Degrees of orbit per pixel of one-finger drag.
    #[schemars(title = "Rotate Speed", range(min = 0.05, max = 2.0), extend("step" = 0.05))]
    pub rotate_speed: f32,
    /// World units of pan per pixel of two-finger drag.
    #[schemars(title = "Pan Speed", range(min = 0.001, max = 0.2), extend("step" = 0.001))]
    pub pan_speed: f32,
    /// World units of zoom per pixel of pinch.
    #[schemars(title = "Zoom Speed", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub zoom_speed: f32,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            rotate_speed: 0.25,
            pan_speed: 0.02,
            zoom_speed: 0.1,
        }
    }
}
