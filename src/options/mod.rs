//! Editor options with TOML persistence.
//!
//! Camera limits, gesture sensitivities, and render colors are
//! consolidated here. Options serialize to/from TOML so a platform shell
//! can ship or persist its own tuning.

mod camera;
mod display;
mod input;

use std::path::Path;

pub use camera::CameraOptions;
pub use display::DisplayOptions;
pub use input::InputOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::SculptError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[input]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection and distance limits.
    pub camera: CameraOptions,
    /// Gesture-to-camera scale factors.
    pub input: InputOptions,
    /// Renderer colors.
    pub display: DisplayOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Check cross-field constraints.
    ///
    /// # Errors
    ///
    /// [`SculptError::InvalidOptions`] if any section is unusable.
    pub fn validate(&self) -> Result<(), SculptError> {
        self.camera.validate()
    }

    /// Load and validate options from a TOML file. Missing fields use
    /// defaults.
    ///
    /// # Errors
    ///
    /// I/O, parse, or validation failure.
    pub fn load(path: &Path) -> Result<Self, SculptError> {
        let content = std::fs::read_to_string(path).map_err(SculptError::Io)?;
        let options: Self = toml::from_str(&content)
            .map_err(|e| SculptError::OptionsParse(e.to_string()))?;
        options.validate()?;
        log::info!("Loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Serialization or I/O failure.
    pub fn save(&self, path: &Path) -> Result<(), SculptError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SculptError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(SculptError::Io)?;
        }
        std::fs::write(path, content).map_err(SculptError::Io)?;
        log::info!("Saved options to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[input]
rotate_speed = 0.5
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.input.rotate_speed, 0.5);
        assert_eq!(opts.input.pan_speed, 0.02);
        assert_eq!(opts.camera.fovy, 45.0);
        assert_eq!(opts.display.voxel_color, [1.0, 0.5, 0.0, 1.0]);
    }

    #[test]
    fn defaults_match_editor_constants() {
        let cam = CameraOptions::default();
        assert_eq!(cam.znear, 1.0);
        assert_eq!(cam.zfar, 200.0);
        assert_eq!(cam.min_distance, 5.0);
        assert_eq!(cam.max_distance, 80.0);
        assert_eq!(cam.initial_distance, 60.0);
        assert!(Options::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_broken_camera() {
        let mut opts = Options::default();
        opts.camera.znear = 0.0;
        assert!(matches!(
            opts.validate(),
            Err(SculptError::InvalidOptions(_))
        ));

        let mut opts = Options::default();
        opts.camera.zfar = 0.5;
        assert!(opts.validate().is_err());

        let mut opts = Options::default();
        opts.camera.min_distance = 90.0;
        assert!(opts.validate().is_err());

        let mut opts = Options::default();
        opts.camera.fovy = 180.0;
        assert!(opts.validate().is_err());
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir()
            .join(format!("voxsculpt-options-{}", std::process::id()));
        let path = dir.join("editor.toml");
        let mut opts = Options::default();
        opts.input.zoom_speed = 0.3;
        opts.save(&path).unwrap();
        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded, opts);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_reports_parse_errors() {
        let dir = std::env::temp_dir()
            .join(format!("voxsculpt-bad-options-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.toml");
        std::fs::write(&path, "[camera]\nfovy = \"wide\"\n").unwrap();
        assert!(matches!(
            Options::load(&path),
            Err(SculptError::OptionsParse(_))
        ));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn schema_mentions_sections() {
        let schema = Options::json_schema();
        let text = format!("{:?}", schema.as_value());
        assert!(text.contains("camera"));
        assert!(text.contains("input"));
    }
}
