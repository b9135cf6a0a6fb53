//! Options methods for SculptEngine

use std::path::Path;

use super::SculptEngine;
use crate::error::SculptError;
use crate::options::Options;

impl SculptEngine {
    /// Replace options and push them to the camera, the gesture speeds,
    /// and the next frame.
    ///
    /// # Errors
    ///
    /// [`SculptError::InvalidOptions`] if `new` fails validation; the
    /// current options are kept.
    pub fn set_options(&mut self, new: Options) -> Result<(), SculptError> {
        new.validate()?;
        self.options = new;
        self.scene.camera_mut().apply_options(&self.options.camera)?;
        self.gestures.set_speeds(self.options.input.clone());
        let _ = self.publish_if_dirty();
        Ok(())
    }

    /// Load a named preset from `presets_dir`.
    /// Returns true on success.
    pub fn load_preset(&mut self, name: &str, presets_dir: &Path) -> bool {
        let path = presets_dir.join(format!("{name}.toml"));
        match Options::load(&path).and_then(|opts| self.set_options(opts)) {
            Ok(()) => {
                log::info!("Loaded preset '{name}'");
                true
            }
            Err(e) => {
                log::error!("Failed to load preset '{name}': {e}");
                false
            }
        }
    }

    /// Save the current options as a named preset.
    /// Returns true on success.
    pub fn save_preset(&self, name: &str, presets_dir: &Path) -> bool {
        let path = presets_dir.join(format!("{name}.toml"));
        match self.options.save(&path) {
            Ok(()) => {
                log::info!("Saved preset '{name}'");
                true
            }
            Err(e) => {
                log::error!("Failed to save preset '{name}': {e}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::GestureEvent;

    #[test]
    fn set_options_reclamps_distance() {
        let (mut engine, mut reader) =
            SculptEngine::new(Options::default()).unwrap();
        let _ = reader.latest();

        let mut options = Options::default();
        options.camera.max_distance = 30.0;
        engine.set_options(options).unwrap();
        assert_eq!(engine.scene().camera().distance(), 30.0);
        assert!(reader.has_update());
    }

    #[test]
    fn new_speeds_reach_gesture_translation() {
        let (mut engine, _reader) = SculptEngine::new(Options::default()).unwrap();
        let mut options = Options::default();
        options.input.zoom_speed = 0.5;
        engine.set_options(options).unwrap();

        let before = engine.scene().camera().distance();
        let _ = engine
            .handle_gesture(GestureEvent::Pinch { delta: 10.0 })
            .unwrap();
        let after = engine.scene().camera().distance();
        assert!((before - after - 5.0).abs() < 1e-4);
    }

    #[test]
    fn invalid_options_are_rejected() {
        let (mut engine, _reader) = SculptEngine::new(Options::default()).unwrap();
        let mut options = Options::default();
        options.camera.min_distance = 100.0;
        assert!(engine.set_options(options).is_err());
        assert_eq!(engine.options().camera.min_distance, 5.0);
    }

    #[test]
    fn preset_round_trip() {
        let dir = std::env::temp_dir()
            .join(format!("voxsculpt-presets-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let (mut engine, _reader) = SculptEngine::new(Options::default()).unwrap();
        let mut options = Options::default();
        options.input.zoom_speed = 0.5;
        engine.set_options(options).unwrap();
        assert!(engine.save_preset("fast-zoom", &dir));

        let (mut other, _reader) = SculptEngine::new(Options::default()).unwrap();
        assert!(other.load_preset("fast-zoom", &dir));
        assert_eq!(other.options().input.zoom_speed, 0.5);
        assert_eq!(other.gestures().speeds().zoom_speed, 0.5);
        assert!(!other.load_preset("missing", &dir));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
