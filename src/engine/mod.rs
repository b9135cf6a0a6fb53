//! The editing engine: owns the scene, options, and active tool, executes
//! commands, and publishes render frames.

pub mod command;
mod options;

use self::command::SculptCommand;
use crate::camera::Camera;
use crate::error::SculptError;
use crate::input::{GestureEvent, GestureProcessor};
use crate::options::Options;
use crate::scene::frame::{self, FramePublisher, FrameReader, RenderFrame};
use crate::scene::Scene;
use crate::tool::{Tool, ToolOutcome};

/// Single-writer editing engine.
///
/// All mutation happens on the thread that owns the engine (the gesture
/// thread). After each command that changed anything, a fresh
/// [`RenderFrame`] is published to the [`FrameReader`] returned by
/// [`new`](Self::new), which the render thread polls without locking.
pub struct SculptEngine {
    scene: Scene,
    options: Options,
    tool: Tool,
    gestures: GestureProcessor,
    frames: FramePublisher,
}

impl SculptEngine {
    /// Create an engine with a seed voxel at the origin and the reader the
    /// render loop should poll.
    ///
    /// # Errors
    ///
    /// [`SculptError::InvalidOptions`] if `options` fail validation.
    pub fn new(options: Options) -> Result<(Self, FrameReader), SculptError> {
        options.validate()?;
        let scene = Scene::new(Camera::new(&options.camera)?);
        let (frames, reader) =
            frame::channel(&RenderFrame::from_scene(&scene, &options.display));
        let mut engine = Self {
            scene,
            gestures: GestureProcessor::new(options.input.clone()),
            options,
            tool: Tool::default(),
            frames,
        };
        engine.scene.mark_rendered();
        Ok((engine, reader))
    }

    /// Execute a command and publish a frame if the scene changed.
    ///
    /// Rejected commands leave the scene exactly as it was; the error is
    /// logged and returned.
    ///
    /// # Errors
    ///
    /// [`SculptError::DegenerateViewport`] for picks before a viewport is
    /// set or for a zero-sized resize; [`SculptError::ZeroLengthVector`]
    /// if a pan cannot build a camera basis.
    pub fn execute(
        &mut self,
        command: SculptCommand,
    ) -> Result<ToolOutcome, SculptError> {
        let result = self.apply(command);
        if let Err(e) = &result {
            log::warn!("{command:?} rejected: {e}");
        }
        let _ = self.publish_if_dirty();
        result
    }

    /// Translate a gesture with the current input speeds and execute the
    /// resulting command, if any.
    ///
    /// # Errors
    ///
    /// Same as [`execute`](Self::execute).
    pub fn handle_gesture(
        &mut self,
        event: GestureEvent,
    ) -> Result<ToolOutcome, SculptError> {
        match self.gestures.handle_event(event) {
            Some(command) => self.execute(command),
            None => Ok(ToolOutcome::Unchanged),
        }
    }

    fn apply(
        &mut self,
        command: SculptCommand,
    ) -> Result<ToolOutcome, SculptError> {
        match command {
            SculptCommand::RotateCamera {
                horizontal,
                vertical,
            } => self.scene.camera_mut().rotate(horizontal, vertical),
            SculptCommand::PanCamera {
                horizontal,
                vertical,
            } => self.scene.camera_mut().pan(horizontal, vertical)?,
            SculptCommand::Zoom { delta } => {
                self.scene.camera_mut().zoom(delta);
            }
            SculptCommand::CenterOnSelection => {
                self.scene.center_camera_on_selection();
            }
            SculptCommand::SetTool(tool) => {
                log::debug!("tool: {:?} -> {tool:?}", self.tool);
                self.tool = tool;
            }
            SculptCommand::UseTool { at } => {
                return self.tool.apply(&mut self.scene, at);
            }
            SculptCommand::SelectAtScreenCenter => {
                if let Some(id) = self.scene.select_voxel_at_screen_center()? {
                    log::debug!("selected {id}");
                }
            }
            SculptCommand::Resize { width, height } => {
                self.scene.camera_mut().set_viewport(width, height)?;
            }
        }
        Ok(ToolOutcome::Unchanged)
    }

    /// Publish the current scene if it changed since the last frame.
    /// Returns whether a frame was published.
    pub fn publish_if_dirty(&mut self) -> bool {
        if !self.scene.is_dirty() {
            return false;
        }
        self.frames.publish(RenderFrame::from_scene(
            &self.scene,
            &self.options.display,
        ));
        self.scene.mark_rendered();
        true
    }

    /// Read access to the scene.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Active tool.
    #[must_use]
    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Gesture translator fed by [`handle_gesture`](Self::handle_gesture).
    #[must_use]
    pub fn gestures(&self) -> &GestureProcessor {
        &self.gestures
    }
}
