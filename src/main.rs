//! Headless sculpting session: replays a scripted gesture sequence
//! against the engine while a second thread consumes render frames.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use voxsculpt::input::GestureEvent;
use voxsculpt::options::Options;
use voxsculpt::scene::FrameReader;
use voxsculpt::{SculptCommand, SculptEngine, SculptError, Tool, ToolOutcome};

const VIEWPORT: (u32, u32) = (1280, 720);

/// A short session: build a small wall, look around, then knock a
/// voxel out of it.
fn script() -> Vec<GestureEvent> {
    let (w, h) = (VIEWPORT.0 as f32, VIEWPORT.1 as f32);
    let center = GestureEvent::Tap {
        x: w / 2.0,
        y: h / 2.0,
    };
    vec![
        center,
        center,
        GestureEvent::Drag {
            dx: -120.0,
            dy: 40.0,
            pointers: 1,
        },
        center,
        GestureEvent::Pinch { delta: 150.0 },
        GestureEvent::Drag {
            dx: 30.0,
            dy: -10.0,
            pointers: 2,
        },
        GestureEvent::Release,
        GestureEvent::DoubleTap,
        GestureEvent::ToolSelected(Tool::Remove),
        center,
        GestureEvent::ToolSelected(Tool::Paint),
        center,
    ]
}

fn spawn_renderer(
    mut reader: FrameReader,
    running: Arc<AtomicBool>,
) -> Result<thread::JoinHandle<u32>, SculptError> {
    thread::Builder::new()
        .name("render".to_owned())
        .spawn(move || {
            let mut frames = 0;
            while running.load(Ordering::Acquire) || reader.has_update() {
                if reader.has_update() {
                    let frame = reader.latest();
                    let instances = frame.instances();
                    log::debug!(
                        "frame {frames}: {} voxels, eye {:?}",
                        instances.len(),
                        frame.camera.position
                    );
                    frames += 1;
                }
                thread::sleep(Duration::from_millis(1));
            }
            frames
        })
        .map_err(SculptError::ThreadSpawn)
}

fn run(options: Options) -> Result<(), SculptError> {
    let (mut engine, reader) = SculptEngine::new(options)?;
    let running = Arc::new(AtomicBool::new(true));
    let renderer = spawn_renderer(reader, Arc::clone(&running))?;

    let _ = engine.execute(SculptCommand::Resize {
        width: VIEWPORT.0,
        height: VIEWPORT.1,
    })?;
    for event in script() {
        match engine.handle_gesture(event)? {
            ToolOutcome::Added(id) => log::info!("added {id}"),
            ToolOutcome::Removed(voxel) => {
                log::info!("removed {} at {}", voxel.id(), voxel.position());
            }
            ToolOutcome::Unchanged => {}
        }
    }

    running.store(false, Ordering::Release);
    let frames = renderer.join().unwrap_or_else(|_| {
        log::error!("render thread panicked");
        0
    });

    let scene = engine.scene();
    log::info!(
        "session done: {} voxels, selected {} at {}, {frames} frames rendered",
        scene.voxel_count(),
        scene.selected_voxel().id(),
        scene.selected_voxel().position()
    );
    Ok(())
}

fn main() {
    env_logger::init();

    let options = match std::env::args().nth(1) {
        Some(path) => match Options::load(Path::new(&path)) {
            Ok(options) => options,
            Err(e) => {
                log::error!("{path}: {e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    if let Err(e) = run(options) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
