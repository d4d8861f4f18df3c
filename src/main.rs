//! Headless orbit viewer demo.
//!
//! Builds a small in-memory scene, frames it, and replays a scripted
//! sequence of touch gestures, a viewport rotation and a keyboard reset at
//! 60 fps, logging the camera as it goes.
//!
//! ```text
//! orbit-viewer [options.toml]
//! ```

use std::path::Path;

use glam::Vec3;
use orbit_viewer::{
    camera::{BoundingBox, OrbitCamera},
    input::{KeyPresses, KeyboardInput, Touch, TouchEvent, TouchPhase, TouchInput},
    options::Options,
    scene::{Node, PerspectiveCamera, ViewportSize},
    util::frame_timing::FrameTiming,
    ViewerError,
};

const FRAMES: u32 = 150;
const LANDSCAPE: ViewportSize = ViewportSize {
    width: 1280,
    height: 720,
};
const PORTRAIT: ViewportSize = ViewportSize {
    width: 720,
    height: 1280,
};

/// One scripted host event.
enum Step {
    Touch(TouchEvent),
    Key(&'static str),
    Resize(ViewportSize),
}

fn main() -> Result<(), ViewerError> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let options = match std::env::args().nth(1) {
        Some(path) => Options::load(Path::new(&path))?,
        None => Options::default(),
    };

    let scene = demo_scene();
    let mut camera = PerspectiveCamera::default();
    camera.position = Vec3::new(0.0, 4.0, 12.0);
    camera.resize(LANDSCAPE.width, LANDSCAPE.height);

    let mut orbit = OrbitCamera::new(camera, options.camera.clone());
    orbit.initialize(&scene, &LANDSCAPE);

    let mut keyboard = KeyboardInput::new(options.keybindings.clone());
    keyboard.post_initialize(&orbit);
    let mut touch = TouchInput::new(options.touch);
    let mut keys = KeyPresses::default();
    let mut timing = FrameTiming::new(60);

    for frame in 0..FRAMES {
        std::thread::sleep(timing.time_until_next_frame());

        keys.clear();
        for step in script(frame) {
            match step {
                Step::Touch(event) => {
                    let _ = touch.handle_event(&mut orbit, &event);
                }
                Step::Key(key) => keys.press(key),
                Step::Resize(viewport) => {
                    orbit
                        .camera_mut()
                        .resize(viewport.width, viewport.height);
                    orbit.handle_resize(&viewport);
                }
            }
        }
        if keyboard.update(&mut orbit, &keys) {
            log::info!("frame {frame}: view reset");
        }

        let dt = timing.end_frame();
        orbit.update(dt);

        if frame % 30 == 0 {
            let current = orbit.current();
            log::info!(
                "frame {frame}: yaw {:.1} pitch {:.1} distance {:.2} \
                 pivot {:.2} eye {:.2} ({:.0} fps)",
                current.yaw,
                current.pitch,
                current.distance,
                current.pivot,
                orbit.camera().position,
                timing.fps(),
            );
        }
    }

    Ok(())
}

fn demo_scene() -> Node {
    let mut root = Node::new("root");
    root.push_child(
        Node::new("pedestal").with_mesh(BoundingBox::from_min_max(
            Vec3::new(-2.0, -0.5, -2.0),
            Vec3::new(2.0, 0.0, 2.0),
        )),
    );
    root.push_child(
        Node::new("statue")
            .with_mesh(BoundingBox::new(Vec3::new(0.0, 1.5, 0.0), Vec3::new(0.5, 1.5, 0.5)))
            .with_child(Node::new("arm").with_mesh(BoundingBox::new(
                Vec3::new(0.9, 2.2, 0.0),
                Vec3::new(0.4, 0.1, 0.1),
            ))),
    );
    root
}

/// Host events for `frame`: a one-finger orbit, a pinch with a drift, a
/// portrait rotation and a keyboard reset.
fn script(frame: u32) -> Vec<Step> {
    let f = frame as f32;
    let one = |x: f32| vec![Touch::new(x, 360.0)];
    let two = |spread: f32, drift: f32| {
        vec![
            Touch::new(640.0 - spread + drift, 360.0 + drift),
            Touch::new(640.0 + spread + drift, 360.0 + drift),
        ]
    };

    match frame {
        10 => vec![Step::Touch(TouchEvent::new(TouchPhase::Start, one(600.0)))],
        11..=40 => vec![Step::Touch(TouchEvent::new(
            TouchPhase::Move,
            one(600.0 + (f - 10.0) * 4.0),
        ))],
        41 => vec![Step::Touch(TouchEvent::new(TouchPhase::End, Vec::new()))],
        50 => vec![Step::Touch(TouchEvent::new(TouchPhase::Start, two(100.0, 0.0)))],
        51..=70 => vec![Step::Touch(TouchEvent::new(
            TouchPhase::Move,
            two(100.0 + (f - 50.0) * 3.0, (f - 50.0) * 2.0),
        ))],
        71 => vec![Step::Touch(TouchEvent::new(TouchPhase::End, Vec::new()))],
        80 => vec![Step::Resize(PORTRAIT)],
        100 => vec![Step::Key("Space")],
        110 => vec![Step::Resize(LANDSCAPE)],
        _ => Vec::new(),
    }
}
