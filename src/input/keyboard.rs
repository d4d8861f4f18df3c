use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::camera::{OrbitCamera, OrbitState};
use crate::options::KeybindingOptions;
use crate::scene::CameraNode;

/// Viewer actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// reset_view = "Space"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Cut back to the view captured after initialization.
    ResetView,
}

/// Host keyboard state queried once per frame.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format: `"Space"`,
/// `"KeyQ"`, `"Escape"`, etc.
pub trait InputSource {
    /// Whether `key` went down since the previous frame. Held keys do not
    /// repeat.
    fn was_pressed(&self, key: &str) -> bool;
}

/// Per-frame set of key presses implementing [`InputSource`].
#[derive(Debug, Clone, Default)]
pub struct KeyPresses {
    pressed: HashSet<String>,
}

impl KeyPresses {
    /// Record a key-down edge.
    pub fn press(&mut self, key: impl Into<String>) {
        let _ = self.pressed.insert(key.into());
    }

    /// Forget this frame's presses.
    pub fn clear(&mut self) {
        self.pressed.clear();
    }
}

impl InputSource for KeyPresses {
    fn was_pressed(&self, key: &str) -> bool {
        self.pressed.contains(key)
    }
}

/// Keyboard reset to the starting view.
///
/// [`post_initialize`](Self::post_initialize) snapshots the camera's target
/// orbit once it has settled; pressing the reset key cuts back to it.
#[derive(Debug, Clone, Default)]
pub struct KeyboardInput {
    keybindings: KeybindingOptions,
    home: Option<OrbitState>,
}

impl KeyboardInput {
    /// Create a keyboard handler with the given bindings.
    #[must_use]
    pub fn new(keybindings: KeybindingOptions) -> Self {
        Self {
            keybindings,
            home: None,
        }
    }

    /// Snapshot the camera's distance, yaw, pitch and pivot as the home
    /// pose. Call after the orbit camera has initialized.
    pub fn post_initialize<C: CameraNode>(&mut self, orbit: &OrbitCamera<C>) {
        self.home = Some(*orbit.target());
    }

    /// The captured home pose, if any.
    #[must_use]
    pub fn home(&self) -> Option<&OrbitState> {
        self.home.as_ref()
    }

    /// Check for the reset key and, if pressed, cut to the home pose.
    ///
    /// Returns `true` if the view was reset.
    pub fn update<C: CameraNode, I: InputSource>(
        &mut self,
        orbit: &mut OrbitCamera<C>,
        input: &I,
    ) -> bool {
        let Some(home) = self.home else {
            return false;
        };
        let Some(key) = self.keybindings.key_for(KeyAction::ResetView) else {
            return false;
        };
        if !input.was_pressed(key) {
            return false;
        }

        orbit.set_pivot_point(home.pivot);
        orbit.reset(home.yaw, home.pitch, home.distance);
        log::debug!("view reset to home pose");
        true
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use glam::Vec3;

    use super::*;
    use crate::camera::BoundingBox;
    use crate::options::OrbitCameraOptions;
    use crate::scene::{Node, PerspectiveCamera, ViewportSize};

    fn initialized_orbit() -> OrbitCamera<PerspectiveCamera> {
        let mut orbit = OrbitCamera::new(
            PerspectiveCamera::default(),
            OrbitCameraOptions {
                inertia_factor: 0.5,
                ..Default::default()
            },
        );
        orbit.camera_mut().set_position(Vec3::new(0.0, 5.0, 10.0));
        let scene = Node::new("root").with_mesh(BoundingBox::new(
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::ONE,
        ));
        orbit.initialize(&scene, &ViewportSize::new(800, 600));
        orbit
    }

    #[test]
    fn reset_key_restores_home_pose_without_lag() {
        let mut orbit = initialized_orbit();
        let mut keyboard = KeyboardInput::default();
        keyboard.post_initialize(&orbit);
        let home = *keyboard.home().unwrap();

        let _ = orbit.set_yaw(60.0);
        let _ = orbit.set_pitch(-30.0);
        let _ = orbit.set_distance(42.0);
        orbit.set_pivot_point(Vec3::new(7.0, 7.0, 7.0));
        orbit.update(0.1);

        let mut keys = KeyPresses::default();
        assert!(!keyboard.update(&mut orbit, &keys));

        keys.press("Space");
        assert!(keyboard.update(&mut orbit, &keys));

        assert_eq!(orbit.target(), &home);
        assert_eq!(orbit.current(), &home);

        orbit.update(0.01);
        assert_eq!(orbit.current(), &home);
    }

    #[test]
    fn reset_is_noop_before_post_initialize() {
        let mut orbit = initialized_orbit();
        let mut keyboard = KeyboardInput::default();
        let _ = orbit.set_distance(42.0);

        let mut keys = KeyPresses::default();
        keys.press("Space");
        assert!(!keyboard.update(&mut orbit, &keys));
        assert_eq!(orbit.distance(), 42.0);
    }

    #[test]
    fn custom_binding_replaces_space() {
        let mut orbit = initialized_orbit();
        let mut keyboard = KeyboardInput::new(KeybindingOptions {
            bindings: HashMap::from([(KeyAction::ResetView, "KeyH".into())]),
        });
        keyboard.post_initialize(&orbit);
        let _ = orbit.set_distance(42.0);

        let mut keys = KeyPresses::default();
        keys.press("Space");
        assert!(!keyboard.update(&mut orbit, &keys));

        keys.clear();
        keys.press("KeyH");
        assert!(keyboard.update(&mut orbit, &keys));
        assert_ne!(orbit.distance(), 42.0);
    }
}
