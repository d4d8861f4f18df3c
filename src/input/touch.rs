//! Touch gestures for the orbit camera.
//!
//! One finger orbits. Two fingers pinch to zoom and drag to pan the pivot.
//! Start, end and cancel all just re-sample the active touches, so lifting
//! one finger of a pinch hands over to orbiting without a jump.

use glam::Vec2;

use super::event::{Touch, TouchEvent, TouchPhase};
use crate::camera::OrbitCamera;
use crate::options::TouchOptions;
use crate::scene::CameraNode;

/// Converts touch events into orbit camera target changes.
#[derive(Debug, Clone)]
pub struct TouchInput {
    options: TouchOptions,
    last_touch_point: Vec2,
    last_pinch_mid_point: Vec2,
    last_pinch_distance: f32,
}

impl Default for TouchInput {
    fn default() -> Self {
        Self::new(TouchOptions::default())
    }
}

impl TouchInput {
    /// Create a touch handler with the given sensitivities.
    #[must_use]
    pub fn new(options: TouchOptions) -> Self {
        Self {
            options,
            last_touch_point: Vec2::ZERO,
            last_pinch_mid_point: Vec2::ZERO,
            last_pinch_distance: 0.0,
        }
    }

    /// Active sensitivities.
    #[must_use]
    pub fn options(&self) -> &TouchOptions {
        &self.options
    }

    /// Mutable access to the sensitivities for reconfiguration.
    pub fn options_mut(&mut self) -> &mut TouchOptions {
        &mut self.options
    }

    /// Process a touch event.
    ///
    /// Returns `true` if the camera target changed.
    pub fn handle_event<C: CameraNode>(
        &mut self,
        orbit: &mut OrbitCamera<C>,
        event: &TouchEvent,
    ) -> bool {
        match event.phase {
            TouchPhase::Start | TouchPhase::End | TouchPhase::Cancel => {
                self.on_touch_start_end_cancel(&event.touches);
                false
            }
            TouchPhase::Move => self.on_touch_move(orbit, &event.touches),
        }
    }

    fn on_touch_start_end_cancel(&mut self, touches: &[Touch]) {
        match touches {
            [touch] => self.last_touch_point = (*touch).into(),
            [a, b] => {
                self.last_pinch_distance = pinch_distance(*a, *b);
                self.last_pinch_mid_point = mid_point(*a, *b);
            }
            _ => {}
        }
    }

    fn on_touch_move<C: CameraNode>(
        &mut self,
        orbit: &mut OrbitCamera<C>,
        touches: &[Touch],
    ) -> bool {
        match touches {
            [touch] => {
                let point = Vec2::from(*touch);
                let delta = point - self.last_touch_point;
                let sensitivity = self.options.orbit_sensitivity;

                // Dragging right turns the camera left around the pivot
                let _ = orbit.set_pitch(orbit.pitch() - delta.y * sensitivity);
                let _ = orbit.set_yaw(orbit.yaw() - delta.x * sensitivity);

                self.last_touch_point = point;
                true
            }
            [a, b] => {
                let current_distance = pinch_distance(*a, *b);
                let pinch_delta = current_distance - self.last_pinch_distance;
                self.last_pinch_distance = current_distance;

                // Zoom step grows with distance so pinches feel the same
                // near and far
                let distance = orbit.distance();
                let _ = orbit.set_distance(
                    distance
                        - (pinch_delta * self.options.distance_sensitivity * 0.1)
                            * (distance * 0.1),
                );

                let mid = mid_point(*a, *b);
                self.pan(orbit, mid);
                self.last_pinch_mid_point = mid;
                true
            }
            _ => false,
        }
    }

    /// Shift the pivot by the world-space offset between the previous and
    /// current pinch midpoints, measured at the orbit distance.
    fn pan<C: CameraNode>(&self, orbit: &mut OrbitCamera<C>, mid: Vec2) {
        let depth = orbit.distance();
        let camera = orbit.camera();
        let from = camera.screen_to_world(mid, depth);
        let to = camera.screen_to_world(self.last_pinch_mid_point, depth);

        let pivot = orbit.pivot_point() + (to - from);
        orbit.set_pivot_point(pivot);
    }
}

fn pinch_distance(a: Touch, b: Touch) -> f32 {
    Vec2::from(a).distance(Vec2::from(b))
}

fn mid_point(a: Touch, b: Touch) -> Vec2 {
    (Vec2::from(a) + Vec2::from(b)) * 0.5
}

#[cfg(test)]
mod tests {
    use glam::{Quat, Vec3};

    use super::*;
    use crate::options::OrbitCameraOptions;

    /// Camera whose screen projection is a fixed linear map, so pan deltas
    /// are exact.
    #[derive(Debug, Default)]
    struct FlatCamera {
        position: Vec3,
        rotation: Quat,
    }

    impl CameraNode for FlatCamera {
        fn position(&self) -> Vec3 {
            self.position
        }

        fn set_position(&mut self, position: Vec3) {
            self.position = position;
        }

        fn rotation(&self) -> Quat {
            self.rotation
        }

        fn set_rotation(&mut self, rotation: Quat) {
            self.rotation = rotation;
        }

        fn fov(&self) -> f32 {
            45.0
        }

        fn set_horizontal_fov(&mut self, _horizontal: bool) {}

        fn screen_to_world(&self, screen: Vec2, depth: f32) -> Vec3 {
            Vec3::new(screen.x * 0.5, -screen.y * 0.5, -depth)
        }
    }

    fn orbit_at(distance: f32) -> OrbitCamera<FlatCamera> {
        let mut orbit =
            OrbitCamera::new(FlatCamera::default(), OrbitCameraOptions::default());
        orbit.reset(0.0, 0.0, distance);
        orbit
    }

    fn event(phase: TouchPhase, points: &[(f32, f32)]) -> TouchEvent {
        TouchEvent::new(
            phase,
            points.iter().map(|&(x, y)| Touch::new(x, y)).collect(),
        )
    }

    #[test]
    fn single_touch_drag_orbits_inverted() {
        let mut orbit = orbit_at(10.0);
        let mut touch = TouchInput::default();

        let _ = touch.handle_event(&mut orbit, &event(TouchPhase::Start, &[(100.0, 100.0)]));
        let changed =
            touch.handle_event(&mut orbit, &event(TouchPhase::Move, &[(110.0, 95.0)]));

        assert!(changed);
        assert!((orbit.yaw() - -4.0).abs() < 1e-5);
        assert!((orbit.pitch() - 2.0).abs() < 1e-5);
        assert_eq!(orbit.distance(), 10.0);

        // Deltas are measured from the last move, not the start
        let _ = touch.handle_event(&mut orbit, &event(TouchPhase::Move, &[(115.0, 95.0)]));
        assert!((orbit.yaw() - -6.0).abs() < 1e-5);
    }

    #[test]
    fn pinch_out_zooms_in_proportionally() {
        let mut orbit = orbit_at(10.0);
        let mut touch = TouchInput::default();

        let _ = touch.handle_event(
            &mut orbit,
            &event(TouchPhase::Start, &[(100.0, 100.0), (200.0, 100.0)]),
        );
        let _ = touch.handle_event(
            &mut orbit,
            &event(TouchPhase::Move, &[(90.0, 100.0), (210.0, 100.0)]),
        );

        // 20px wider: 10 - (20 * 0.2 * 0.1) * (10 * 0.1)
        assert!((orbit.distance() - 9.6).abs() < 1e-5);
        // Midpoint did not move
        assert_eq!(orbit.pivot_point(), Vec3::ZERO);
    }

    #[test]
    fn two_finger_drag_pans_pivot_with_fingers() {
        let mut orbit = orbit_at(10.0);
        let mut touch = TouchInput::default();

        let _ = touch.handle_event(
            &mut orbit,
            &event(TouchPhase::Start, &[(100.0, 100.0), (200.0, 100.0)]),
        );
        let _ = touch.handle_event(
            &mut orbit,
            &event(TouchPhase::Move, &[(110.0, 120.0), (210.0, 120.0)]),
        );

        assert_eq!(orbit.distance(), 10.0);
        // Midpoint moved (150,100) -> (160,120); pivot moves opposite the
        // world-space finger motion
        assert_eq!(orbit.pivot_point(), Vec3::new(-5.0, 10.0, 0.0));
        assert_eq!(orbit.yaw(), 0.0);
    }

    #[test]
    fn lifting_a_pinch_finger_resamples_orbit_point() {
        let mut orbit = orbit_at(10.0);
        let mut touch = TouchInput::default();

        let _ = touch.handle_event(
            &mut orbit,
            &event(TouchPhase::Start, &[(100.0, 100.0), (200.0, 100.0)]),
        );
        let _ = touch.handle_event(&mut orbit, &event(TouchPhase::End, &[(200.0, 100.0)]));
        let _ = touch.handle_event(&mut orbit, &event(TouchPhase::Move, &[(205.0, 100.0)]));

        assert!((orbit.yaw() - -2.0).abs() < 1e-5);
        assert_eq!(orbit.pitch(), 0.0);
    }

    #[test]
    fn other_touch_counts_are_ignored() {
        let mut orbit = orbit_at(10.0);
        let mut touch = TouchInput::default();
        let before = *orbit.target();

        let three = [(0.0, 0.0), (50.0, 50.0), (100.0, 0.0)];
        let _ = touch.handle_event(&mut orbit, &event(TouchPhase::Start, &three));
        assert!(!touch.handle_event(&mut orbit, &event(TouchPhase::Move, &three)));
        let _ = touch.handle_event(&mut orbit, &event(TouchPhase::Cancel, &[]));
        assert!(!touch.handle_event(&mut orbit, &event(TouchPhase::Move, &[])));

        assert_eq!(orbit.target(), &before);
    }

    #[test]
    fn drag_respects_pitch_limits() {
        let mut orbit = OrbitCamera::new(
            FlatCamera::default(),
            OrbitCameraOptions {
                pitch_angle_min: -10.0,
                pitch_angle_max: 10.0,
                ..Default::default()
            },
        );
        let mut touch = TouchInput::new(TouchOptions {
            orbit_sensitivity: 1.0,
            ..Default::default()
        });

        let _ = touch.handle_event(&mut orbit, &event(TouchPhase::Start, &[(0.0, 0.0)]));
        let _ = touch.handle_event(&mut orbit, &event(TouchPhase::Move, &[(0.0, 500.0)]));
        assert_eq!(orbit.pitch(), -10.0);
    }
}
