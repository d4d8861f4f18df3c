//! Host-engine capabilities consumed by the camera and input controllers.
//!
//! The controllers never talk to an engine directly. They read the scene
//! through [`SceneNode`], drive the camera transform through [`CameraNode`]
//! and query the drawing surface through [`Viewport`]. Hosts implement these
//! traits over their own entity handles; [`Node`], [`PerspectiveCamera`] and
//! [`ViewportSize`] are in-memory implementations for headless use and
//! tests.

/// In-memory perspective camera implementing [`CameraNode`].
pub mod camera;
/// In-memory scene node implementing [`SceneNode`].
pub mod node;

use glam::{Mat3, Quat, Vec2, Vec3};

pub use camera::PerspectiveCamera;
pub use node::Node;

use crate::camera::bounds::BoundingBox;

/// A node in the host scene hierarchy.
pub trait SceneNode {
    /// Name used to resolve a configured focus entity.
    fn name(&self) -> &str;

    /// World-space bounds of every mesh attached directly to this node.
    fn mesh_bounds(&self) -> &[BoundingBox];

    /// Direct children, in traversal order.
    fn children(&self) -> &[Self]
    where
        Self: Sized;

    /// Depth-first search for the first node (including `self`) named
    /// `name`.
    fn find(&self, name: &str) -> Option<&Self>
    where
        Self: Sized,
    {
        if self.name() == name {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find(name))
    }
}

/// The host camera entity the orbit controller positions every frame.
///
/// Angles are in degrees. Forward is `-Z` in camera space and up is `+Y`.
pub trait CameraNode {
    /// World-space position.
    fn position(&self) -> Vec3;

    /// Move the camera to a world-space position.
    fn set_position(&mut self, position: Vec3);

    /// World-space rotation.
    fn rotation(&self) -> Quat;

    /// Replace the world-space rotation.
    fn set_rotation(&mut self, rotation: Quat);

    /// Field of view in degrees, measured along the axis selected by
    /// [`set_horizontal_fov`](Self::set_horizontal_fov).
    fn fov(&self) -> f32;

    /// Select whether [`fov`](Self::fov) spans the horizontal (`true`) or
    /// vertical (`false`) axis of the viewport.
    fn set_horizontal_fov(&mut self, horizontal: bool);

    /// Project a screen point (pixels, origin top-left) onto the pixel's
    /// ray, at view depth `depth` in front of the camera.
    fn screen_to_world(&self, screen: Vec2, depth: f32) -> Vec3;

    /// World-space forward direction.
    fn forward(&self) -> Vec3 {
        self.rotation() * Vec3::NEG_Z
    }

    /// Rotate in place so forward points at `target`, keeping `+Y` up.
    ///
    /// Leaves the rotation untouched when `target` coincides with the
    /// camera position.
    fn look_at(&mut self, target: Vec3) {
        let back = self.position() - target;
        if back.length_squared() <= f32::EPSILON {
            return;
        }
        let z = back.normalize();
        // Looking straight up or down: fall back to +Z as the up reference
        let up = if z.cross(Vec3::Y).length_squared() <= f32::EPSILON {
            Vec3::Z
        } else {
            Vec3::Y
        };
        let x = up.cross(z).normalize();
        let y = z.cross(x);
        self.set_rotation(Quat::from_mat3(&Mat3::from_cols(x, y, z)));
    }
}

/// Size of the surface the camera renders into.
pub trait Viewport {
    /// Width in physical pixels.
    fn width(&self) -> u32;
    /// Height in physical pixels.
    fn height(&self) -> u32;
}

/// Plain width/height pair implementing [`Viewport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportSize {
    /// Width in physical pixels.
    pub width: u32,
    /// Height in physical pixels.
    pub height: u32,
}

impl ViewportSize {
    /// Create a viewport of the given size.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Viewport for ViewportSize {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn look_at_points_forward_at_target() {
        let mut camera = PerspectiveCamera::default();
        camera.set_position(Vec3::new(3.0, 4.0, 5.0));
        camera.look_at(Vec3::new(-1.0, 0.0, 2.0));

        let expected = (Vec3::new(-1.0, 0.0, 2.0) - Vec3::new(3.0, 4.0, 5.0))
            .normalize();
        assert!(approx(camera.forward(), expected));
        // Up stays in the vertical half-space
        assert!((camera.rotation() * Vec3::Y).y > 0.0);
    }

    #[test]
    fn look_at_straight_down_is_stable() {
        let mut camera = PerspectiveCamera::default();
        camera.set_position(Vec3::new(0.0, 10.0, 0.0));
        camera.look_at(Vec3::ZERO);
        assert!(approx(camera.forward(), Vec3::NEG_Y));
    }

    #[test]
    fn look_at_own_position_keeps_rotation() {
        let mut camera = PerspectiveCamera::default();
        camera.set_rotation(Quat::from_rotation_y(30_f32.to_radians()));
        let before = camera.rotation();
        camera.look_at(camera.position());
        assert_eq!(camera.rotation(), before);
    }

    #[test]
    fn find_searches_depth_first() {
        let scene = Node::new("root").with_child(
            Node::new("a").with_child(Node::new("target").with_mesh(
                BoundingBox::new(Vec3::ONE, Vec3::splat(2.0)),
            )),
        );
        let found = scene.find("target").map(|node| node.mesh_bounds().len());
        assert_eq!(found, Some(1));
        assert!(scene.find("missing").is_none());
        assert_eq!(scene.find("root").map(|node| node.name()), Some("root"));
    }
}
