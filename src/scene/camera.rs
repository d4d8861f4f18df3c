use glam::{Quat, Vec2, Vec3};

use super::CameraNode;

/// Perspective camera defined by a world transform and projection
/// parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct PerspectiveCamera {
    /// Eye (camera) position in world space.
    pub position: Vec3,
    /// World-space rotation; forward is `rotation * -Z`.
    pub rotation: Quat,
    /// Field of view in degrees along the axis selected by
    /// `horizontal_fov`.
    pub fov: f32,
    /// Whether `fov` spans the horizontal axis instead of the vertical one.
    pub horizontal_fov: bool,
    width: u32,
    height: u32,
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            fov: 45.0,
            horizontal_fov: false,
            width: 1280,
            height: 720,
        }
    }
}

impl PerspectiveCamera {
    /// Update the viewport size used for aspect ratio and unprojection.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    /// Viewport aspect ratio (width / height).
    #[must_use]
    pub fn aspect(&self) -> f32 {
        if self.height == 0 {
            return 1.0;
        }
        self.width as f32 / self.height as f32
    }

    /// Vertical field of view in degrees, converting from the horizontal
    /// axis when `horizontal_fov` is set.
    #[must_use]
    pub fn vertical_fov(&self) -> f32 {
        if self.horizontal_fov {
            let half = (self.fov.to_radians() * 0.5).tan() / self.aspect();
            (2.0 * half.atan()).to_degrees()
        } else {
            self.fov
        }
    }
}

impl CameraNode for PerspectiveCamera {
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
        self.rotation = rotation.normalize();
    }

    fn fov(&self) -> f32 {
        self.fov
    }

    fn set_horizontal_fov(&mut self, horizontal: bool) {
        self.horizontal_fov = horizontal;
    }

    fn screen_to_world(&self, screen: Vec2, depth: f32) -> Vec3 {
        if self.width == 0 || self.height == 0 {
            return self.position + self.forward() * depth;
        }

        let ndc = Vec2::new(
            screen.x / self.width as f32 * 2.0 - 1.0,
            1.0 - screen.y / self.height as f32 * 2.0,
        );
        let half_height = (self.vertical_fov().to_radians() * 0.5).tan();
        let half_width = half_height * self.aspect();

        // View-space ray scaled so its view depth is exactly `depth`
        let ray = Vec3::new(ndc.x * half_width, ndc.y * half_height, -1.0);
        self.position + self.rotation * (ray * depth)
    }
}
