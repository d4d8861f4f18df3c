use glam::Vec3;

use super::bounds::{aggregate_bounds, BoundingBox};
use super::state::{
    pitch_from_rotation, shortest_yaw, yaw_from_rotation, OrbitState,
};
use crate::options::OrbitCameraOptions;
use crate::scene::{CameraNode, SceneNode, Viewport};

/// Orbit camera controller revolving a host camera around a pivot point.
///
/// Input writes go to the *target* state through the setters; [`update`]
/// eases the *current* state toward it and positions the camera. Angles
/// are in degrees.
///
/// [`update`]: OrbitCamera::update
#[derive(Debug)]
pub struct OrbitCamera<C: CameraNode> {
    camera: C,
    options: OrbitCameraOptions,
    current: OrbitState,
    target: OrbitState,
    models_aabb: BoundingBox,
}

impl<C: CameraNode> OrbitCamera<C> {
    /// Wrap a host camera. Call [`initialize`](Self::initialize) once the
    /// scene is available.
    pub fn new(camera: C, mut options: OrbitCameraOptions) -> Self {
        options.inertia_factor = options.inertia_factor.max(0.0);
        Self {
            camera,
            options,
            current: OrbitState::default(),
            target: OrbitState::default(),
            models_aabb: BoundingBox::default(),
        }
    }

    /// Derive the starting orbit from the camera's pose and the scene.
    ///
    /// The camera is turned toward the focus subject, which becomes the
    /// pivot. With `frame_on_start` the subject is framed; otherwise the
    /// camera keeps its distance from the pivot.
    pub fn initialize<N: SceneNode, V: Viewport>(
        &mut self,
        scene: &N,
        viewport: &V,
    ) {
        self.handle_resize(viewport);

        let root = self.focus_root(scene);
        self.models_aabb = BoundingBox::default();
        let _ = aggregate_bounds(root, &mut self.models_aabb);

        let center = self.models_aabb.center;
        self.camera.look_at(center);
        self.current.pivot = center;
        self.target.pivot = center;

        let rotation = self.camera.rotation();
        self.current.yaw = yaw_from_rotation(rotation);
        self.current.pitch =
            self.clamp_pitch(pitch_from_rotation(rotation, self.current.yaw));
        self.camera.set_rotation(self.current.rotation());
        self.current.distance = 0.0;

        self.target.yaw = self.current.yaw;
        self.target.pitch = self.current.pitch;

        if self.options.frame_on_start {
            self.focus(root);
        } else {
            let separation = (self.camera.position() - center).length();
            self.current.distance = self.clamp_distance(separation);
        }
        self.target.distance = self.current.distance;

        log::debug!(
            "orbit camera initialized: yaw {:.1} pitch {:.1} distance {:.2} \
             pivot {}",
            self.current.yaw,
            self.current.pitch,
            self.current.distance,
            self.current.pivot,
        );
    }

    // ── Target state ──

    /// Target distance from the pivot.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.target.distance
    }

    /// Set the target distance, clamped to the configured range. Returns
    /// the stored value.
    pub fn set_distance(&mut self, distance: f32) -> f32 {
        self.target.distance = self.clamp_distance(distance);
        self.target.distance
    }

    /// Target pitch in degrees.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.target.pitch
    }

    /// Set the target pitch, clamped to
    /// `[-pitch_angle_max, -pitch_angle_min]`. Returns the stored value.
    pub fn set_pitch(&mut self, pitch: f32) -> f32 {
        self.target.pitch = self.clamp_pitch(pitch);
        self.target.pitch
    }

    /// Target yaw in degrees.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.target.yaw
    }

    /// Set the target yaw, rewritten so the camera turns the short way
    /// round from its current yaw. Returns the stored value.
    pub fn set_yaw(&mut self, yaw: f32) -> f32 {
        self.target.yaw = shortest_yaw(self.current.yaw, yaw);
        self.target.yaw
    }

    /// World-space point the camera orbits.
    #[must_use]
    pub fn pivot_point(&self) -> Vec3 {
        self.target.pivot
    }

    /// Move the orbit pivot.
    pub fn set_pivot_point(&mut self, pivot: Vec3) {
        self.target.pivot = pivot;
    }

    /// Smoothed state applied to the camera on the last update.
    #[must_use]
    pub fn current(&self) -> &OrbitState {
        &self.current
    }

    /// State the camera is easing toward.
    #[must_use]
    pub fn target(&self) -> &OrbitState {
        &self.target
    }

    /// Bounds computed by the last focus or reset-on-entity.
    #[must_use]
    pub fn bounds(&self) -> &BoundingBox {
        &self.models_aabb
    }

    /// The host camera.
    #[must_use]
    pub fn camera(&self) -> &C {
        &self.camera
    }

    /// Mutable access to the host camera.
    pub fn camera_mut(&mut self) -> &mut C {
        &mut self.camera
    }

    /// Active options.
    #[must_use]
    pub fn options(&self) -> &OrbitCameraOptions {
        &self.options
    }

    // ── Framing and resets ──

    /// Frame `node` and its descendants: pivot on their combined bounds
    /// and back off until the largest half-extent fits the field of view
    /// twice over. Takes effect without easing.
    pub fn focus<N: SceneNode>(&mut self, node: &N) {
        let meshes = aggregate_bounds(node, &mut self.models_aabb);

        let half_fov = 0.5 * self.camera.fov().to_radians();
        let distance =
            self.models_aabb.max_half_extent() / half_fov.tan() * 2.0;
        let _ = self.set_distance(distance);

        self.target.pivot = self.models_aabb.center;
        self.remove_inertia();

        log::debug!(
            "focused '{}' ({meshes} meshes): pivot {} distance {:.2}",
            node.name(),
            self.target.pivot,
            self.target.distance,
        );
    }

    /// Teleport the camera to `reset_point` looking at `look_at_point`,
    /// which becomes the pivot. The transform is updated immediately.
    pub fn reset_and_look_at_point(
        &mut self,
        reset_point: Vec3,
        look_at_point: Vec3,
    ) {
        self.target.pivot = look_at_point;
        self.camera.set_position(reset_point);
        self.camera.look_at(look_at_point);

        let _ = self.set_distance((look_at_point - reset_point).length());

        let rotation = self.camera.rotation();
        let yaw = self.set_yaw(yaw_from_rotation(rotation));
        let _ = self.set_pitch(pitch_from_rotation(rotation, yaw));

        self.remove_inertia();
        self.update_position();
    }

    /// Teleport the camera to `reset_point` looking at the center of
    /// `node`'s bounds.
    pub fn reset_and_look_at_entity<N: SceneNode>(
        &mut self,
        reset_point: Vec3,
        node: &N,
    ) {
        let _ = aggregate_bounds(node, &mut self.models_aabb);
        self.reset_and_look_at_point(reset_point, self.models_aabb.center);
    }

    /// Cut straight to the given orbit with no easing.
    pub fn reset(&mut self, yaw: f32, pitch: f32, distance: f32) {
        let _ = self.set_pitch(pitch);
        let _ = self.set_yaw(yaw);
        let _ = self.set_distance(distance);
        self.remove_inertia();
    }

    // ── Per-frame ──

    /// Ease the current state toward the target and reposition the camera.
    ///
    /// With `inertia_factor` 0 the target is applied in full; otherwise the
    /// step is `dt / inertia_factor`, capped at 1.
    pub fn update(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        let t = if self.options.inertia_factor == 0.0 {
            1.0
        } else {
            (dt / self.options.inertia_factor).min(1.0)
        };

        self.current.advance_toward(&self.target, t);
        self.update_position();
    }

    /// Match the FOV axis to the viewport so the subject stays in frame:
    /// horizontal on portrait viewports, vertical otherwise.
    pub fn handle_resize<V: Viewport>(&mut self, viewport: &V) {
        self.camera
            .set_horizontal_fov(viewport.height() > viewport.width());
    }

    // ── Runtime configuration ──

    /// Change the minimum distance, re-clamping the current distance into
    /// the target.
    pub fn set_distance_min(&mut self, value: f32) {
        self.options.distance_min = value;
        self.target.distance = self.clamp_distance(self.current.distance);
    }

    /// Change the maximum distance (0 = unbounded), re-clamping the current
    /// distance into the target.
    pub fn set_distance_max(&mut self, value: f32) {
        self.options.distance_max = value;
        self.target.distance = self.clamp_distance(self.current.distance);
    }

    /// Change the minimum pitch, re-clamping the current pitch into the
    /// target.
    pub fn set_pitch_angle_min(&mut self, value: f32) {
        self.options.pitch_angle_min = value;
        self.target.pitch = self.clamp_pitch(self.current.pitch);
    }

    /// Change the maximum pitch, re-clamping the current pitch into the
    /// target.
    pub fn set_pitch_angle_max(&mut self, value: f32) {
        self.options.pitch_angle_max = value;
        self.target.pitch = self.clamp_pitch(self.current.pitch);
    }

    /// Change the easing time constant in seconds. Negative values are
    /// treated as 0.
    pub fn set_inertia_factor(&mut self, value: f32) {
        self.options.inertia_factor = value.max(0.0);
    }

    /// Switch the focus subject by node name (`None` = whole scene).
    ///
    /// With `frame_on_start` the new subject is framed; otherwise the
    /// camera stays where it is and turns to look at it.
    pub fn set_focus_entity<N: SceneNode>(
        &mut self,
        name: Option<String>,
        scene: &N,
    ) {
        self.options.focus_entity = name;
        let root = self.focus_root(scene);
        if self.options.frame_on_start {
            self.focus(root);
        } else {
            let position = self.camera.position();
            self.reset_and_look_at_entity(position, root);
        }
    }

    /// Toggle framing on start. Turning it on frames the focus subject
    /// right away.
    pub fn set_frame_on_start<N: SceneNode>(&mut self, value: bool, scene: &N) {
        self.options.frame_on_start = value;
        if value {
            let root = self.focus_root(scene);
            self.focus(root);
        }
    }

    // ── Internals ──

    fn focus_root<'a, N: SceneNode>(&self, scene: &'a N) -> &'a N {
        let Some(name) = self.options.focus_entity.as_deref() else {
            return scene;
        };
        scene.find(name).unwrap_or_else(|| {
            log::warn!("focus entity '{name}' not found, using scene root");
            scene
        })
    }

    fn clamp_distance(&self, distance: f32) -> f32 {
        if self.options.distance_max > 0.0 {
            clamp(distance, self.options.distance_min, self.options.distance_max)
        } else {
            distance.max(self.options.distance_min)
        }
    }

    // Stored pitch is inverted relative to the configured angles
    fn clamp_pitch(&self, pitch: f32) -> f32 {
        clamp(
            pitch,
            -self.options.pitch_angle_max,
            -self.options.pitch_angle_min,
        )
    }

    fn remove_inertia(&mut self) {
        self.current = self.target;
    }

    fn update_position(&mut self) {
        self.camera.set_rotation(self.current.rotation());
        self.camera.set_position(self.current.eye());
    }
}

/// Clamp that tolerates inverted limits, letting `min` win.
#[inline]
fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.min(max).max(min)
}
