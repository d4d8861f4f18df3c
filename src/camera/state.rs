use glam::{Quat, Vec3};

/// Orbit parameters: angles in degrees, distance in world units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrbitState {
    /// Horizontal angle around the pivot. Unbounded.
    pub yaw: f32,
    /// Vertical angle, stored inverted (negative looks down on the pivot).
    pub pitch: f32,
    /// Distance from the pivot to the camera.
    pub distance: f32,
    /// World-space point the camera orbits.
    pub pivot: Vec3,
}

impl OrbitState {
    /// Move yaw, pitch and distance a fraction `t` of the way toward
    /// `target`. The pivot is copied, not interpolated. `t >= 1` lands
    /// exactly on the target.
    pub fn advance_toward(&mut self, target: &OrbitState, t: f32) {
        if t >= 1.0 {
            *self = *target;
            return;
        }
        self.yaw = lerp(self.yaw, target.yaw, t);
        self.pitch = lerp(self.pitch, target.pitch, t);
        self.distance = lerp(self.distance, target.distance, t);
        self.pivot = target.pivot;
    }

    /// Camera rotation for these angles: `Ry(yaw) * Rx(pitch)`.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw.to_radians())
            * Quat::from_rotation_x(self.pitch.to_radians())
    }

    /// Camera position: the pivot pushed back along forward by `distance`.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        self.pivot - self.rotation() * Vec3::NEG_Z * self.distance
    }
}

#[inline]
fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Yaw target reached from `current` by the shortest turn toward
/// `requested`.
///
/// The returned value differs from `current` by a delta in (-180, 180], so
/// interpolating toward it never spins the long way round.
#[must_use]
pub fn shortest_yaw(current: f32, requested: f32) -> f32 {
    let diff = requested - current;
    let remainder = diff % 360.0;
    let wrap = if remainder > 180.0 {
        -360.0
    } else if remainder <= -180.0 {
        360.0
    } else {
        0.0
    };
    // Whole turns folded away by the remainder; an unwrapped request comes
    // back bit-for-bit
    let turns = ((diff - remainder) / 360.0).round();
    requested - turns * 360.0 + wrap
}

/// Yaw in degrees of a camera rotation, from its forward vector projected
/// onto the horizontal plane.
#[must_use]
pub fn yaw_from_rotation(rotation: Quat) -> f32 {
    let forward = rotation * Vec3::NEG_Z;
    (-forward.x).atan2(-forward.z).to_degrees()
}

/// Pitch in degrees of a camera rotation once `yaw` has been removed.
#[must_use]
pub fn pitch_from_rotation(rotation: Quat, yaw: f32) -> f32 {
    let without_yaw = Quat::from_rotation_y(-yaw.to_radians()) * rotation;
    let forward = without_yaw * Vec3::NEG_Z;
    forward.y.atan2(-forward.z).to_degrees()
}
