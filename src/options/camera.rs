use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Orbit Camera", inline)]
#[serde(default)]
/// Orbit camera limits, smoothing and framing behavior.
pub struct OrbitCameraOptions {
    /// Closest the camera may get to the pivot.
    #[schemars(title = "Distance Min", range(min = 0.0))]
    pub distance_min: f32,
    /// Farthest the camera may get from the pivot. 0 means no limit.
    #[schemars(title = "Distance Max", range(min = 0.0))]
    pub distance_max: f32,
    /// Lowest pitch in degrees.
    #[schemars(title = "Pitch Angle Min", range(min = -90.0, max = 90.0), extend("step" = 1.0))]
    pub pitch_angle_min: f32,
    /// Highest pitch in degrees.
    #[schemars(title = "Pitch Angle Max", range(min = -90.0, max = 90.0), extend("step" = 1.0))]
    pub pitch_angle_max: f32,
    /// Seconds for the camera to catch up with input. 0 is fully
    /// responsive.
    #[schemars(title = "Inertia Factor", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub inertia_factor: f32,
    /// Name of the node to frame. Unset frames the whole scene.
    #[schemars(skip)]
    pub focus_entity: Option<String>,
    /// Frame the focus entity when the camera initializes.
    #[schemars(title = "Frame on Start")]
    pub frame_on_start: bool,
}

impl Default for OrbitCameraOptions {
    fn default() -> Self {
        Self {
            distance_min: 0.0,
            distance_max: 0.0,
            pitch_angle_min: -90.0,
            pitch_angle_max: 90.0,
            inertia_factor: 0.0,
            focus_entity: None,
            frame_on_start: true,
        }
    }
}
