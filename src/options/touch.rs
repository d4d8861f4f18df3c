use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Touch", inline)]
#[serde(default)]
/// Touch gesture sensitivities.
pub struct TouchOptions {
    /// Degrees of orbit per pixel of one-finger drag.
    #[schemars(title = "Orbit Sensitivity", range(min = 0.05, max = 2.0), extend("step" = 0.05))]
    pub orbit_sensitivity: f32,
    /// Pinch zoom speed. Higher is faster.
    #[schemars(title = "Distance Sensitivity", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub distance_sensitivity: f32,
}

impl Default for TouchOptions {
    fn default() -> Self {
        Self {
            orbit_sensitivity: 0.4,
            distance_sensitivity: 0.2,
        }
    }
}
