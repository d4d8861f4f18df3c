//! Camera system for 3D scene viewing.
//!
//! Provides an orbit camera with inertia smoothing, shortest-path yaw,
//! clamped pitch and distance, and automatic framing of scene bounds.

/// Bounding boxes and their aggregation over a scene hierarchy.
pub mod bounds;
/// Orbit camera controller.
pub mod orbit;
/// Orbit parameters and the angle math behind them.
pub mod state;

pub use bounds::BoundingBox;
pub use orbit::OrbitCamera;
pub use state::OrbitState;
