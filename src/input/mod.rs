//! Input adapters that drive an [`OrbitCamera`](crate::camera::OrbitCamera):
//! touch gestures and a keyboard reset to the starting view.

/// Platform-agnostic touch event types.
pub mod event;
/// Home-pose snapshot and keyboard reset.
pub mod keyboard;
/// One- and two-finger gesture interpretation.
pub mod touch;

pub use event::{Touch, TouchEvent, TouchPhase};
pub use keyboard::{InputSource, KeyAction, KeyPresses, KeyboardInput};
pub use touch::TouchInput;
