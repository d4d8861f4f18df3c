/// Platform-agnostic touch events.
///
/// Hosts translate their native touch notifications into these and feed
/// them to a [`TouchInput`](super::TouchInput).
///
/// # Example
///
/// ```ignore
/// touch_input.handle_event(
///     &mut orbit,
///     &TouchEvent::new(TouchPhase::Move, vec![Touch::new(120.0, 80.0)]),
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TouchEvent {
    /// What happened.
    pub phase: TouchPhase,
    /// Every touch still on the surface after this event.
    pub touches: Vec<Touch>,
}

impl TouchEvent {
    /// Create an event from its phase and the active touches.
    #[must_use]
    pub fn new(phase: TouchPhase, touches: Vec<Touch>) -> Self {
        Self { phase, touches }
    }
}

/// Lifecycle stage of a touch event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    /// A finger landed.
    Start,
    /// One or more fingers moved.
    Move,
    /// A finger lifted.
    End,
    /// The platform aborted the gesture.
    Cancel,
}

/// A single touch point in physical pixels, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Touch {
    /// Horizontal position.
    pub x: f32,
    /// Vertical position.
    pub y: f32,
}

impl Touch {
    /// Create a touch at the given screen position.
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<Touch> for glam::Vec2 {
    fn from(touch: Touch) -> Self {
        Self::new(touch.x, touch.y)
    }
}
