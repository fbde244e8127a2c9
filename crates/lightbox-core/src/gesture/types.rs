use serde::{Deserialize, Serialize};

use crate::geometry::Translate;

/// Cumulative displacement since the gesture started.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GestureDelta {
    pub dx: f32,
    pub dy: f32,
}

impl GestureDelta {
    pub fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }

    pub fn is_zero(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }
}

/// Release velocity in gesture-delta per millisecond.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub vx: f32,
    pub vy: f32,
}

impl Velocity {
    pub fn new(vx: f32, vy: f32) -> Self {
        Self { vx, vy }
    }
}

/// What a moving gesture is doing, as decided frame by frame.
///
/// Taps have no movement and are reported by [`ReleaseKind`] instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureKind {
    Pinch,
    Pan,
    /// Vertical drag at resting scale previewing a dismiss.
    SwipeDismiss,
    /// Horizontal drag at resting scale, left to the pager.
    SwipePage,
}

impl std::fmt::Display for GestureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pinch => write!(f, "Pinch"),
            Self::Pan => write!(f, "Pan"),
            Self::SwipeDismiss => write!(f, "Swipe Dismiss"),
            Self::SwipePage => write!(f, "Swipe Page"),
        }
    }
}

/// Live transform changes produced by one move event.
///
/// `None` fields are left as they are.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoveEffect {
    pub kind: GestureKind,
    pub translate_x: Option<f32>,
    pub translate_y: Option<f32>,
    pub scale: Option<f32>,
    pub background_opacity: Option<f32>,
    /// False once the vertical drag is large enough to lock horizontal paging.
    pub scroll_enabled: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleaseKind {
    /// Zero displacement, no pending tap: arms the single-tap timer.
    Tap,
    /// Second tap inside the double-tap window.
    DoubleTap,
    /// Ordinary drag or pinch end: spring back inside bounds.
    Settle,
    /// Fast vertical fling at resting scale.
    Dismiss,
}

/// Outcome of a release: the transform to settle to and what it means.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReleaseDecision {
    pub kind: ReleaseKind,
    pub scale: f32,
    pub translate: Translate,
    /// Target y of the fling-away animation, set only for [`ReleaseKind::Dismiss`].
    pub dismiss_y: Option<f32>,
    pub scroll_enabled: bool,
}
