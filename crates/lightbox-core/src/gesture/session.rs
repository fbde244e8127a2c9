use std::time::Duration;

use crate::geometry::{distance, Point, Transform};

/// Scratch state of one touch sequence, from first contact to release.
///
/// Created on gesture start and dropped on release or termination.
#[derive(Clone, Debug, PartialEq)]
pub struct GestureSession {
    started_at: Duration,
    initial_touches: Vec<Point>,
    touch_count: usize,
    start: Transform,
    previous_tap: Option<Duration>,
}

impl GestureSession {
    /// `start` is the committed transform the gesture builds on; `previous_tap`
    /// is the release time of a tap still waiting for its double-tap window.
    pub fn new(
        touches: &[Point],
        start: Transform,
        now: Duration,
        previous_tap: Option<Duration>,
    ) -> Self {
        Self {
            started_at: now,
            initial_touches: touches.to_vec(),
            touch_count: touches.len(),
            start,
            previous_tap,
        }
    }

    /// Re-measure the pinch anchors, e.g. when a second finger joins.
    pub fn refresh_baseline(&mut self, touches: &[Point]) {
        self.initial_touches = touches.to_vec();
        self.touch_count = touches.len();
    }

    pub(crate) fn set_touch_count(&mut self, count: usize) {
        self.touch_count = count;
    }

    pub fn started_at(&self) -> Duration {
        self.started_at
    }

    pub fn initial_touches(&self) -> &[Point] {
        &self.initial_touches
    }

    pub fn initial_distance(&self) -> f32 {
        distance(&self.initial_touches)
    }

    pub fn touch_count(&self) -> usize {
        self.touch_count
    }

    pub fn start(&self) -> Transform {
        self.start
    }

    pub fn previous_tap(&self) -> Option<Duration> {
        self.previous_tap
    }
}
