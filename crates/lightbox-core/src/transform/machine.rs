//! Owner of the live transform of the active image.
//!
//! ```text
//! Resting --start--> Gesturing --release--> Settling --all tweens done--> Resting
//!    ^                                          |
//!    +------------- paging (instant) -----------+--dismiss done--> (controller closes)
//! any --close--> Closed
//! ```

use std::time::Duration;

use tracing::debug;

use crate::geometry::{
    resting_transform, scales_are_equal, ImageSize, Point, Transform, Viewport,
};
use crate::gesture::{
    classify_move, classify_release, GestureConfig, GestureContext, GestureDelta, GestureSession,
    MoveEffect, ReleaseDecision, ReleaseKind, Velocity,
};

use super::animation::Tween;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Resting,
    Gesturing,
    Settling,
    Closed,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Resting => write!(f, "Resting"),
            Self::Gesturing => write!(f, "Gesturing"),
            Self::Settling => write!(f, "Settling"),
            Self::Closed => write!(f, "Closed"),
        }
    }
}

/// Signalled by [`TransformMachine::advance`] when a settle pass finishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    /// Back at rest; the live transform equals the committed one.
    Settled,
    /// The fling-away finished; the viewer should close.
    Dismissed,
}

/// Tweens of one settle pass, joined before the pass counts as complete.
#[derive(Clone, Copy, Debug)]
struct Settle {
    scale: Option<Tween>,
    x: Tween,
    y: Tween,
    opacity: Option<Tween>,
    dismiss: bool,
}

impl Settle {
    fn tweens(&self) -> impl Iterator<Item = &Tween> {
        [Some(&self.x), Some(&self.y), self.scale.as_ref(), self.opacity.as_ref()]
            .into_iter()
            .flatten()
    }

    fn is_done(&self, now: Duration) -> bool {
        self.tweens().all(|t| t.is_done(now))
    }
}

pub struct TransformMachine {
    config: GestureConfig,
    phase: Phase,
    viewport: Viewport,
    image: Option<ImageSize>,
    resting: Option<Transform>,
    committed: Transform,
    live: Transform,
    background_opacity: f32,
    session: Option<GestureSession>,
    settle: Option<Settle>,
    scroll_enabled: bool,
}

fn context<'a>(
    config: &'a GestureConfig,
    image: Option<ImageSize>,
    viewport: Viewport,
    resting: Option<Transform>,
) -> Option<GestureContext<'a>> {
    Some(GestureContext {
        image: image?,
        viewport,
        resting: resting?,
        config,
    })
}

impl TransformMachine {
    pub fn new(config: GestureConfig, viewport: Viewport) -> Self {
        Self {
            config,
            phase: Phase::Closed,
            viewport,
            image: None,
            resting: None,
            committed: Transform::default(),
            live: Transform::default(),
            background_opacity: 0.0,
            session: None,
            settle: None,
            scroll_enabled: true,
        }
    }

    /// Make `image` the live image and snap it to its resting transform.
    ///
    /// Used when the viewer opens, on paging and after a viewport change. No
    /// animation runs; any session or settle pass in flight is dropped.
    pub fn reset_to_image(&mut self, image: Option<ImageSize>, viewport: Viewport) {
        self.viewport = viewport;
        self.image = image.filter(ImageSize::is_known);
        self.resting = self.image.and_then(|img| resting_transform(img, viewport));
        let resting = self.resting.unwrap_or_default();
        self.committed = resting;
        self.live = resting;
        self.background_opacity = 0.0;
        self.session = None;
        self.settle = None;
        self.scroll_enabled = true;
        self.phase = Phase::Resting;
    }

    /// Start a gesture session, or refresh the pinch baseline of the running one
    /// when the number of touches changed.
    ///
    /// Returns false when the input is ignored: viewer closed, image without a
    /// known size, or a dismiss already in flight.
    pub fn begin(
        &mut self,
        touches: &[Point],
        now: Duration,
        previous_tap: Option<Duration>,
    ) -> bool {
        if self.phase == Phase::Closed || self.resting.is_none() {
            return false;
        }

        if let Some(session) = self.session.as_mut() {
            if touches.len() != session.touch_count() {
                session.refresh_baseline(touches);
            }
            return true;
        }

        if let Some(settle) = self.settle.take() {
            if settle.dismiss {
                self.settle = Some(settle);
                return false;
            }
            self.live = self.committed;
            self.background_opacity = 0.0;
        }

        self.session = Some(GestureSession::new(
            touches,
            self.committed,
            now,
            previous_tap,
        ));
        self.phase = Phase::Gesturing;
        debug!(touches = touches.len(), "Gesture session started");
        true
    }

    /// Apply one move event to the live transform.
    pub fn update(&mut self, touches: &[Point], delta: GestureDelta) -> Option<MoveEffect> {
        let ctx = context(&self.config, self.image, self.viewport, self.resting)?;
        let session = self.session.as_mut()?;
        let effect = classify_move(session, &ctx, touches, delta);

        if let Some(x) = effect.translate_x {
            self.live.translate.x = x;
        }
        if let Some(y) = effect.translate_y {
            self.live.translate.y = y;
        }
        if let Some(scale) = effect.scale {
            self.live.scale = scale;
        }
        if let Some(opacity) = effect.background_opacity {
            self.background_opacity = opacity;
        }
        self.scroll_enabled = effect.scroll_enabled;
        Some(effect)
    }

    /// End the session and start settling towards the clamped transform.
    ///
    /// Every release settles, a tap included, so bounds are always re-validated.
    pub fn release(
        &mut self,
        delta: GestureDelta,
        velocity: Velocity,
        now: Duration,
    ) -> Option<ReleaseDecision> {
        let session = self.session.take()?;
        let Some(ctx) = context(&self.config, self.image, self.viewport, self.resting) else {
            self.phase = Phase::Resting;
            return None;
        };
        let decision = classify_release(&session, &ctx, delta, velocity, self.live.scale, now);

        // A double-tap moves translate in step with the zoom.
        let settle_for = if decision.kind == ReleaseKind::DoubleTap {
            self.config.double_tap_zoom_duration()
        } else {
            self.config.settle_duration()
        };
        let opacity = (self.background_opacity > 0.0).then(|| {
            Tween::new(
                self.background_opacity,
                0.0,
                now,
                self.config.fade_out_duration(),
            )
        });
        let scale = (decision.kind == ReleaseKind::DoubleTap).then(|| {
            Tween::new(
                self.live.scale,
                decision.scale,
                now,
                self.config.double_tap_zoom_duration(),
            )
        });
        let x = Tween::new(self.live.translate.x, decision.translate.x, now, settle_for);
        let y = match decision.dismiss_y {
            Some(target) => Tween::new(
                self.live.translate.y,
                target,
                now,
                self.config.dismiss_duration(),
            ),
            None => Tween::new(self.live.translate.y, decision.translate.y, now, settle_for),
        };

        self.settle = Some(Settle {
            scale,
            x,
            y,
            opacity,
            dismiss: decision.kind == ReleaseKind::Dismiss,
        });
        self.committed = Transform::new(decision.scale, decision.translate);
        self.scroll_enabled = decision.scroll_enabled;
        self.phase = Phase::Settling;
        Some(decision)
    }

    /// Drop the session without settling, e.g. when the pager took over the swipe.
    pub fn abandon(&mut self) {
        if self.session.take().is_some() {
            self.live = self.committed;
            self.background_opacity = 0.0;
            self.phase = Phase::Resting;
        }
    }

    /// Sample running tweens at `now`.
    pub fn advance(&mut self, now: Duration) -> Option<Completion> {
        let settle = self.settle?;

        if let Some(scale) = settle.scale {
            self.live.scale = scale.value_at(now);
        }
        self.live.translate.x = settle.x.value_at(now);
        self.live.translate.y = settle.y.value_at(now);
        if let Some(opacity) = settle.opacity {
            self.background_opacity = opacity.value_at(now);
        }

        if !settle.is_done(now) {
            return None;
        }

        self.settle = None;
        if settle.dismiss {
            debug!("Dismiss animation finished");
            return Some(Completion::Dismissed);
        }

        self.live = self.committed;
        self.background_opacity = 0.0;
        self.phase = Phase::Resting;
        debug!(scale = self.committed.scale, "Transform settled");
        Some(Completion::Settled)
    }

    /// Back to defaults; ignores input until the next [`reset_to_image`](Self::reset_to_image).
    pub fn close(&mut self) {
        self.phase = Phase::Closed;
        self.image = None;
        self.resting = None;
        self.committed = Transform::default();
        self.live = Transform::default();
        self.background_opacity = 0.0;
        self.session = None;
        self.settle = None;
        self.scroll_enabled = true;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The transform to render this frame.
    pub fn live(&self) -> Transform {
        self.live
    }

    /// The transform the image rests at once animations finish.
    pub fn committed(&self) -> Transform {
        self.committed
    }

    pub fn resting(&self) -> Option<Transform> {
        self.resting
    }

    pub fn background_opacity(&self) -> f32 {
        self.background_opacity
    }

    pub fn scroll_enabled(&self) -> bool {
        self.scroll_enabled
    }

    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_dismissing(&self) -> bool {
        self.settle.is_some_and(|s| s.dismiss)
    }

    /// Whether the committed scale is the resting scale.
    pub fn is_at_resting_scale(&self) -> bool {
        self.resting
            .is_some_and(|resting| scales_are_equal(self.committed.scale, resting.scale))
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }
}
