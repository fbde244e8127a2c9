//! Frame-by-frame interpretation of touch input.
//!
//! The classifier never owns state: it reads the [`GestureSession`] and the
//! geometry of the active image and returns what the transform should do.

use std::time::Duration;

use tracing::debug;

use crate::consts::FIT_EPSILON;
use crate::geometry::{
    clamp_translation, distance, gesture_scale, scales_are_equal, zoom_about_centre, ImageSize,
    Point, Transform, Translate, Viewport,
};

use super::config::GestureConfig;
use super::session::GestureSession;
use super::types::{
    GestureDelta, GestureKind, MoveEffect, ReleaseDecision, ReleaseKind, Velocity,
};

/// Geometry of the active image that every classification needs.
#[derive(Clone, Copy, Debug)]
pub struct GestureContext<'a> {
    pub image: ImageSize,
    pub viewport: Viewport,
    pub resting: Transform,
    pub config: &'a GestureConfig,
}

impl GestureContext<'_> {
    fn clamp_scale(&self, scale: f32) -> f32 {
        scale.max(self.resting.scale).min(self.config.max_scale)
    }
}

/// Classify one move event and compute the live transform changes.
///
/// Pan and pinch are tracked independently: a two-finger move may both scale
/// and translate. Pinching zooms about the viewport centre. A second finger joining a one-finger session refreshes the
/// pinch baseline.
pub fn classify_move(
    session: &mut GestureSession,
    ctx: &GestureContext<'_>,
    touches: &[Point],
    delta: GestureDelta,
) -> MoveEffect {
    if session.touch_count() == 1 && touches.len() == 2 {
        session.refresh_baseline(touches);
    }

    let start = session.start();
    let config = ctx.config;
    let at_rest = scales_are_equal(start.scale, ctx.resting.scale);

    let mut scale = None;
    if touches.len() >= 2 {
        let current = distance(touches);
        match gesture_scale(current, session.initial_distance(), config.scale_multiplier) {
            Some(ratio) => {
                scale = Some(ctx.clamp_scale(ratio * start.scale));
                session.set_touch_count(touches.len());
            }
            None => debug!("Skipping pinch frame with zero initial distance"),
        }
    }

    let base = match scale {
        Some(scale) => zoom_about_centre(start.translate, start.scale, scale, ctx.viewport),
        None => start.translate,
    };

    let mut translate_x = None;
    let mut translate_y = None;
    let mut background_opacity = None;

    if !at_rest {
        translate_x = Some(base.x + delta.dx);
    }

    // Vertical movement only once the zoomed image is taller than the screen.
    if start.scale * ctx.image.height > ctx.viewport.height {
        translate_y = Some(base.y + delta.dy);
    }

    if at_rest && ctx.image.height * ctx.resting.scale < ctx.viewport.height {
        let opacity = (delta.dy * config.background_fade_per_px).abs();
        translate_y = Some(base.y + delta.dy);
        background_opacity = Some(opacity.min(1.0));
    }

    if scale.is_some() {
        translate_x.get_or_insert(base.x);
        translate_y.get_or_insert(base.y);
    }

    let scroll_enabled = delta.dy.abs() < config.freeze_scroll_distance;

    let kind = if scale.is_some() {
        GestureKind::Pinch
    } else if background_opacity.is_some() && delta.dy.abs() >= delta.dx.abs() {
        GestureKind::SwipeDismiss
    } else if at_rest {
        GestureKind::SwipePage
    } else {
        GestureKind::Pan
    };

    MoveEffect {
        kind,
        translate_x,
        translate_y,
        scale,
        background_opacity,
        scroll_enabled,
    }
}

/// Decide what a release means and where the transform should settle.
///
/// `live_scale` is the scale currently displayed (after any pinch).
pub fn classify_release(
    session: &GestureSession,
    ctx: &GestureContext<'_>,
    delta: GestureDelta,
    velocity: Velocity,
    live_scale: f32,
    now: Duration,
) -> ReleaseDecision {
    let start = session.start();
    let config = ctx.config;
    let is_tap = delta.is_zero() && scales_are_equal(start.scale, live_scale);

    let (kind, scale) = if is_tap {
        let within_window = session
            .previous_tap()
            .is_some_and(|tapped| now.saturating_sub(tapped) < config.double_tap_window());
        if within_window {
            let target = if scales_are_equal(ctx.resting.scale, live_scale) {
                ctx.clamp_scale(ctx.resting.scale * config.double_tap_scale)
            } else {
                ctx.resting.scale
            };
            (ReleaseKind::DoubleTap, target)
        } else {
            (ReleaseKind::Tap, live_scale)
        }
    } else {
        (ReleaseKind::Settle, live_scale)
    };

    let zoomed = zoom_about_centre(start.translate, start.scale, scale, ctx.viewport);
    let proposed = Translate::new(zoomed.x + delta.dx, zoomed.y + delta.dy);
    let translate = clamp_translation(proposed, scale, ctx.image, ctx.viewport);

    let at_rest = scales_are_equal(scale, ctx.resting.scale);
    let (kind, dismiss_y) = if kind == ReleaseKind::Settle
        && at_rest
        && velocity.vy.abs() >= config.dismiss_velocity
    {
        (
            ReleaseKind::Dismiss,
            Some(translate.y + config.dismiss_distance * velocity.vy),
        )
    } else {
        (kind, None)
    };

    let scroll_enabled = at_rest
        && (translate.x - ctx.resting.translate.x).abs() < FIT_EPSILON
        && (translate.y - ctx.resting.translate.y).abs() < FIT_EPSILON;

    debug!(?kind, scale, x = translate.x, y = translate.y, "Gesture released");

    ReleaseDecision {
        kind,
        scale,
        translate,
        dismiss_y,
        scroll_enabled,
    }
}
