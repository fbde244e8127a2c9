mod common;

use approx::assert_relative_eq;
use lightbox_core::geometry::{resting_transform, ImageSize, Transform, Translate};
use lightbox_core::gesture::{
    classify_move, classify_release, GestureConfig, GestureContext, GestureDelta, GestureKind,
    GestureSession, ReleaseKind, Velocity,
};

use common::{ms, one_touch, phone, small_portrait, tall_image, two_touches, wide_image};

fn context(image: ImageSize, config: &GestureConfig) -> GestureContext<'_> {
    GestureContext {
        image,
        viewport: phone(),
        resting: resting_transform(image, phone()).unwrap(),
        config,
    }
}

fn session_at_rest(ctx: &GestureContext<'_>, touches: &[lightbox_core::geometry::Point]) -> GestureSession {
    GestureSession::new(touches, ctx.resting, ms(0), None)
}

// ---------------------------------------------------------------------------
// GestureSession
// ---------------------------------------------------------------------------

#[test]
fn test_session_records_baseline() {
    let session = GestureSession::new(&two_touches(100.0), Transform::default(), ms(5), None);
    assert_eq!(session.touch_count(), 2);
    assert_eq!(session.started_at(), ms(5));
    assert_relative_eq!(session.initial_distance(), 100.0);
    assert!(session.previous_tap().is_none());
}

#[test]
fn test_session_refresh_baseline() {
    let mut session = GestureSession::new(&one_touch(), Transform::default(), ms(0), None);
    assert_eq!(session.initial_distance(), 0.0);
    session.refresh_baseline(&two_touches(80.0));
    assert_eq!(session.touch_count(), 2);
    assert_relative_eq!(session.initial_distance(), 80.0);
}

// ---------------------------------------------------------------------------
// classify_move: pinch
// ---------------------------------------------------------------------------

#[test]
fn test_pinch_scales_from_session_start() {
    let config = GestureConfig::default();
    let ctx = context(small_portrait(), &config);
    let mut session = session_at_rest(&ctx, &two_touches(100.0));

    let effect = classify_move(&mut session, &ctx, &two_touches(150.0), GestureDelta::default());
    assert_eq!(effect.kind, GestureKind::Pinch);
    assert_relative_eq!(effect.scale.unwrap(), 1.8, epsilon = 1e-5);
}

#[test]
fn test_pinch_zooms_about_viewport_centre() {
    let config = GestureConfig::default();
    let ctx = context(small_portrait(), &config);
    let mut session = session_at_rest(&ctx, &two_touches(100.0));

    // 540x1080 centred on the 400x800 viewport.
    let effect = classify_move(&mut session, &ctx, &two_touches(150.0), GestureDelta::default());
    assert_relative_eq!(effect.translate_x.unwrap(), -70.0, epsilon = 1e-3);
    assert_relative_eq!(effect.translate_y.unwrap(), -140.0, epsilon = 1e-3);
}

#[test]
fn test_pinch_clamped_to_max_scale() {
    let config = GestureConfig::default();
    let ctx = context(small_portrait(), &config);
    let mut session = session_at_rest(&ctx, &two_touches(100.0));

    let effect = classify_move(&mut session, &ctx, &two_touches(1000.0), GestureDelta::default());
    assert_relative_eq!(effect.scale.unwrap(), 5.0);
}

#[test]
fn test_pinch_clamped_to_resting_scale() {
    let config = GestureConfig::default();
    let ctx = context(wide_image(), &config);
    let mut session = session_at_rest(&ctx, &two_touches(100.0));

    let effect = classify_move(&mut session, &ctx, &two_touches(20.0), GestureDelta::default());
    assert_relative_eq!(effect.scale.unwrap(), 1.0 / 3.0, epsilon = 1e-6);
}

#[test]
fn test_pinch_zero_initial_distance_skipped() {
    let config = GestureConfig::default();
    let ctx = context(small_portrait(), &config);
    let mut session = session_at_rest(&ctx, &two_touches(0.0));

    let effect = classify_move(&mut session, &ctx, &two_touches(150.0), GestureDelta::default());
    assert!(effect.scale.is_none());
    assert_ne!(effect.kind, GestureKind::Pinch);
}

#[test]
fn test_second_finger_refreshes_baseline() {
    let config = GestureConfig::default();
    let ctx = context(small_portrait(), &config);
    let mut session = session_at_rest(&ctx, &one_touch());

    // The joining finger becomes the new pinch baseline.
    let effect = classify_move(&mut session, &ctx, &two_touches(100.0), GestureDelta::default());
    assert_eq!(session.touch_count(), 2);
    assert_relative_eq!(effect.scale.unwrap(), 1.2, epsilon = 1e-5);

    let effect = classify_move(&mut session, &ctx, &two_touches(150.0), GestureDelta::default());
    assert_relative_eq!(effect.scale.unwrap(), 1.8, epsilon = 1e-5);
}

// ---------------------------------------------------------------------------
// classify_move: pan and dismiss preview
// ---------------------------------------------------------------------------

#[test]
fn test_horizontal_drag_at_rest_left_to_pager() {
    let config = GestureConfig::default();
    let ctx = context(wide_image(), &config);
    let mut session = session_at_rest(&ctx, &one_touch());

    let effect = classify_move(&mut session, &ctx, &one_touch(), GestureDelta::new(80.0, 2.0));
    assert_eq!(effect.kind, GestureKind::SwipePage);
    assert!(effect.translate_x.is_none());
    assert!(effect.scroll_enabled);
}

#[test]
fn test_vertical_drag_at_rest_previews_dismiss() {
    let config = GestureConfig::default();
    let ctx = context(wide_image(), &config);
    let mut session = session_at_rest(&ctx, &one_touch());

    let effect = classify_move(&mut session, &ctx, &one_touch(), GestureDelta::new(0.0, 100.0));
    assert_eq!(effect.kind, GestureKind::SwipeDismiss);
    assert_relative_eq!(effect.background_opacity.unwrap(), 0.3, epsilon = 1e-5);
    assert_relative_eq!(effect.translate_y.unwrap(), ctx.resting.translate.y + 100.0);
    assert!(!effect.scroll_enabled);
}

#[test]
fn test_dismiss_preview_opacity_capped() {
    let config = GestureConfig::default();
    let ctx = context(wide_image(), &config);
    let mut session = session_at_rest(&ctx, &one_touch());

    let effect = classify_move(&mut session, &ctx, &one_touch(), GestureDelta::new(0.0, -700.0));
    assert_eq!(effect.background_opacity, Some(1.0));
}

#[test]
fn test_tall_image_at_rest_has_no_dismiss_preview() {
    let config = GestureConfig::default();
    let ctx = context(tall_image(), &config);
    let mut session = session_at_rest(&ctx, &one_touch());

    let effect = classify_move(&mut session, &ctx, &one_touch(), GestureDelta::new(0.0, 50.0));
    assert!(effect.background_opacity.is_none());
    assert!(effect.translate_y.is_none());
}

#[test]
fn test_zoomed_image_pans_both_axes() {
    let config = GestureConfig::default();
    let ctx = context(small_portrait(), &config);
    let start = Transform::new(2.0, Translate::new(10.0, 20.0));
    let mut session = GestureSession::new(&one_touch(), start, ms(0), None);

    let effect = classify_move(&mut session, &ctx, &one_touch(), GestureDelta::new(-30.0, 40.0));
    assert_eq!(effect.kind, GestureKind::Pan);
    assert_eq!(effect.translate_x, Some(-20.0));
    assert_eq!(effect.translate_y, Some(60.0));
    assert!(effect.background_opacity.is_none());
}

// ---------------------------------------------------------------------------
// classify_release
// ---------------------------------------------------------------------------

#[test]
fn test_release_without_movement_is_tap() {
    let config = GestureConfig::default();
    let ctx = context(wide_image(), &config);
    let session = session_at_rest(&ctx, &one_touch());

    let decision = classify_release(
        &session,
        &ctx,
        GestureDelta::default(),
        Velocity::default(),
        ctx.resting.scale,
        ms(50),
    );
    assert_eq!(decision.kind, ReleaseKind::Tap);
    assert!(decision.scroll_enabled);
}

#[test]
fn test_second_tap_in_window_zooms_in() {
    let config = GestureConfig::default();
    let ctx = context(wide_image(), &config);
    let session = GestureSession::new(&one_touch(), ctx.resting, ms(100), Some(ms(10)));

    let decision = classify_release(
        &session,
        &ctx,
        GestureDelta::default(),
        Velocity::default(),
        ctx.resting.scale,
        ms(150),
    );
    assert_eq!(decision.kind, ReleaseKind::DoubleTap);
    assert_relative_eq!(decision.scale, 1.0, epsilon = 1e-5);
    // 1200x800 at 1x: centred horizontally, exactly filling the height.
    assert_relative_eq!(decision.translate.x, -400.0, epsilon = 1e-3);
    assert_relative_eq!(decision.translate.y, 0.0, epsilon = 1e-3);
    assert!(!decision.scroll_enabled);
}

#[test]
fn test_second_tap_when_zoomed_returns_to_rest() {
    let config = GestureConfig::default();
    let ctx = context(small_portrait(), &config);
    let zoomed = Transform::new(3.0, Translate::new(0.0, 0.0));
    let session = GestureSession::new(&one_touch(), zoomed, ms(100), Some(ms(20)));

    let decision = classify_release(
        &session,
        &ctx,
        GestureDelta::default(),
        Velocity::default(),
        3.0,
        ms(120),
    );
    assert_eq!(decision.kind, ReleaseKind::DoubleTap);
    assert_relative_eq!(decision.scale, 1.0);
    assert_relative_eq!(decision.translate.x, 50.0);
    assert_relative_eq!(decision.translate.y, 100.0);
}

#[test]
fn test_tap_outside_window_is_single_tap() {
    let config = GestureConfig::default();
    let ctx = context(wide_image(), &config);
    let session = GestureSession::new(&one_touch(), ctx.resting, ms(400), Some(ms(10)));

    let decision = classify_release(
        &session,
        &ctx,
        GestureDelta::default(),
        Velocity::default(),
        ctx.resting.scale,
        ms(410),
    );
    assert_eq!(decision.kind, ReleaseKind::Tap);
}

#[test]
fn test_fast_vertical_fling_at_rest_dismisses() {
    let config = GestureConfig::default();
    let ctx = context(wide_image(), &config);
    let session = session_at_rest(&ctx, &one_touch());

    let decision = classify_release(
        &session,
        &ctx,
        GestureDelta::new(0.0, 100.0),
        Velocity::new(0.0, 1.5),
        ctx.resting.scale,
        ms(200),
    );
    assert_eq!(decision.kind, ReleaseKind::Dismiss);
    let target = decision.dismiss_y.unwrap();
    assert_relative_eq!(target, ctx.resting.translate.y + 600.0, epsilon = 1e-3);
}

#[test]
fn test_dismiss_ignores_horizontal_velocity() {
    let config = GestureConfig::default();
    let ctx = context(wide_image(), &config);
    let session = session_at_rest(&ctx, &one_touch());

    let decision = classify_release(
        &session,
        &ctx,
        GestureDelta::new(250.0, 80.0),
        Velocity::new(5.0, 1.2),
        ctx.resting.scale,
        ms(200),
    );
    assert_eq!(decision.kind, ReleaseKind::Dismiss);
    assert_relative_eq!(decision.translate.x, ctx.resting.translate.x, epsilon = 1e-3);
    let target = decision.dismiss_y.unwrap();
    assert_relative_eq!(target, ctx.resting.translate.y + 480.0, epsilon = 1e-3);
}

#[test]
fn test_dismiss_velocity_threshold_is_inclusive() {
    let config = GestureConfig::default();
    let ctx = context(wide_image(), &config);
    let session = session_at_rest(&ctx, &one_touch());

    let release = |vy: f32| {
        classify_release(
            &session,
            &ctx,
            GestureDelta::new(0.0, 100.0),
            Velocity::new(0.0, vy),
            ctx.resting.scale,
            ms(200),
        )
    };
    assert_eq!(release(1.1).kind, ReleaseKind::Dismiss);
    assert_eq!(release(-1.1).kind, ReleaseKind::Dismiss);
    assert_eq!(release(1.09).kind, ReleaseKind::Settle);
}

#[test]
fn test_slow_vertical_release_settles() {
    let config = GestureConfig::default();
    let ctx = context(wide_image(), &config);
    let session = session_at_rest(&ctx, &one_touch());

    let decision = classify_release(
        &session,
        &ctx,
        GestureDelta::new(0.0, 100.0),
        Velocity::new(0.0, 0.5),
        ctx.resting.scale,
        ms(200),
    );
    assert_eq!(decision.kind, ReleaseKind::Settle);
    assert!(decision.dismiss_y.is_none());
    assert_relative_eq!(decision.translate.y, ctx.resting.translate.y, epsilon = 1e-3);
}

#[test]
fn test_fling_when_zoomed_never_dismisses() {
    let config = GestureConfig::default();
    let ctx = context(small_portrait(), &config);
    let start = Transform::new(2.0, Translate::new(-100.0, -200.0));
    let session = GestureSession::new(&one_touch(), start, ms(0), None);

    let decision = classify_release(
        &session,
        &ctx,
        GestureDelta::new(0.0, 100.0),
        Velocity::new(0.0, 3.0),
        2.0,
        ms(100),
    );
    assert_eq!(decision.kind, ReleaseKind::Settle);
    // 300x600 at 2x: y limited to [-400, 0].
    assert_relative_eq!(decision.translate.y, -100.0);
}

#[test]
fn test_pinch_release_keeps_scale_and_clamps() {
    let config = GestureConfig::default();
    let ctx = context(small_portrait(), &config);
    let session = session_at_rest(&ctx, &two_touches(100.0));

    let decision = classify_release(
        &session,
        &ctx,
        GestureDelta::new(-400.0, 0.0),
        Velocity::default(),
        1.8,
        ms(100),
    );
    assert_eq!(decision.kind, ReleaseKind::Settle);
    assert_relative_eq!(decision.scale, 1.8);
    // Centred at -70, dragged to -470, stopped at the right edge.
    assert_relative_eq!(decision.translate.x, -140.0, epsilon = 1e-3);
    assert!(!decision.scroll_enabled);
}
