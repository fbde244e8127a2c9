mod common;

use approx::assert_relative_eq;
use lightbox_core::geometry::resting_transform;
use lightbox_core::gesture::{GestureConfig, GestureDelta, ReleaseKind, Velocity};
use lightbox_core::transform::{Completion, Easing, Phase, TransformMachine, Tween};

use common::{ms, one_touch, phone, small_portrait, two_touches, wide_image};

fn machine_with(image: lightbox_core::geometry::ImageSize) -> TransformMachine {
    let mut machine = TransformMachine::new(GestureConfig::default(), phone());
    machine.reset_to_image(Some(image), phone());
    machine
}

// ---------------------------------------------------------------------------
// Tween
// ---------------------------------------------------------------------------

#[test]
fn test_tween_linear_progress() {
    let tween = Tween::new(0.0, 10.0, ms(100), ms(200)).with_easing(Easing::Linear);
    assert_eq!(tween.value_at(ms(0)), 0.0);
    assert_relative_eq!(tween.value_at(ms(150)), 2.5, epsilon = 1e-4);
    assert_relative_eq!(tween.value_at(ms(300)), 10.0, epsilon = 1e-4);
    assert_relative_eq!(tween.value_at(ms(900)), 10.0);
}

#[test]
fn test_tween_ease_in_out_midpoint() {
    let tween = Tween::new(-60.0, 0.0, ms(0), ms(200));
    assert_relative_eq!(tween.value_at(ms(100)), -30.0, epsilon = 1e-4);
    assert!(tween.value_at(ms(50)) < -45.0);
}

#[test]
fn test_tween_done_at_end() {
    let tween = Tween::new(1.0, 2.0, ms(10), ms(100));
    assert!(!tween.is_done(ms(109)));
    assert!(tween.is_done(ms(110)));
    assert_eq!(tween.end(), ms(110));
    assert_eq!(tween.target(), 2.0);
}

#[test]
fn test_tween_zero_duration_finishes_immediately() {
    let tween = Tween::new(3.0, 7.0, ms(50), ms(0));
    assert_eq!(tween.progress(ms(50)), 1.0);
    assert_eq!(tween.value_at(ms(50)), 7.0);
    assert!(tween.is_done(ms(50)));
}

// ---------------------------------------------------------------------------
// Lifecycle
// ---------------------------------------------------------------------------

#[test]
fn test_new_machine_is_closed_and_ignores_input() {
    let mut machine = TransformMachine::new(GestureConfig::default(), phone());
    assert_eq!(machine.phase(), Phase::Closed);
    assert!(!machine.begin(&one_touch(), ms(0), None));
    assert!(machine.update(&one_touch(), GestureDelta::new(5.0, 5.0)).is_none());
}

#[test]
fn test_reset_snaps_to_resting() {
    let machine = machine_with(wide_image());
    let rest = resting_transform(wide_image(), phone()).unwrap();
    assert_eq!(machine.phase(), Phase::Resting);
    assert_eq!(machine.live(), rest);
    assert_eq!(machine.committed(), rest);
    assert_eq!(machine.resting(), Some(rest));
    assert!(machine.is_at_resting_scale());
}

#[test]
fn test_unknown_size_ignores_gestures() {
    let mut machine = TransformMachine::new(GestureConfig::default(), phone());
    machine.reset_to_image(None, phone());
    assert_eq!(machine.phase(), Phase::Resting);
    assert!(machine.resting().is_none());
    assert!(!machine.begin(&one_touch(), ms(0), None));
}

#[test]
fn test_close_resets_everything() {
    let mut machine = machine_with(small_portrait());
    machine.begin(&two_touches(100.0), ms(0), None);
    machine.update(&two_touches(150.0), GestureDelta::default());
    machine.close();
    assert_eq!(machine.phase(), Phase::Closed);
    assert!(!machine.has_session());
    assert_eq!(machine.live().scale, 1.0);
    assert_eq!(machine.background_opacity(), 0.0);
}

// ---------------------------------------------------------------------------
// Gesture -> settle
// ---------------------------------------------------------------------------

#[test]
fn test_pinch_then_settle() {
    let mut machine = machine_with(small_portrait());
    assert!(machine.begin(&two_touches(100.0), ms(0), None));
    assert_eq!(machine.phase(), Phase::Gesturing);

    machine.update(&two_touches(150.0), GestureDelta::default());
    assert_relative_eq!(machine.live().scale, 1.8, epsilon = 1e-5);

    let decision = machine
        .release(GestureDelta::default(), Velocity::default(), ms(10))
        .unwrap();
    assert_eq!(decision.kind, ReleaseKind::Settle);
    assert_eq!(machine.phase(), Phase::Settling);
    assert!(!machine.has_session());
    assert!(!machine.scroll_enabled());

    assert_eq!(machine.advance(ms(60)), None);
    assert_eq!(machine.advance(ms(110)), Some(Completion::Settled));
    assert_eq!(machine.phase(), Phase::Resting);
    assert_eq!(machine.live(), machine.committed());
    assert_relative_eq!(machine.committed().scale, 1.8, epsilon = 1e-5);
    assert!(!machine.is_at_resting_scale());
}

#[test]
fn test_tap_still_runs_a_settle_pass() {
    let mut machine = machine_with(wide_image());
    machine.begin(&one_touch(), ms(0), None);
    let decision = machine
        .release(GestureDelta::default(), Velocity::default(), ms(30))
        .unwrap();
    assert_eq!(decision.kind, ReleaseKind::Tap);
    assert_eq!(machine.phase(), Phase::Settling);
    assert_eq!(machine.advance(ms(130)), Some(Completion::Settled));
}

#[test]
fn test_dismiss_preview_fades_back() {
    let mut machine = machine_with(wide_image());
    let rest = machine.resting().unwrap();
    machine.begin(&one_touch(), ms(0), None);
    machine.update(&one_touch(), GestureDelta::new(0.0, 100.0));
    assert_relative_eq!(machine.background_opacity(), 0.3, epsilon = 1e-5);
    assert_relative_eq!(machine.live().translate.y, rest.translate.y + 100.0);

    machine.release(GestureDelta::new(0.0, 100.0), Velocity::new(0.0, 0.2), ms(50));
    assert!(!machine.is_dismissing());
    assert_eq!(machine.advance(ms(150)), Some(Completion::Settled));
    assert_eq!(machine.background_opacity(), 0.0);
    assert_relative_eq!(machine.live().translate.y, rest.translate.y, epsilon = 1e-3);
}

#[test]
fn test_dismiss_blocks_new_sessions_until_done() {
    let mut machine = machine_with(wide_image());
    machine.begin(&one_touch(), ms(0), None);
    machine.update(&one_touch(), GestureDelta::new(0.0, 120.0));
    let decision = machine
        .release(GestureDelta::new(0.0, 120.0), Velocity::new(0.0, 2.0), ms(40))
        .unwrap();
    assert_eq!(decision.kind, ReleaseKind::Dismiss);
    assert!(machine.is_dismissing());

    assert!(!machine.begin(&one_touch(), ms(60), None));
    assert_eq!(machine.advance(ms(189)), None);
    assert_eq!(machine.advance(ms(190)), Some(Completion::Dismissed));
}

#[test]
fn test_double_tap_animates_scale() {
    let mut machine = machine_with(wide_image());
    machine.begin(&one_touch(), ms(100), Some(ms(20)));
    let decision = machine
        .release(GestureDelta::default(), Velocity::default(), ms(120))
        .unwrap();
    assert_eq!(decision.kind, ReleaseKind::DoubleTap);

    // Scale and translate share the 300 ms zoom.
    assert_eq!(machine.advance(ms(220)), None);
    machine.advance(ms(270));
    assert_relative_eq!(machine.live().scale, 2.0 / 3.0, epsilon = 1e-4);
    assert_relative_eq!(machine.live().translate.x, -200.0, epsilon = 1e-2);
    assert_relative_eq!(machine.live().translate.y, 400.0 / 3.0, epsilon = 1e-2);
    assert_eq!(machine.advance(ms(420)), Some(Completion::Settled));
    assert_relative_eq!(machine.live().scale, 1.0, epsilon = 1e-5);
    assert_relative_eq!(machine.live().translate.x, -400.0, epsilon = 1e-2);
}

#[test]
fn test_new_session_during_settle_jumps_to_committed() {
    let mut machine = machine_with(small_portrait());
    machine.begin(&two_touches(100.0), ms(0), None);
    machine.update(&two_touches(150.0), GestureDelta::default());
    machine.release(GestureDelta::new(-400.0, 0.0), Velocity::default(), ms(10));
    let committed = machine.committed();
    assert_relative_eq!(committed.translate.x, -140.0, epsilon = 1e-3);

    assert!(machine.begin(&one_touch(), ms(40), None));
    assert_eq!(machine.phase(), Phase::Gesturing);
    assert_eq!(machine.live(), committed);
    assert_eq!(machine.session().unwrap().start(), committed);
}

#[test]
fn test_touch_count_change_refreshes_running_session() {
    let mut machine = machine_with(small_portrait());
    machine.begin(&one_touch(), ms(0), None);
    assert!(machine.begin(&two_touches(60.0), ms(5), None));
    let session = machine.session().unwrap();
    assert_eq!(session.touch_count(), 2);
    assert_relative_eq!(session.initial_distance(), 60.0);
    assert_eq!(session.started_at(), ms(0));
}

#[test]
fn test_abandon_restores_committed() {
    let mut machine = machine_with(wide_image());
    let rest = machine.committed();
    machine.begin(&one_touch(), ms(0), None);
    machine.update(&one_touch(), GestureDelta::new(0.0, 60.0));
    machine.abandon();
    assert_eq!(machine.phase(), Phase::Resting);
    assert_eq!(machine.live(), rest);
    assert_eq!(machine.background_opacity(), 0.0);
}
