// Host-side tests for easing curves and tweens.

use glam::Vec3;
use showcase_core::{Easing, Tween};

#[test]
fn easing_endpoints_are_fixed() {
    for e in [Easing::Linear, Easing::PowerOut(2), Easing::PowerOut(0)] {
        assert!(e.apply(0.0).abs() < 1e-6, "{e:?} at 0");
        assert!((e.apply(1.0) - 1.0).abs() < 1e-6, "{e:?} at 1");
    }
}

#[test]
fn easing_is_monotonic() {
    for e in [Easing::Linear, Easing::PowerOut(1), Easing::PowerOut(2)] {
        let mut prev = e.apply(0.0);
        for i in 1..=100 {
            let v = e.apply(i as f32 / 100.0);
            assert!(v >= prev, "{e:?} decreased at step {i}");
            prev = v;
        }
    }
}

#[test]
fn power_out_two_is_cubic_ease_out() {
    let e = Easing::PowerOut(2);
    assert!((e.apply(0.5) - 0.875).abs() < 1e-6);
    // Front-loaded: more than half the distance covered at the midpoint.
    assert!(e.apply(0.5) > Easing::Linear.apply(0.5));
}

#[test]
fn easing_clamps_out_of_range_time() {
    let e = Easing::PowerOut(2);
    assert_eq!(e.apply(-1.0), 0.0);
    assert_eq!(e.apply(2.0), 1.0);
}

#[test]
fn tween_reaches_target_exactly_at_duration() {
    let mut t = Tween::new(0.0_f32);
    t.retarget(10.0, 0.5, Easing::PowerOut(2));
    assert!(!t.is_settled());
    t.step(0.25);
    let mid = t.value();
    assert!(mid > 5.0 && mid < 10.0, "mid {mid}");
    t.step(0.25);
    assert_eq!(t.value(), 10.0);
    assert!(t.is_settled());
    // Further steps are no-ops.
    t.step(1.0);
    assert_eq!(t.value(), 10.0);
}

#[test]
fn retarget_starts_from_current_value() {
    let mut t = Tween::new(Vec3::ZERO);
    t.retarget(Vec3::splat(4.0), 1.0, Easing::Linear);
    t.step(0.5);
    assert_eq!(t.value(), Vec3::splat(2.0));
    // New target supersedes the in-flight one without jumping.
    t.retarget(Vec3::splat(-2.0), 1.0, Easing::Linear);
    assert_eq!(t.value(), Vec3::splat(2.0));
    t.step(0.5);
    assert_eq!(t.value(), Vec3::ZERO);
    assert_eq!(t.target(), Vec3::splat(-2.0));
}

#[test]
fn zero_duration_snaps() {
    let mut t = Tween::new(1.0_f32);
    t.retarget(3.0, 0.0, Easing::PowerOut(2));
    assert_eq!(t.value(), 3.0);
    assert!(t.is_settled());
}

#[test]
fn negative_dt_does_not_rewind() {
    let mut t = Tween::new(0.0_f32);
    t.retarget(1.0, 1.0, Easing::Linear);
    t.step(0.5);
    t.step(-10.0);
    assert_eq!(t.value(), 0.5);
}
