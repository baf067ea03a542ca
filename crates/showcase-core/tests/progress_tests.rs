// Host-side tests for scroll progress accumulation and wheel normalisation.

use showcase_core::{normalize_wheel_delta, Progress, WheelDeltaMode, MAX_PROGRESS, WHEEL_SENSITIVITY};

#[test]
fn progress_starts_at_zero() {
    let p = Progress::default();
    assert_eq!(p.value(), 0.0);
    assert_eq!(p.max(), MAX_PROGRESS);
}

#[test]
fn progress_accumulates_scaled_delta() {
    let mut p = Progress::new(1.5);
    let v = p.accumulate(100.0, WHEEL_SENSITIVITY);
    assert!((v - 0.2).abs() < 1e-6);
    let v = p.accumulate(-50.0, WHEEL_SENSITIVITY);
    assert!((v - 0.1).abs() < 1e-6);
}

#[test]
fn progress_clamps_at_both_ends() {
    let mut p = Progress::new(1.5);
    assert_eq!(p.accumulate(-10_000.0, WHEEL_SENSITIVITY), 0.0);
    assert_eq!(p.accumulate(1e9, WHEEL_SENSITIVITY), 1.5);
    assert_eq!(p.accumulate(1.0, WHEEL_SENSITIVITY), 1.5);
}

#[test]
fn progress_stays_in_range_for_arbitrary_deltas() {
    let mut p = Progress::default();
    // Deterministic pseudo-random walk with large swings.
    let mut x: u32 = 0x1234_5678;
    for _ in 0..10_000 {
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        let delta = (x % 2001) as f32 - 1000.0;
        let v = p.accumulate(delta, WHEEL_SENSITIVITY);
        assert!((0.0..=MAX_PROGRESS).contains(&v), "out of range: {v}");
    }
}

#[test]
fn non_finite_deltas_are_ignored() {
    let mut p = Progress::default();
    p.accumulate(250.0, WHEEL_SENSITIVITY);
    let before = p.value();
    assert_eq!(p.accumulate(f32::NAN, WHEEL_SENSITIVITY), before);
    assert_eq!(p.accumulate(f32::INFINITY, WHEEL_SENSITIVITY), before);
    assert_eq!(p.accumulate(f32::NEG_INFINITY, WHEEL_SENSITIVITY), before);
}

#[test]
fn negative_or_non_finite_max_is_sanitised() {
    assert_eq!(Progress::new(-1.0).max(), 0.0);
    assert_eq!(Progress::new(f32::NAN).max(), MAX_PROGRESS);
    let mut p = Progress::new(0.0);
    assert_eq!(p.accumulate(500.0, WHEEL_SENSITIVITY), 0.0);
}

#[test]
fn wheel_delta_modes_normalise_to_pixels() {
    assert_eq!(normalize_wheel_delta(53.0, WheelDeltaMode::Pixel, 800.0), 53.0);
    assert_eq!(normalize_wheel_delta(3.0, WheelDeltaMode::Line, 800.0), 48.0);
    assert_eq!(normalize_wheel_delta(1.0, WheelDeltaMode::Page, 800.0), 800.0);
    // Zero-height viewport still yields a usable page size.
    assert_eq!(normalize_wheel_delta(-1.0, WheelDeltaMode::Page, 0.0), -1.0);
}

#[test]
fn delta_mode_from_dom_constants() {
    assert_eq!(WheelDeltaMode::from_dom(0), WheelDeltaMode::Pixel);
    assert_eq!(WheelDeltaMode::from_dom(1), WheelDeltaMode::Line);
    assert_eq!(WheelDeltaMode::from_dom(2), WheelDeltaMode::Page);
    assert_eq!(WheelDeltaMode::from_dom(42), WheelDeltaMode::Pixel);
}
