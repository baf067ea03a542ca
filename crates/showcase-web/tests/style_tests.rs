// Host-side tests for pure overlay/canvas style helpers.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod style {
    include!("../src/style.rs");
}

use style::*;

#[test]
fn opacity_is_clamped_and_formatted() {
    assert_eq!(opacity_css(0.0), "0.000");
    assert_eq!(opacity_css(0.5), "0.500");
    assert_eq!(opacity_css(1.7), "1.000");
    assert_eq!(opacity_css(-0.2), "0.000");
}

#[test]
fn translate_uses_css_pixels() {
    assert_eq!(translate_css([300.0, 0.0]), "translate(300.0px, 0.0px)");
    assert_eq!(translate_css([-300.0, 12.26]), "translate(-300.0px, 12.3px)");
}

#[test]
fn overlay_changed_respects_epsilon() {
    let a = (0.5, [10.0, 0.0]);
    assert!(!overlay_changed(a, a, 1e-3));
    assert!(!overlay_changed(a, (0.5005, [10.0, 0.0]), 1e-3));
    assert!(overlay_changed(a, (0.6, [10.0, 0.0]), 1e-3));
    assert!(overlay_changed(a, (0.5, [10.0, 1.0]), 1e-3));
}

#[test]
fn settled_overlay_is_flushed_even_below_epsilon() {
    let target = (1.0, [0.0, 0.0]);
    assert!(overlay_needs_write((0.9995, [0.0, 0.0]), target, target, 1e-3));
    assert!(!overlay_needs_write(target, target, target, 1e-3));
    assert!(!overlay_needs_write((0.9990, [0.0, 0.0]), (0.9995, [0.0, 0.0]), target, 1e-3));
}

#[test]
fn eased_fade_in_ends_fully_opaque_in_the_dom() {
    // Cubic ease-out over 0.5 s at 60 fps, overlay fading in while sliding from 300px.
    let from = (0.0_f32, [300.0_f32, 0.0_f32]);
    let target = (1.0_f32, [0.0_f32, 0.0_f32]);
    let duration = 0.5_f32;
    let mut elapsed = 0.0_f32;
    let mut written = from;
    for _ in 0..120 {
        elapsed = (elapsed + 1.0 / 60.0).min(duration);
        let current = if elapsed >= duration {
            target
        } else {
            let t = 1.0 - (1.0 - elapsed / duration).powi(3);
            (
                from.0 + (target.0 - from.0) * t,
                [from.1[0] + (target.1[0] - from.1[0]) * t, 0.0],
            )
        };
        if overlay_needs_write(written, current, target, 1e-3) {
            written = current;
        }
    }
    assert_eq!(written, target);
    assert_eq!(opacity_css(written.0), "1.000");
    assert_eq!(translate_css(written.1), "translate(0.0px, 0.0px)");
}

#[test]
fn backing_size_scales_by_pixel_ratio() {
    assert_eq!(backing_size(800.0, 600.0, 2.0), (1600, 1200));
    assert_eq!(backing_size(800.0, 600.0, 1.0), (800, 600));
}

#[test]
fn backing_size_never_returns_zero() {
    assert_eq!(backing_size(0.0, 0.0, 2.0), (1, 1));
    assert_eq!(backing_size(-5.0, 10.0, 1.0), (1, 10));
    assert_eq!(backing_size(100.0, 50.0, f64::NAN), (100, 50));
}
