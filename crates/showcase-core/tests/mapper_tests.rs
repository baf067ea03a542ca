// Host-side tests for the progress -> target mapping.

use glam::{Vec2, Vec3};
use showcase_core::*;
use std::f32::consts::FRAC_PI_2;

fn approx_v3(a: Vec3, b: Vec3) -> bool {
    (a - b).abs().max_element() < 1e-5
}

#[test]
fn phase_is_selected_by_threshold_only() {
    assert_eq!(Phase::for_progress(0.0), Phase::Approach);
    assert_eq!(Phase::for_progress(0.5), Phase::Approach);
    assert_eq!(Phase::for_progress(1.0), Phase::Approach);
    assert_eq!(Phase::for_progress(1.0001), Phase::Presentation);
    assert_eq!(Phase::for_progress(1.5), Phase::Presentation);
}

#[test]
fn progress_zero_targets_the_load_pose_exactly() {
    let t = targets_for(0.0);
    assert_eq!(t.phase, Phase::Approach);
    assert_eq!(t.model.position.value, MODEL_START_POSITION);
    assert_eq!(t.model.scale.value, Vec3::splat(MODEL_START_SCALE));
    assert_eq!(t.model.rotation.value.x, 0.0);
    assert_eq!(t.model.rotation.value.z, 0.0);
    assert_eq!(t.model.rotation.value.y.abs(), 0.0);
}

#[test]
fn approach_slides_turns_and_shrinks_with_progress() {
    let t = targets_for(0.5);
    assert!(approx_v3(t.model.position.value, Vec3::new(2.0 - 2.75, -0.55, 0.0)));
    assert!(approx_v3(t.model.rotation.value, Vec3::new(0.0, -FRAC_PI_2 * 0.5, 0.0)));
    assert!(approx_v3(t.model.scale.value, Vec3::splat(1.8 - 0.125)));

    let end = targets_for(1.0);
    assert!(approx_v3(end.model.position.value, Vec3::new(-3.5, -0.5, 0.0)));
    assert!(approx_v3(end.model.rotation.value, Vec3::new(0.0, -FRAC_PI_2, 0.0)));
    assert!(approx_v3(end.model.scale.value, Vec3::splat(1.55)));
}

#[test]
fn presentation_uses_fixed_pose_not_extrapolation() {
    for p in [1.01_f32, 1.2, 1.5] {
        let t = targets_for(p);
        assert_eq!(t.phase, Phase::Presentation);
        assert_eq!(t.model.position.value, PRESENTATION_POSITION);
        assert_eq!(t.model.scale.value, Vec3::splat(PRESENTATION_SCALE));
        assert!((t.model.rotation.value.x - p * PRESENTATION_PITCH_PER_PROGRESS).abs() < 1e-6);
        assert!((t.model.rotation.value.y + FRAC_PI_2).abs() < 1e-6);
    }
}

#[test]
fn presentation_rotation_is_slower_than_other_transitions() {
    let t = targets_for(1.2);
    assert_eq!(t.model.rotation.duration, PRESENTATION_ROTATION_SEC);
    assert_eq!(t.model.position.duration, TRANSITION_SEC);
    assert_eq!(t.model.scale.duration, TRANSITION_SEC);
    let a = targets_for(0.4);
    assert_eq!(a.model.rotation.duration, TRANSITION_SEC);
}

#[test]
fn primary_overlay_visible_only_strictly_inside_window() {
    let cases = [
        (0.0, 0.0),
        (0.2, 0.0),
        (0.2001, 1.0),
        (0.6, 1.0),
        (0.9999, 1.0),
        (1.0, 0.0),
        (1.3, 0.0),
    ];
    for (p, expected) in cases {
        let t = targets_for(p);
        assert_eq!(t.overlays[0].opacity.value, expected, "progress {p}");
        let expected_offset = if expected > 0.0 {
            Vec2::ZERO
        } else {
            Vec2::new(OVERLAY_PRIMARY_HIDDEN_X, 0.0)
        };
        assert_eq!(t.overlays[0].offset.value, expected_offset, "progress {p}");
    }
}

#[test]
fn secondary_overlay_follows_presentation_phase() {
    let hidden = targets_for(0.7);
    assert_eq!(hidden.overlays[1].opacity.value, 0.0);
    assert_eq!(
        hidden.overlays[1].offset.value,
        Vec2::new(OVERLAY_SECONDARY_HIDDEN_X, 0.0)
    );
    let shown = targets_for(1.1);
    assert_eq!(shown.overlays[1].opacity.value, 1.0);
    assert_eq!(shown.overlays[1].offset.value, Vec2::ZERO);
}

#[test]
fn targets_are_a_pure_function_of_progress() {
    for i in 0..=150 {
        let p = i as f32 / 100.0;
        assert_eq!(targets_for(p), targets_for(p));
    }
}

#[test]
fn default_params_match_constants() {
    let params = MapperParams::default();
    assert_eq!(params.sensitivity, WHEEL_SENSITIVITY);
    assert_eq!(params.max_progress, MAX_PROGRESS);
    assert_eq!(params.easing, Easing::PowerOut(2));
}
