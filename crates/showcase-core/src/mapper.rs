//! Scroll progress to scene targets.
//!
//! [`targets_for`] is a pure function of progress: it selects a [`Phase`] and
//! returns where every animated property should head and how long the
//! transition should take. Applying those targets is the animator's job.

use crate::constants::*;
use crate::easing::Easing;
use glam::{Vec2, Vec3};
use std::f32::consts::FRAC_PI_2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Model slides across while turning about Y; first text fades in.
    Approach,
    /// Model snaps to the presentation pose and pitches about X; second text fades in.
    Presentation,
}

impl Phase {
    #[inline]
    pub fn for_progress(progress: f32) -> Self {
        if progress > PHASE_THRESHOLD {
            Self::Presentation
        } else {
            Self::Approach
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Approach => "approach",
            Self::Presentation => "presentation",
        }
    }
}

/// Target value plus the duration of the transition toward it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframe<T> {
    pub value: T,
    pub duration: f32,
}

impl<T> Keyframe<T> {
    #[inline]
    pub fn new(value: T, duration: f32) -> Self {
        Self { value, duration }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelTargets {
    pub position: Keyframe<Vec3>,
    pub rotation: Keyframe<Vec3>,
    pub scale: Keyframe<Vec3>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayTargets {
    pub opacity: Keyframe<f32>,
    pub offset: Keyframe<Vec2>,
}

impl OverlayTargets {
    fn shown() -> Self {
        Self {
            opacity: Keyframe::new(1.0, TRANSITION_SEC),
            offset: Keyframe::new(Vec2::ZERO, TRANSITION_SEC),
        }
    }

    fn hidden(offset_x: f32) -> Self {
        Self {
            opacity: Keyframe::new(0.0, TRANSITION_SEC),
            offset: Keyframe::new(Vec2::new(offset_x, 0.0), TRANSITION_SEC),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneTargets {
    pub phase: Phase,
    pub model: ModelTargets,
    pub overlays: [OverlayTargets; 2],
}

/// Tuning for the wheel-to-progress mapping.
#[derive(Clone, Debug)]
pub struct MapperParams {
    pub sensitivity: f32,
    pub max_progress: f32,
    pub easing: Easing,
}

impl Default for MapperParams {
    fn default() -> Self {
        Self {
            sensitivity: WHEEL_SENSITIVITY,
            max_progress: MAX_PROGRESS,
            easing: Easing::PowerOut(2),
        }
    }
}

/// Target scene for a given progress value.
pub fn targets_for(progress: f32) -> SceneTargets {
    let phase = Phase::for_progress(progress);
    let model = match phase {
        Phase::Approach => approach_targets(progress),
        Phase::Presentation => presentation_targets(progress),
    };
    let (lo, hi) = OVERLAY_PRIMARY_WINDOW;
    let primary = if progress > lo && progress < hi {
        OverlayTargets::shown()
    } else {
        OverlayTargets::hidden(OVERLAY_PRIMARY_HIDDEN_X)
    };
    let secondary = match phase {
        Phase::Presentation => OverlayTargets::shown(),
        Phase::Approach => OverlayTargets::hidden(OVERLAY_SECONDARY_HIDDEN_X),
    };
    SceneTargets {
        phase,
        model,
        overlays: [primary, secondary],
    }
}

fn approach_targets(p: f32) -> ModelTargets {
    let position = MODEL_START_POSITION + Vec3::new(-APPROACH_SLIDE_X * p, APPROACH_RISE_Y * p, 0.0);
    ModelTargets {
        position: Keyframe::new(position, TRANSITION_SEC),
        rotation: Keyframe::new(Vec3::new(0.0, -p * FRAC_PI_2, 0.0), TRANSITION_SEC),
        scale: Keyframe::new(
            Vec3::splat(MODEL_START_SCALE - APPROACH_SHRINK * p),
            TRANSITION_SEC,
        ),
    }
}

// Yaw holds where the approach phase ends so the pitch reads as a turn toward the viewer.
fn presentation_targets(p: f32) -> ModelTargets {
    ModelTargets {
        position: Keyframe::new(PRESENTATION_POSITION, TRANSITION_SEC),
        rotation: Keyframe::new(
            Vec3::new(p * PRESENTATION_PITCH_PER_PROGRESS, -FRAC_PI_2, 0.0),
            PRESENTATION_ROTATION_SEC,
        ),
        scale: Keyframe::new(Vec3::splat(PRESENTATION_SCALE), TRANSITION_SEC),
    }
}
