use crate::easing::Easing;
use crate::mapper::{OverlayTargets, SceneTargets};
use crate::state::{ModelTransform, OverlayState, SceneState};
use crate::tween::Tween;
use glam::{Vec2, Vec3};

struct OverlayTweens {
    opacity: Tween<f32>,
    offset: Tween<Vec2>,
}

impl OverlayTweens {
    fn new(state: OverlayState) -> Self {
        Self {
            opacity: Tween::new(state.opacity),
            offset: Tween::new(state.offset),
        }
    }

    fn apply(&mut self, t: &OverlayTargets, easing: Easing) {
        self.opacity
            .retarget(t.opacity.value, t.opacity.duration, easing);
        self.offset.retarget(t.offset.value, t.offset.duration, easing);
    }

    fn step(&mut self, dt: f32) {
        self.opacity.step(dt);
        self.offset.step(dt);
    }

    fn state(&self) -> OverlayState {
        OverlayState {
            opacity: self.opacity.value(),
            offset: self.offset.value(),
        }
    }
}

/// Per-property tweens for the model and both overlays.
///
/// This is the only writer of [`SceneState`]; the render step reads snapshots.
pub struct SceneAnimator {
    position: Tween<Vec3>,
    rotation: Tween<Vec3>,
    scale: Tween<Vec3>,
    overlays: [OverlayTweens; 2],
}

impl SceneAnimator {
    pub fn new(initial: SceneState) -> Self {
        Self {
            position: Tween::new(initial.model.position),
            rotation: Tween::new(initial.model.rotation),
            scale: Tween::new(initial.model.scale),
            overlays: [
                OverlayTweens::new(initial.overlays[0]),
                OverlayTweens::new(initial.overlays[1]),
            ],
        }
    }

    /// Retarget every property; in-flight transitions are superseded.
    pub fn apply(&mut self, targets: &SceneTargets, easing: Easing) {
        let m = &targets.model;
        self.position
            .retarget(m.position.value, m.position.duration, easing);
        self.rotation
            .retarget(m.rotation.value, m.rotation.duration, easing);
        self.scale.retarget(m.scale.value, m.scale.duration, easing);
        for (tweens, t) in self.overlays.iter_mut().zip(targets.overlays.iter()) {
            tweens.apply(t, easing);
        }
    }

    pub fn step(&mut self, dt: f32) {
        self.position.step(dt);
        self.rotation.step(dt);
        self.scale.step(dt);
        for o in &mut self.overlays {
            o.step(dt);
        }
    }

    pub fn is_settled(&self) -> bool {
        self.position.is_settled()
            && self.rotation.is_settled()
            && self.scale.is_settled()
            && self
                .overlays
                .iter()
                .all(|o| o.opacity.is_settled() && o.offset.is_settled())
    }

    pub fn state(&self) -> SceneState {
        SceneState {
            model: ModelTransform {
                position: self.position.value(),
                rotation: self.rotation.value(),
                scale: self.scale.value(),
            },
            overlays: [self.overlays[0].state(), self.overlays[1].state()],
        }
    }

    /// Final state once all running transitions complete.
    pub fn target_state(&self) -> SceneState {
        SceneState {
            model: ModelTransform {
                position: self.position.target(),
                rotation: self.rotation.target(),
                scale: self.scale.target(),
            },
            overlays: [
                OverlayState {
                    opacity: self.overlays[0].opacity.target(),
                    offset: self.overlays[0].offset.target(),
                },
                OverlayState {
                    opacity: self.overlays[1].opacity.target(),
                    offset: self.overlays[1].offset.target(),
                },
            ],
        }
    }
}
