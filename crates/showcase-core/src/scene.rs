use crate::animator::SceneAnimator;
use crate::lighting::Lighting;
use crate::mapper::{targets_for, MapperParams, Phase, SceneTargets};
use crate::progress::Progress;
use crate::state::{Camera, SceneState};
use bytemuck::{Pod, Zeroable};

/// GPU-facing per-frame constants; layout matches `scene.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct SceneUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    pub light_dir: [f32; 4],
    pub light_color: [f32; 4],
    pub ambient: [f32; 4],
}

/// Everything the mapper and the render step share.
///
/// Wheel handling writes progress and retargets the animator; each frame the
/// animator advances and the render step reads [`SceneContext::state`].
pub struct SceneContext {
    pub camera: Camera,
    pub lighting: Lighting,
    progress: Progress,
    animator: SceneAnimator,
    params: MapperParams,
    phase: Phase,
}

impl SceneContext {
    pub fn new(params: MapperParams, viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            camera: Camera::showcase(viewport_width, viewport_height),
            lighting: Lighting::default(),
            progress: Progress::new(params.max_progress),
            animator: SceneAnimator::new(SceneState::initial()),
            params,
            phase: Phase::Approach,
        }
    }

    /// Accumulate a normalised wheel delta (pixels) and retarget the scene.
    pub fn handle_wheel(&mut self, delta_px: f32) -> SceneTargets {
        let p = self
            .progress
            .accumulate(delta_px, self.params.sensitivity);
        let targets = targets_for(p);
        if targets.phase != self.phase {
            log::info!("[wheel] phase {} at progress {:.3}", targets.phase.name(), p);
            self.phase = targets.phase;
        }
        self.animator.apply(&targets, self.params.easing);
        targets
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.camera.set_viewport(width, height);
    }

    /// Advance every running transition by `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        self.animator.step(dt);
    }

    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress.value()
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> SceneState {
        self.animator.state()
    }

    pub fn target_state(&self) -> SceneState {
        self.animator.target_state()
    }

    pub fn is_settled(&self) -> bool {
        self.animator.is_settled()
    }

    pub fn uniforms(&self) -> SceneUniforms {
        let l = &self.lighting;
        SceneUniforms {
            view_proj: self.camera.view_projection().to_cols_array_2d(),
            model: self.state().model.matrix().to_cols_array_2d(),
            light_dir: l.key_direction.extend(0.0).to_array(),
            light_color: l.key_radiance.extend(1.0).to_array(),
            ambient: l.ambient.extend(1.0).to_array(),
        }
    }
}
