//! Visual-side state types shared with the web frontend.
//!
//! These types avoid platform-specific APIs. The web frontend reads them each
//! frame to build camera matrices, the model matrix and overlay styles.

use crate::constants::{
    CAMERA_EYE, CAMERA_FOVY_DEG, CAMERA_ZFAR, CAMERA_ZNEAR, MODEL_START_POSITION,
    MODEL_START_SCALE,
};
use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Showcase camera looking at the origin for a `width` x `height` viewport.
    pub fn showcase(width: f32, height: f32) -> Self {
        let mut cam = Self {
            eye: CAMERA_EYE,
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        };
        cam.set_viewport(width, height);
        cam
    }

    /// Update the aspect ratio; degenerate sizes keep the previous aspect.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite() {
            self.aspect = width / height;
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Position, Euler rotation (XYZ order, radians) and scale of the model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelTransform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl ModelTransform {
    /// Pose applied when the asset finishes loading.
    pub fn initial() -> Self {
        Self {
            position: MODEL_START_POSITION,
            rotation: Vec3::ZERO,
            scale: Vec3::splat(MODEL_START_SCALE),
        }
    }

    pub fn matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_scale_rotation_translation(self.scale, rotation, self.position)
    }
}

/// Opacity and CSS pixel offset of one text overlay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayState {
    pub opacity: f32,
    pub offset: Vec2,
}

impl OverlayState {
    pub const HIDDEN: Self = Self {
        opacity: 0.0,
        offset: Vec2::ZERO,
    };
}

/// Everything the render and overlay steps read each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneState {
    pub model: ModelTransform,
    pub overlays: [OverlayState; 2],
}

impl SceneState {
    pub fn initial() -> Self {
        Self {
            model: ModelTransform::initial(),
            overlays: [OverlayState::HIDDEN; 2],
        }
    }
}
