use crate::constants::{MAX_PROGRESS, WHEEL_LINE_PX};

/// How the browser reported a wheel delta (`WheelEvent.deltaMode`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WheelDeltaMode {
    #[default]
    Pixel,
    Line,
    Page,
}

impl WheelDeltaMode {
    pub fn from_dom(mode: u32) -> Self {
        match mode {
            1 => Self::Line,
            2 => Self::Page,
            _ => Self::Pixel,
        }
    }
}

/// Convert a raw vertical wheel delta to pixels.
///
/// `page_px` is the viewport height used for page-mode deltas.
#[inline]
pub fn normalize_wheel_delta(delta_y: f32, mode: WheelDeltaMode, page_px: f32) -> f32 {
    match mode {
        WheelDeltaMode::Pixel => delta_y,
        WheelDeltaMode::Line => delta_y * WHEEL_LINE_PX,
        WheelDeltaMode::Page => delta_y * page_px.max(1.0),
    }
}

/// Scroll progress, always clamped to `[0, max]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Progress {
    value: f32,
    max: f32,
}

impl Default for Progress {
    fn default() -> Self {
        Self::new(MAX_PROGRESS)
    }
}

impl Progress {
    pub fn new(max: f32) -> Self {
        let max = if max.is_finite() { max.max(0.0) } else { MAX_PROGRESS };
        Self { value: 0.0, max }
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[inline]
    pub fn max(&self) -> f32 {
        self.max
    }

    /// Add `delta * sensitivity` and clamp. Non-finite input leaves progress unchanged.
    pub fn accumulate(&mut self, delta: f32, sensitivity: f32) -> f32 {
        let step = delta * sensitivity;
        if step.is_finite() {
            self.value = (self.value + step).clamp(0.0, self.max);
        }
        self.value
    }
}
