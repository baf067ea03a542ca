/// Easing curves applied to a normalized time `t` in `[0, 1]`.
///
/// `PowerOut(n)` follows the tweening-library convention
/// `1 - (1 - t)^(n + 1)`, so `PowerOut(2)` is a cubic ease-out.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    PowerOut(u8),
}

impl Default for Easing {
    fn default() -> Self {
        Self::PowerOut(2)
    }
}

impl Easing {
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Self::Linear => t,
            Self::PowerOut(n) => 1.0 - (1.0 - t).powi(n as i32 + 1),
        }
    }
}
