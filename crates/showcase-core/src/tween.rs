use crate::easing::Easing;
use glam::{Vec2, Vec3};

/// Values a [`Tween`] can interpolate.
pub trait Lerp: Copy {
    fn lerp_to(self, to: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn lerp_to(self, to: Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

impl Lerp for Vec2 {
    #[inline]
    fn lerp_to(self, to: Self, t: f32) -> Self {
        self.lerp(to, t)
    }
}

impl Lerp for Vec3 {
    #[inline]
    fn lerp_to(self, to: Self, t: f32) -> Self {
        self.lerp(to, t)
    }
}

/// Time-bounded eased transition toward the most recently set target.
///
/// Retargeting starts a fresh transition from the current value; an in-flight
/// transition toward the old target is simply replaced.
#[derive(Clone, Debug)]
pub struct Tween<T: Lerp> {
    from: T,
    to: T,
    current: T,
    elapsed: f32,
    duration: f32,
    easing: Easing,
}

impl<T: Lerp> Tween<T> {
    pub fn new(value: T) -> Self {
        Self {
            from: value,
            to: value,
            current: value,
            elapsed: 0.0,
            duration: 0.0,
            easing: Easing::Linear,
        }
    }

    pub fn retarget(&mut self, target: T, duration: f32, easing: Easing) {
        self.from = self.current;
        self.to = target;
        self.elapsed = 0.0;
        self.duration = duration.max(0.0);
        self.easing = easing;
        if self.duration == 0.0 {
            self.current = target;
        }
    }

    /// Advance by `dt` seconds and return the new value.
    pub fn step(&mut self, dt: f32) -> T {
        if self.is_settled() {
            return self.current;
        }
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
        self.current = if self.elapsed >= self.duration {
            self.to
        } else {
            let t = self.easing.apply(self.elapsed / self.duration);
            self.from.lerp_to(self.to, t)
        };
        self.current
    }

    #[inline]
    pub fn value(&self) -> T {
        self.current
    }

    #[inline]
    pub fn target(&self) -> T {
        self.to
    }

    #[inline]
    pub fn is_settled(&self) -> bool {
        self.elapsed >= self.duration
    }
}
