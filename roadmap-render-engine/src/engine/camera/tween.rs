use bevy::math::curve::{Curve, EaseFunction};
use bevy::prelude::*;

/// Values a tween can blend between.
pub trait Interpolate: Copy {
    fn interpolate(from: Self, to: Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(from: Self, to: Self, t: f32) -> Self {
        from + (to - from) * t
    }
}

impl Interpolate for Vec3 {
    fn interpolate(from: Self, to: Self, t: f32) -> Self {
        from.lerp(to, t)
    }
}

/// Quadratic ease-in-out animation of one value over a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween<T: Interpolate> {
    from: T,
    to: T,
    duration: f32,
    elapsed: f32,
}

impl<T: Interpolate> Tween<T> {
    pub fn new(from: T, to: T, duration: f32) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
        }
    }

    pub fn target(&self) -> T {
        self.to
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn value(&self) -> T {
        if self.is_finished() {
            return self.to;
        }
        let t = EaseFunction::QuadraticInOut.sample_clamped(self.elapsed / self.duration);
        T::interpolate(self.from, self.to, t)
    }

    /// Step the clock and return the new value.
    pub fn advance(&mut self, delta_secs: f32) -> T {
        self.elapsed = (self.elapsed + delta_secs).min(self.duration);
        self.value()
    }
}
