//! Small scalar and vector helpers layered on top of `glam`.

use glam::Vec2;
use std::ops::{Add, Div};

/// Squares the given value.
#[inline]
pub fn square(value: f32) -> f32 {
    value * value
}

/// Arithmetic mean of a non-empty slice of scalars or vectors.
///
/// Vectors are averaged per component. Callers must not pass an empty slice.
pub fn average<T>(values: &[T]) -> T
where
    T: Copy + Add<Output = T> + Div<f32, Output = T>,
{
    debug_assert!(!values.is_empty(), "average of an empty slice");
    let sum = values[1..].iter().fold(values[0], |acc, &v| acc + v);
    sum / values.len() as f32
}

/// Values that can be clamped into a closed scalar range.
pub trait Clamp: Sized {
    fn clamp_to(self, minimum: f32, maximum: f32) -> Self;
}

impl Clamp for f32 {
    #[inline]
    fn clamp_to(self, minimum: f32, maximum: f32) -> Self {
        self.clamp(minimum, maximum)
    }
}

impl Clamp for Vec2 {
    #[inline]
    fn clamp_to(self, minimum: f32, maximum: f32) -> Self {
        self.clamp(Vec2::splat(minimum), Vec2::splat(maximum))
    }
}

/// Clamps a scalar, or each component of a vector, into `[minimum, maximum]`.
#[inline]
pub fn clamp<T: Clamp>(value: T, minimum: f32, maximum: f32) -> T {
    value.clamp_to(minimum, maximum)
}

/// Fluid drag acting on a body moving at `velocity`.
///
/// Each axis uses its own squared component, so the result always points
/// along the negative axes regardless of the direction of travel. This is
/// the simplified air-resistance model the demo is built around.
pub fn drag_force(
    fluid_density: f32,
    drag_coefficient: f32,
    surface_area: f32,
    velocity: Vec2,
) -> Vec2 {
    -1.0 * ((fluid_density * drag_coefficient * surface_area) / 2.0) * (velocity * velocity)
}

/// Position change over `dt` for the velocity-Verlet scheme.
#[inline]
pub fn velocity_verlet_delta(velocity: Vec2, dt: f32, acceleration: Vec2) -> Vec2 {
    velocity * dt + 0.5 * acceleration * square(dt)
}
