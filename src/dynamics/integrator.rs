use glam::Vec2;

use crate::config::{FORCE_LIMIT, UNIT_SCALE, VELOCITY_LIMIT};
use crate::core::Body;
use crate::dynamics::forces::ForceModel;
use crate::utils::math::{average, clamp, velocity_verlet_delta};

/// Velocity-Verlet integrator stepping the body forward one frame at a time.
#[derive(Debug, Clone)]
pub struct Integrator {
    /// Per-axis bound applied to the accumulated force.
    pub force_limit: f32,
    /// Per-axis bound applied to the resulting velocity.
    pub velocity_limit: f32,
    /// Metres to pixels.
    pub unit_scale: f32,
}

impl Default for Integrator {
    fn default() -> Self {
        Self::new()
    }
}

impl Integrator {
    pub fn new() -> Self {
        Self {
            force_limit: FORCE_LIMIT,
            velocity_limit: VELOCITY_LIMIT,
            unit_scale: UNIT_SCALE,
        }
    }

    pub fn with_limits(mut self, force_limit: f32, velocity_limit: f32) -> Self {
        self.force_limit = force_limit;
        self.velocity_limit = velocity_limit;
        self
    }

    /// Force on the body this frame, clamped per axis.
    pub fn accumulate_force(&self, body: &Body, forces: &ForceModel) -> Vec2 {
        clamp(
            forces.total_force(body),
            -self.force_limit,
            self.force_limit,
        )
    }

    /// Advances position, velocity and acceleration by `dt` seconds.
    ///
    /// The body's mass must be positive. A frame with `dt <= 0` leaves the
    /// body untouched.
    pub fn step(&self, body: &mut Body, forces: &ForceModel, dt: f32) {
        if dt <= 0.0 {
            return;
        }

        let force = self.accumulate_force(body, forces);

        let delta = velocity_verlet_delta(body.velocity, dt, body.acceleration);
        body.position += delta * self.unit_scale;

        let new_acceleration = force / body.mass();
        body.acceleration = average(&[new_acceleration, body.acceleration]);
        body.velocity += body.acceleration * dt;

        body.velocity = clamp(body.velocity, -self.velocity_limit, self.velocity_limit);
    }
}
