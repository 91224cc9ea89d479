use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::{GravityLabError, Result};

/// The single simulated body, tracked by its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    mass: f32,
    radius: f32,
}

impl Body {
    /// Creates a body at rest. Mass and radius must be strictly positive.
    pub fn new(position: Vec2, mass: f32, radius: f32) -> Result<Self> {
        if !(mass > 0.0) {
            return Err(GravityLabError::InvalidMass(mass));
        }
        if !(radius > 0.0) {
            return Err(GravityLabError::InvalidRadius(radius));
        }
        Ok(Self {
            position,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            mass,
            radius,
        })
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_acceleration(mut self, acceleration: Vec2) -> Self {
        self.acceleration = acceleration;
        self
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Edge length of the body's bounding square.
    pub fn size(&self) -> f32 {
        self.radius * 2.0
    }

    /// Shifts the mass by `delta`, never letting it drop below `floor`.
    pub(crate) fn adjust_mass(&mut self, delta: f32, floor: f32) {
        self.mass = (self.mass + delta).max(floor);
    }
}
