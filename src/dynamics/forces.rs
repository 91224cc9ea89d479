use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

use crate::config::{
    DEFAULT_DRAG_COEFFICIENT, DEFAULT_FLUID_DENSITY, DEFAULT_GRAVITY, DEFAULT_RADIUS,
    DEFAULT_RESTITUTION, SURFACE_AREA_SCALE,
};
use crate::core::Body;
use crate::utils::math::drag_force;

/// Tunable physical coefficients acting on the body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForceModel {
    pub gravity: Vec2,
    pub fluid_density: f32,
    pub drag_coefficient: f32,
    /// Frontal area facing the fluid, in m².
    pub surface_area: f32,
    /// Negative values flip the velocity on impact.
    pub restitution: f32,
}

impl Default for ForceModel {
    fn default() -> Self {
        Self {
            gravity: Vec2::from_array(DEFAULT_GRAVITY),
            fluid_density: DEFAULT_FLUID_DENSITY,
            drag_coefficient: DEFAULT_DRAG_COEFFICIENT,
            surface_area: frontal_area(DEFAULT_RADIUS),
            restitution: DEFAULT_RESTITUTION,
        }
    }
}

impl ForceModel {
    /// Model with every coefficient zeroed: no gravity, drag, or bounce.
    pub fn inert() -> Self {
        Self {
            gravity: Vec2::ZERO,
            fluid_density: 0.0,
            drag_coefficient: 0.0,
            surface_area: 0.0,
            restitution: 0.0,
        }
    }

    pub fn with_gravity(mut self, gravity: Vec2) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_drag(mut self, fluid_density: f32, drag_coefficient: f32) -> Self {
        self.fluid_density = fluid_density;
        self.drag_coefficient = drag_coefficient;
        self
    }

    pub fn with_surface_area(mut self, surface_area: f32) -> Self {
        self.surface_area = surface_area;
        self
    }

    pub fn with_restitution(mut self, restitution: f32) -> Self {
        self.restitution = restitution;
        self
    }

    /// Weight of the body under the current gravity.
    pub fn weight(&self, body: &Body) -> Vec2 {
        self.gravity * body.mass()
    }

    /// Air resistance at the body's current velocity.
    pub fn drag(&self, body: &Body) -> Vec2 {
        drag_force(
            self.fluid_density,
            self.drag_coefficient,
            self.surface_area,
            body.velocity,
        )
    }

    /// Unclamped sum of every force acting on the body.
    pub fn total_force(&self, body: &Body) -> Vec2 {
        self.weight(body) + self.drag(body)
    }
}

/// Frontal area of a ball of `radius` pixels, scaled for the 1 px = 1 cm relation.
pub fn frontal_area(radius: f32) -> f32 {
    PI * radius * radius / SURFACE_AREA_SCALE
}
