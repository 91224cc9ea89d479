//! Default constants and the host-facing simulation configuration.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::{GravityLabError, Result};
use crate::input::Key;

/// Default gravity vector in screen space (Y-down), in m/s².
pub const DEFAULT_GRAVITY: [f32; 2] = [0.0, 9.807];

/// Default frame time fed to the integrator (in seconds).
pub const DEFAULT_TIME_STEP: f32 = 0.02;

/// Default body mass in kilograms.
pub const DEFAULT_MASS: f32 = 0.1;

/// Default body radius in pixels (1 px = 1 cm).
pub const DEFAULT_RADIUS: f32 = 50.0;

/// Negative so that an impact flips the direction of travel.
pub const DEFAULT_RESTITUTION: f32 = -0.5;

/// Density of air in kg/m³. Try 1000 for water.
pub const DEFAULT_FLUID_DENSITY: f32 = 1.2;

/// Drag coefficient of a sphere.
pub const DEFAULT_DRAG_COEFFICIENT: f32 = 0.47;

/// Frontal area divisor compensating for the 1 px = 1 cm relation.
pub const SURFACE_AREA_SCALE: f32 = 50_000.0;

/// Converts integrated metres into pixels.
pub const UNIT_SCALE: f32 = 100.0;

/// Symmetric per-axis bound on the accumulated force.
pub const FORCE_LIMIT: f32 = 10.0;

/// Symmetric per-axis bound on the body velocity.
///
/// The integrator applies it before boundary collisions are resolved, so an
/// approach faster than this reaches the collider already capped. Raise it
/// through [`crate::Integrator::with_limits`] when exact impact speeds matter.
pub const VELOCITY_LIMIT: f32 = 2.0;

/// Default play area width in pixels.
pub const DEFAULT_SCREEN_WIDTH: u32 = 800;

/// Default play area height in pixels.
pub const DEFAULT_SCREEN_HEIGHT: u32 = 680;

/// Default spawn position of the body's top-left corner.
pub const DEFAULT_START_POSITION: [f32; 2] = [200.0, 0.0];

/// Smallest mass a live setting may tune the body down to.
pub const MIN_TUNED_MASS: f32 = 0.01;

/// Everything a host needs to build a [`crate::Simulation`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub gravity: Vec2,
    pub fluid_density: f32,
    pub drag_coefficient: f32,
    pub restitution: f32,
    pub mass: f32,
    pub radius: f32,
    pub start_position: Vec2,
    pub screen_width: u32,
    pub screen_height: u32,
    pub next_group_key: Key,
    pub previous_group_key: Key,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravity: Vec2::from_array(DEFAULT_GRAVITY),
            fluid_density: DEFAULT_FLUID_DENSITY,
            drag_coefficient: DEFAULT_DRAG_COEFFICIENT,
            restitution: DEFAULT_RESTITUTION,
            mass: DEFAULT_MASS,
            radius: DEFAULT_RADIUS,
            start_position: Vec2::from_array(DEFAULT_START_POSITION),
            screen_width: DEFAULT_SCREEN_WIDTH,
            screen_height: DEFAULT_SCREEN_HEIGHT,
            next_group_key: Key::PageDown,
            previous_group_key: Key::PageUp,
        }
    }
}

impl SimulationConfig {
    /// Rejects body and play-area values the integrator cannot work with.
    pub fn validate(&self) -> Result<()> {
        if !(self.mass > 0.0) {
            return Err(GravityLabError::InvalidMass(self.mass));
        }
        if !(self.radius > 0.0) {
            return Err(GravityLabError::InvalidRadius(self.radius));
        }
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(GravityLabError::InvalidBounds {
                width: self.screen_width,
                height: self.screen_height,
            });
        }
        Ok(())
    }
}
