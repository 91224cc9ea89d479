//! Simulation dynamics: the force model and the frame integrator.

pub mod forces;
pub mod integrator;

pub use forces::{ForceModel, frontal_area};
pub use integrator::Integrator;
