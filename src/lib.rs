//! Gravity Lab – a single-body physics playground.
//!
//! A body falls under configurable gravity and fluid drag, bounces off the
//! edges of a rectangular play area, and every coefficient can be tuned live
//! through groups of key-bound settings. Rendering and input devices stay
//! outside the crate: hosts feed a [`KeySnapshot`] and a frame time into
//! [`Simulation::tick`] and read the body and [`StatBoard`] back.

pub mod collision;
pub mod config;
pub mod core;
pub mod dynamics;
pub mod error;
pub mod input;
pub mod settings;
pub mod stats;
pub mod utils;
pub mod world;

pub use glam::Vec2;

pub use collision::{BoundsCollider, CollisionReport, Edge};
pub use config::SimulationConfig;
pub use crate::core::{Body, Bounds};
pub use dynamics::{ForceModel, Integrator};
pub use error::{GravityLabError, Result};
pub use input::{EdgeDetector, Key, KeySnapshot, rising_edge};
pub use settings::{
    ChangeEvent, CycleDirection, Setting, SettingGroup, SettingTarget, SettingsController,
};
pub use stats::{StatBoard, StatText};
pub use world::Simulation;
