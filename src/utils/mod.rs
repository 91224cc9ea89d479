//! Utility helpers: vector math and frame logging.

pub mod logging;
pub mod math;

pub use math::*;
