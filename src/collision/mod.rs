//! Collision handling against the play area boundary.

pub mod bounds;

pub use bounds::{BoundsCollider, CollisionReport, Edge};
