//! Core data shared by every subsystem: the body and the play area.

pub mod body;
pub mod types;

pub use body::Body;
pub use types::Bounds;
