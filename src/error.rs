//! Error types for Gravity Lab.
//!
//! All fallible setup and lookup operations return [`GravityLabError`] through
//! the crate-wide [`Result`] alias. Per-frame stepping never fails.

use std::fmt;

/// Main error type for the crate.
///
/// Variants split into configuration errors, raised while wiring the
/// simulation, and lookup errors, raised when a name does not resolve.
#[derive(Debug, Clone, PartialEq)]
pub enum GravityLabError {
    /// A setting group with this name is already registered.
    DuplicateGroup(String),
    /// A setting with this name already exists in the group.
    DuplicateSetting { group: String, setting: String },
    /// A stat with this name is already on the board.
    DuplicateStat(String),
    /// Body mass must be strictly positive.
    InvalidMass(f32),
    /// Body radius must be strictly positive.
    InvalidRadius(f32),
    /// Play area dimensions must be strictly positive.
    InvalidBounds { width: u32, height: u32 },
    /// No setting group with this name is registered.
    GroupNotFound(String),
    /// The group exists but holds no setting with this name.
    SettingNotFound { group: String, setting: String },
    /// No stat with this name is on the board.
    StatNotFound(String),
}

impl GravityLabError {
    /// Returns true for errors raised while configuring the simulation.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::DuplicateGroup(_)
                | Self::DuplicateSetting { .. }
                | Self::DuplicateStat(_)
                | Self::InvalidMass(_)
                | Self::InvalidRadius(_)
                | Self::InvalidBounds { .. }
        )
    }

    /// Returns true for errors raised when a name does not resolve.
    pub fn is_lookup(&self) -> bool {
        matches!(
            self,
            Self::GroupNotFound(_) | Self::SettingNotFound { .. } | Self::StatNotFound(_)
        )
    }
}

impl fmt::Display for GravityLabError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::DuplicateGroup(name) => write!(f, "Setting group already registered: {name}"),
            Self::DuplicateSetting { group, setting } => {
                write!(f, "Setting '{setting}' already exists in group '{group}'")
            }
            Self::DuplicateStat(name) => write!(f, "Stat already on the board: {name}"),
            Self::InvalidMass(mass) => write!(f, "Body mass must be positive, got {mass}"),
            Self::InvalidRadius(radius) => write!(f, "Body radius must be positive, got {radius}"),
            Self::InvalidBounds { width, height } => {
                write!(f, "Play area must be non-empty, got {width}x{height}")
            }
            Self::GroupNotFound(name) => write!(f, "Setting group not found: {name}"),
            Self::SettingNotFound { group, setting } => {
                write!(f, "Setting '{setting}' not found in group '{group}'")
            }
            Self::StatNotFound(name) => write!(f, "Stat not found: {name}"),
        }
    }
}

impl std::error::Error for GravityLabError {}

/// Convenient Result type alias for Gravity Lab operations.
pub type Result<T> = std::result::Result<T, GravityLabError>;
