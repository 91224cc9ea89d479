//! Live-tunable parameters organised into switchable groups.

pub mod controller;
pub mod event;
pub mod group;
pub mod setting;

pub use controller::SettingsController;
pub use event::{ChangeEvent, CycleDirection};
pub use group::SettingGroup;
pub use setting::{Setting, SettingTarget};
