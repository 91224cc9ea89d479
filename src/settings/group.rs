use crate::core::Body;
use crate::dynamics::forces::ForceModel;
use crate::error::{GravityLabError, Result};

use super::setting::{Setting, SettingTarget};

/// Named, ordered collection of settings switched in and out as a unit.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingGroup {
    name: String,
    settings: Vec<Setting>,
}

impl SettingGroup {
    /// Builds a group, rejecting repeated setting names.
    pub fn new(name: impl Into<String>, settings: Vec<Setting>) -> Result<Self> {
        let mut group = Self {
            name: name.into(),
            settings: Vec::with_capacity(settings.len()),
        };
        for setting in settings {
            group.push(setting)?;
        }
        Ok(group)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn settings(&self) -> &[Setting] {
        &self.settings
    }

    pub fn len(&self) -> usize {
        self.settings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }

    pub(crate) fn push(&mut self, setting: Setting) -> Result<()> {
        if self.settings.iter().any(|s| s.name() == setting.name()) {
            return Err(GravityLabError::DuplicateSetting {
                group: self.name.clone(),
                setting: setting.name().to_string(),
            });
        }
        self.settings.push(setting);
        Ok(())
    }

    pub fn setting(&self, name: &str) -> Result<&Setting> {
        self.settings
            .iter()
            .find(|s| s.name() == name)
            .ok_or_else(|| GravityLabError::SettingNotFound {
                group: self.name.clone(),
                setting: name.to_string(),
            })
    }

    /// Distinct targets in first-seen order.
    pub fn targets(&self) -> Vec<SettingTarget> {
        let mut targets = Vec::new();
        for setting in &self.settings {
            if !targets.contains(&setting.target()) {
                targets.push(setting.target());
            }
        }
        targets
    }

    /// Formats the current value of every target, e.g. `X: 0.00, Y: 9.81`.
    pub fn display_value(&self, forces: &ForceModel, body: &Body) -> String {
        self.targets()
            .into_iter()
            .map(|target| format!("{}: {:.2}", target.label(), target.read(forces, body)))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
