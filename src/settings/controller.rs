use log::{debug, info};
use std::fmt;

use crate::core::Body;
use crate::dynamics::forces::ForceModel;
use crate::error::{GravityLabError, Result};
use crate::input::{EdgeDetector, Key, KeySnapshot};

use super::event::{ChangeEvent, CycleDirection};
use super::group::SettingGroup;
use super::setting::Setting;

type Listener = Box<dyn FnMut(&ChangeEvent)>;

/// Edge-triggered state machine over named setting groups.
///
/// One group is active at a time. The next/previous keys cycle the active
/// group with wrap-around, and each setting in the active group fires once
/// per key press.
pub struct SettingsController {
    groups: Vec<SettingGroup>,
    active: usize,
    next_key: Key,
    previous_key: Key,
    input: EdgeDetector,
    listeners: Vec<Listener>,
}

impl fmt::Debug for SettingsController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingsController")
            .field("groups", &self.groups)
            .field("active", &self.active)
            .field("next_key", &self.next_key)
            .field("previous_key", &self.previous_key)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl SettingsController {
    pub fn new(next_key: Key, previous_key: Key) -> Self {
        Self {
            groups: Vec::new(),
            active: 0,
            next_key,
            previous_key,
            input: EdgeDetector::new(),
            listeners: Vec::new(),
        }
    }

    /// Appends a group at the end of the cycling order.
    pub fn register_group(&mut self, name: impl Into<String>, settings: Vec<Setting>) -> Result<()> {
        let group = SettingGroup::new(name, settings)?;
        if self.groups.iter().any(|g| g.name() == group.name()) {
            return Err(GravityLabError::DuplicateGroup(group.name().to_string()));
        }
        debug!(
            "Registered setting group '{}' with {} settings",
            group.name(),
            group.len()
        );
        self.groups.push(group);
        Ok(())
    }

    /// Adds one setting to an already registered group.
    pub fn add_setting(&mut self, group_name: &str, setting: Setting) -> Result<()> {
        let group = self
            .groups
            .iter_mut()
            .find(|g| g.name() == group_name)
            .ok_or_else(|| GravityLabError::GroupNotFound(group_name.to_string()))?;
        group.push(setting)
    }

    /// Registers a listener notified on every group change, in registration order.
    pub fn on_group_changed<F>(&mut self, listener: F)
    where
        F: FnMut(&ChangeEvent) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn group(&self, name: &str) -> Result<&SettingGroup> {
        self.groups
            .iter()
            .find(|g| g.name() == name)
            .ok_or_else(|| GravityLabError::GroupNotFound(name.to_string()))
    }

    pub fn groups(&self) -> &[SettingGroup] {
        &self.groups
    }

    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.name())
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_group(&self) -> Option<&SettingGroup> {
        self.groups.get(self.active)
    }

    /// Moves to the next group, wrapping from the last to the first.
    pub fn advance(&mut self) -> Option<ChangeEvent> {
        if self.groups.is_empty() {
            return None;
        }
        let target = if self.active + 1 < self.groups.len() {
            self.active + 1
        } else {
            0
        };
        Some(self.switch_to(target, CycleDirection::Next))
    }

    /// Moves to the previous group, wrapping from the first to the last.
    pub fn retreat(&mut self) -> Option<ChangeEvent> {
        if self.groups.is_empty() {
            return None;
        }
        let target = if self.active == 0 {
            self.groups.len() - 1
        } else {
            self.active - 1
        };
        Some(self.switch_to(target, CycleDirection::Previous))
    }

    fn switch_to(&mut self, target: usize, direction: CycleDirection) -> ChangeEvent {
        let event = ChangeEvent::new(
            self.groups[self.active].name(),
            self.groups[target].name(),
            direction,
        );
        self.active = target;
        info!(
            "Setting group changed: {} -> {}",
            event.previous_group, event.current_group
        );
        for listener in self.listeners.iter_mut() {
            listener(&event);
        }
        event
    }

    /// Fires every setting of the active group whose key has a rising edge.
    ///
    /// Uses the snapshot captured by the current [`SettingsController::tick`].
    pub fn apply_active_group_input(&self, forces: &mut ForceModel, body: &mut Body) {
        let Some(group) = self.groups.get(self.active) else {
            return;
        };
        for setting in group.settings() {
            if self.input.rising(setting.key()) {
                setting.invoke(forces, body);
                debug!(
                    "{}/{} applied {:+}",
                    group.name(),
                    setting.name(),
                    setting.change_amount()
                );
            }
        }
    }

    /// Applies a named setting directly, outside the key-driven path.
    pub fn apply_setting(
        &self,
        group_name: &str,
        setting_name: &str,
        forces: &mut ForceModel,
        body: &mut Body,
    ) -> Result<()> {
        let setting = self.group(group_name)?.setting(setting_name)?;
        setting.invoke(forces, body);
        Ok(())
    }

    /// Per-frame entry point. Returns the group changes made this frame.
    pub fn tick(
        &mut self,
        snapshot: &KeySnapshot,
        forces: &mut ForceModel,
        body: &mut Body,
    ) -> Vec<ChangeEvent> {
        self.input.capture(snapshot);

        let mut events = Vec::new();
        if self.input.rising(self.next_key) {
            events.extend(self.advance());
        }
        if self.input.rising(self.previous_key) {
            events.extend(self.retreat());
        }

        self.apply_active_group_input(forces, body);

        self.input.finish_frame();
        events
    }

    /// Display text for every group, in cycling order.
    pub fn display_values(&self, forces: &ForceModel, body: &Body) -> Vec<(String, String)> {
        self.groups
            .iter()
            .map(|g| (g.name().to_string(), g.display_value(forces, body)))
            .collect()
    }
}
