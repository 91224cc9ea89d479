use serde::{Deserialize, Serialize};

use crate::config::MIN_TUNED_MASS;
use crate::core::Body;
use crate::dynamics::forces::ForceModel;
use crate::input::Key;

/// The single field a setting mutates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SettingTarget {
    GravityX,
    GravityY,
    FluidDensity,
    DragCoefficient,
    SurfaceArea,
    Restitution,
    Mass,
}

impl SettingTarget {
    /// Short label used when formatting values for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::GravityX => "X",
            Self::GravityY => "Y",
            Self::FluidDensity => "Density",
            Self::DragCoefficient => "Cd",
            Self::SurfaceArea => "Area",
            Self::Restitution => "Restitution",
            Self::Mass => "Mass",
        }
    }

    /// Adds `amount` to the targeted field.
    ///
    /// Density, drag coefficient and area stay non-negative and mass stays
    /// above [`MIN_TUNED_MASS`]; gravity and restitution are unbounded.
    pub fn apply(self, amount: f32, forces: &mut ForceModel, body: &mut Body) {
        match self {
            Self::GravityX => forces.gravity.x += amount,
            Self::GravityY => forces.gravity.y += amount,
            Self::FluidDensity => forces.fluid_density = (forces.fluid_density + amount).max(0.0),
            Self::DragCoefficient => {
                forces.drag_coefficient = (forces.drag_coefficient + amount).max(0.0)
            }
            Self::SurfaceArea => forces.surface_area = (forces.surface_area + amount).max(0.0),
            Self::Restitution => forces.restitution += amount,
            Self::Mass => body.adjust_mass(amount, MIN_TUNED_MASS),
        }
    }

    /// Current value of the targeted field.
    pub fn read(self, forces: &ForceModel, body: &Body) -> f32 {
        match self {
            Self::GravityX => forces.gravity.x,
            Self::GravityY => forces.gravity.y,
            Self::FluidDensity => forces.fluid_density,
            Self::DragCoefficient => forces.drag_coefficient,
            Self::SurfaceArea => forces.surface_area,
            Self::Restitution => forces.restitution,
            Self::Mass => body.mass(),
        }
    }
}

/// A live-tunable parameter bound to a trigger key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Setting {
    name: String,
    key: Key,
    change_amount: f32,
    target: SettingTarget,
}

impl Setting {
    pub fn new(name: impl Into<String>, key: Key, change_amount: f32, target: SettingTarget) -> Self {
        Self {
            name: name.into(),
            key: key.normalized(),
            change_amount,
            target,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn key(&self) -> Key {
        self.key
    }

    pub fn change_amount(&self) -> f32 {
        self.change_amount
    }

    pub fn target(&self) -> SettingTarget {
        self.target
    }

    /// Applies the configured change amount to the target field.
    pub fn invoke(&self, forces: &mut ForceModel, body: &mut Body) {
        self.target.apply(self.change_amount, forces, body);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn drag_coefficient_never_goes_negative() {
        let mut forces = ForceModel::inert();
        let mut body = Body::new(Vec2::ZERO, 1.0, 1.0).unwrap();
        let setting = Setting::new("Decrease", Key::Down, -1.0, SettingTarget::DragCoefficient);

        setting.invoke(&mut forces, &mut body);
        assert_eq!(forces.drag_coefficient, 0.0);
    }

    #[test]
    fn labels_are_distinct() {
        let targets = [
            SettingTarget::GravityX,
            SettingTarget::GravityY,
            SettingTarget::FluidDensity,
            SettingTarget::DragCoefficient,
            SettingTarget::SurfaceArea,
            SettingTarget::Restitution,
            SettingTarget::Mass,
        ];
        for (i, a) in targets.iter().enumerate() {
            for b in &targets[i + 1..] {
                assert_ne!(a.label(), b.label(), "{a:?} and {b:?} share a label");
            }
        }
    }

    #[test]
    fn gravity_accepts_any_sign() {
        let mut forces = ForceModel::inert();
        let mut body = Body::new(Vec2::ZERO, 1.0, 1.0).unwrap();
        SettingTarget::GravityY.apply(-2.5, &mut forces, &mut body);
        assert_eq!(SettingTarget::GravityY.read(&forces, &body), -2.5);
    }
}
