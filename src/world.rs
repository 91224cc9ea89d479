use log::warn;

use crate::{
    collision::{BoundsCollider, CollisionReport},
    config::SimulationConfig,
    core::{Body, Bounds},
    dynamics::{ForceModel, Integrator, frontal_area},
    error::Result,
    input::{Key, KeySnapshot},
    settings::{ChangeEvent, Setting, SettingTarget, SettingsController},
    stats::StatBoard,
    utils::logging::{FrameSpan, warn_if_negative_dt},
};

/// Owns the body, its force model and the settings that tune them, and
/// advances all of them one frame at a time.
#[derive(Debug)]
pub struct Simulation {
    body: Body,
    forces: ForceModel,
    integrator: Integrator,
    collider: BoundsCollider,
    controller: SettingsController,
    stats: StatBoard,
    frame: u64,
    last_collision: CollisionReport,
}

impl Simulation {
    /// Builds a simulation with no setting groups registered.
    pub fn new(config: &SimulationConfig) -> Result<Self> {
        config.validate()?;

        let body = Body::new(config.start_position, config.mass, config.radius)?;
        let bounds = Bounds::new(config.screen_width, config.screen_height)?;
        let forces = ForceModel {
            gravity: config.gravity,
            fluid_density: config.fluid_density,
            drag_coefficient: config.drag_coefficient,
            surface_area: frontal_area(config.radius),
            restitution: config.restitution,
        };

        Ok(Self {
            body,
            forces,
            integrator: Integrator::new(),
            collider: BoundsCollider::new(bounds),
            controller: SettingsController::new(config.next_group_key, config.previous_group_key),
            stats: StatBoard::new(),
            frame: 0,
            last_collision: CollisionReport::default(),
        })
    }

    /// Builds a simulation wired with the stock Gravity, Drag, Fluid Density,
    /// Restitution and Mass groups.
    pub fn with_default_settings(config: &SimulationConfig) -> Result<Self> {
        let mut sim = Self::new(config)?;

        sim.register_group(
            "Gravity",
            vec![
                Setting::new("Up", Key::Up, -1.0, SettingTarget::GravityY),
                Setting::new("Down", Key::Down, 1.0, SettingTarget::GravityY),
                Setting::new("Left", Key::Left, -1.0, SettingTarget::GravityX),
                Setting::new("Right", Key::Right, 1.0, SettingTarget::GravityX),
            ],
        )?;
        sim.register_group(
            "Drag",
            vec![
                Setting::new("Increase", Key::Up, 0.1, SettingTarget::DragCoefficient),
                Setting::new("Decrease", Key::Down, -0.1, SettingTarget::DragCoefficient),
            ],
        )?;
        sim.register_group(
            "Fluid Density",
            vec![
                Setting::new("Increase", Key::Up, 0.1, SettingTarget::FluidDensity),
                Setting::new("Decrease", Key::Down, -0.1, SettingTarget::FluidDensity),
            ],
        )?;
        sim.register_group(
            "Restitution",
            vec![
                Setting::new("Increase", Key::Up, 0.1, SettingTarget::Restitution),
                Setting::new("Decrease", Key::Down, -0.1, SettingTarget::Restitution),
            ],
        )?;
        sim.register_group(
            "Mass",
            vec![
                Setting::new("Increase", Key::Up, 0.01, SettingTarget::Mass),
                Setting::new("Decrease", Key::Down, -0.01, SettingTarget::Mass),
            ],
        )?;

        Ok(sim)
    }

    /// Registers a setting group and gives it a line on the stat board.
    pub fn register_group(&mut self, name: &str, settings: Vec<Setting>) -> Result<()> {
        self.controller.register_group(name, settings)?;
        let text = self.controller.group(name)?.display_value(&self.forces, &self.body);
        self.stats.add_stat(name, text)?;
        if self.controller.groups().len() == 1 {
            self.stats.select_only(name)?;
        }
        Ok(())
    }

    pub fn add_setting(&mut self, group_name: &str, setting: Setting) -> Result<()> {
        self.controller.add_setting(group_name, setting)?;
        self.refresh_stats();
        Ok(())
    }

    pub fn on_group_changed<F>(&mut self, listener: F)
    where
        F: FnMut(&ChangeEvent) + 'static,
    {
        self.controller.on_group_changed(listener);
    }

    /// Applies a named setting without going through key input.
    pub fn apply_setting(&mut self, group_name: &str, setting_name: &str) -> Result<()> {
        self.controller
            .apply_setting(group_name, setting_name, &mut self.forces, &mut self.body)?;
        self.refresh_stats();
        Ok(())
    }

    /// Advances settings, physics and collision by one frame.
    ///
    /// A frame with `dt <= 0` still processes input but leaves the body's
    /// kinematic state untouched.
    pub fn tick(&mut self, dt: f32, snapshot: &KeySnapshot) {
        self.frame += 1;
        let mut span = FrameSpan::new(self.frame, dt);

        let events = self
            .controller
            .tick(snapshot, &mut self.forces, &mut self.body);

        if dt > 0.0 {
            self.integrator.step(&mut self.body, &self.forces, dt);
            self.last_collision = self.collider.resolve(&mut self.body, &self.forces);
        } else {
            warn_if_negative_dt(dt);
            self.last_collision = CollisionReport::default();
        }

        for event in &events {
            if let Err(err) = self.stats.select_only(&event.current_group) {
                warn!("Could not highlight active group: {err}");
            }
        }
        self.refresh_stats();

        span.record_position(self.body.position);
    }

    fn refresh_stats(&mut self) {
        for (name, text) in self.controller.display_values(&self.forces, &self.body) {
            if let Err(err) = self.stats.update_stat(&name, text) {
                warn!("Stat board out of sync: {err}");
            }
        }
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    pub fn forces(&self) -> &ForceModel {
        &self.forces
    }

    pub fn forces_mut(&mut self) -> &mut ForceModel {
        &mut self.forces
    }

    pub fn bounds(&self) -> Bounds {
        self.collider.bounds()
    }

    pub fn integrator_mut(&mut self) -> &mut Integrator {
        &mut self.integrator
    }

    pub fn controller(&self) -> &SettingsController {
        &self.controller
    }

    pub fn stats(&self) -> &StatBoard {
        &self.stats
    }

    /// Number of frames ticked so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Edges resolved during the most recent frame.
    pub fn last_collision(&self) -> &CollisionReport {
        &self.last_collision
    }
}
