use approx::assert_relative_eq;
use gravity_lab::*;
use std::cell::RefCell;
use std::rc::Rc;

const DT: f32 = 0.02;

fn still_config() -> SimulationConfig {
    SimulationConfig {
        gravity: Vec2::ZERO,
        fluid_density: 0.0,
        drag_coefficient: 0.0,
        mass: 1.0,
        radius: 10.0,
        start_position: Vec2::new(100.0, 100.0),
        ..Default::default()
    }
}

#[test]
fn body_without_forces_stays_put() {
    let mut sim = Simulation::new(&still_config()).expect("valid config");
    let idle = KeySnapshot::new();

    for dt in [0.0, 0.001, DT, 0.5, 1.0] {
        sim.tick(dt, &idle);
    }

    assert_eq!(sim.body().position, Vec2::new(100.0, 100.0));
    assert_eq!(sim.body().velocity, Vec2::ZERO);
    assert_eq!(sim.frame(), 5);
}

#[test]
fn gravity_only_matches_closed_form_trajectory() {
    let gravity = Vec2::new(0.0, 1.0);
    let config = SimulationConfig {
        gravity,
        ..still_config()
    };
    let mut sim = Simulation::new(&config).expect("valid config");
    // Start at steady acceleration so the averaging step is exact.
    sim.body_mut().acceleration = gravity;
    let start = sim.body().position;
    let idle = KeySnapshot::new();

    for n in 1..=50 {
        sim.tick(DT, &idle);
        let t = n as f32 * DT;
        let expected_y = start.y + 0.5 * gravity.y * t * t * 100.0;
        assert_relative_eq!(sim.body().position.y, expected_y, max_relative = 1e-4);
        assert_relative_eq!(sim.body().velocity.y, gravity.y * t, max_relative = 1e-4);
        assert_eq!(sim.body().position.x, start.x);
    }
}

#[test]
fn zero_dt_frames_only_apply_settings() {
    let mut sim = Simulation::with_default_settings(&SimulationConfig::default())
        .expect("default wiring");
    let idle = KeySnapshot::new();
    for _ in 0..20 {
        sim.tick(DT, &idle);
    }
    let before = *sim.body();

    for _ in 0..10 {
        sim.tick(0.0, &idle);
    }
    assert_eq!(*sim.body(), before);

    let gravity_before = sim.forces().gravity;
    sim.tick(0.0, &KeySnapshot::pressed([Key::Down]));
    assert_eq!(sim.body().position, before.position);
    assert_eq!(sim.body().velocity, before.velocity);
    assert_relative_eq!(sim.forces().gravity.y, gravity_before.y + 1.0);
}

#[test]
fn next_key_switches_to_drag_group() {
    let config = SimulationConfig {
        drag_coefficient: 0.0,
        ..Default::default()
    };
    let mut sim = Simulation::new(&config).expect("valid config");
    sim.register_group(
        "Gravity",
        vec![
            Setting::new("Up", Key::Up, -1.0, SettingTarget::GravityY),
            Setting::new("Down", Key::Down, 1.0, SettingTarget::GravityY),
            Setting::new("Left", Key::Left, -1.0, SettingTarget::GravityX),
            Setting::new("Right", Key::Right, 1.0, SettingTarget::GravityX),
        ],
    )
    .unwrap();
    sim.register_group(
        "Drag",
        vec![
            Setting::new("Increase", Key::Up, 1.0, SettingTarget::DragCoefficient),
            Setting::new("Decrease", Key::Down, -1.0, SettingTarget::DragCoefficient),
        ],
    )
    .unwrap();

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    sim.on_group_changed(move |event| sink.borrow_mut().push(event.clone()));

    assert_eq!(sim.controller().active_index(), 0);
    let gravity = sim.forces().gravity;

    sim.tick(0.0, &KeySnapshot::pressed([Key::PageDown]));
    assert_eq!(
        *seen.borrow(),
        vec![ChangeEvent::new("Gravity", "Drag", CycleDirection::Next)]
    );

    sim.tick(0.0, &KeySnapshot::pressed([Key::Up]));
    assert_eq!(sim.forces().drag_coefficient, 1.0);
    assert_eq!(sim.forces().gravity, gravity);
}

#[test]
fn stat_board_tracks_active_group() {
    let mut sim = Simulation::with_default_settings(&SimulationConfig::default())
        .expect("default wiring");

    let names: Vec<_> = sim.stats().iter().map(|s| s.name.clone()).collect();
    assert_eq!(
        names,
        vec!["Gravity", "Drag", "Fluid Density", "Restitution", "Mass"]
    );
    assert!(sim.stats().stat("Gravity").unwrap().selected);
    assert_eq!(sim.stats().stat("Gravity").unwrap().text, "Y: 9.81, X: 0.00");

    sim.tick(DT, &KeySnapshot::pressed([Key::PageDown]));
    let selected: Vec<_> = sim.stats().selected().map(|s| s.name.as_str()).collect();
    assert_eq!(selected, vec!["Drag"]);

    sim.tick(DT, &KeySnapshot::pressed([Key::Up]));
    assert_eq!(sim.stats().stat("Drag").unwrap().text, "Cd: 0.57");
    assert_eq!(
        sim.stats().stat("Restitution").unwrap().text,
        "Restitution: -0.50"
    );
}

#[test]
fn programmatic_mutation_requires_known_names() {
    let mut sim = Simulation::with_default_settings(&SimulationConfig::default())
        .expect("default wiring");

    sim.apply_setting("Restitution", "Decrease").unwrap();
    assert_relative_eq!(sim.forces().restitution, -0.6, epsilon = 1e-6);

    let err = sim.apply_setting("Restitution", "Flip").unwrap_err();
    assert!(err.is_lookup());
    let err = sim.apply_setting("Wind", "Increase").unwrap_err();
    assert_eq!(err, GravityLabError::GroupNotFound("Wind".into()));
}

#[test]
fn invalid_configuration_is_rejected_up_front() {
    let config = SimulationConfig {
        mass: -0.1,
        ..Default::default()
    };
    let err = Simulation::new(&config).unwrap_err();
    assert!(err.is_configuration());

    let mut sim = Simulation::with_default_settings(&SimulationConfig::default()).unwrap();
    let err = sim.register_group("Drag", Vec::new()).unwrap_err();
    assert_eq!(err, GravityLabError::DuplicateGroup("Drag".into()));
}

#[test]
fn bouncing_body_stays_inside_play_area() {
    let mut sim = Simulation::with_default_settings(&SimulationConfig::default())
        .expect("default wiring");
    let idle = KeySnapshot::new();
    let floor = sim.bounds().height() as f32 - sim.body().size();

    let mut bounces = 0;
    for _ in 0..2_000 {
        sim.tick(DT, &idle);
        if sim.last_collision().hit(Edge::Bottom) {
            bounces += 1;
        }
        assert!(sim.body().position.y <= floor + 1e-3);
        assert!(sim.body().velocity.y.abs() <= 2.0);
    }
    assert!(bounces > 0, "body never reached the floor");
}

fn floor_approach(velocity_limit: Option<f32>) -> Simulation {
    let config = SimulationConfig {
        gravity: Vec2::ZERO,
        fluid_density: 0.0,
        drag_coefficient: 0.0,
        radius: 50.0,
        start_position: Vec2::new(0.0, 679.0),
        ..Default::default()
    };
    let mut sim = Simulation::new(&config).expect("valid config");
    if let Some(limit) = velocity_limit {
        *sim.integrator_mut() = Integrator::new().with_limits(10.0, limit);
    }
    sim.body_mut().velocity = Vec2::new(0.0, 3.0);
    sim
}

#[test]
fn one_tick_bounces_body_off_the_floor() {
    let mut sim = floor_approach(Some(5.0));
    let height = sim.bounds().height() as f32;
    let restitution = sim.forces().restitution;

    sim.tick(DT, &KeySnapshot::new());

    assert!(sim.last_collision().hit(Edge::Bottom));
    assert_relative_eq!(sim.body().velocity.y, 3.0 * restitution);
    assert_eq!(sim.body().position.y, height - 2.0 * sim.body().radius());
    assert_eq!(sim.body().velocity.x, 0.0);
}

#[test]
fn default_velocity_limit_caps_approach_speed() {
    let mut sim = floor_approach(None);
    let restitution = sim.forces().restitution;

    sim.tick(DT, &KeySnapshot::new());

    assert!(sim.last_collision().hit(Edge::Bottom));
    assert_relative_eq!(
        sim.body().velocity.y,
        config::VELOCITY_LIMIT * restitution
    );
    assert_eq!(sim.body().position.y, 580.0);
}
