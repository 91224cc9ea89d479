use gravity_lab::*;

fn drag_settings() -> Vec<Setting> {
    vec![
        Setting::new("Increase", Key::Up, 1.0, SettingTarget::DragCoefficient),
        Setting::new("Decrease", Key::Down, -1.0, SettingTarget::DragCoefficient),
    ]
}

fn make_state() -> (ForceModel, Body) {
    (
        ForceModel::inert(),
        Body::new(Vec2::ZERO, 1.0, 1.0).expect("valid body"),
    )
}

fn press_and_release(
    controller: &mut SettingsController,
    key: Key,
    forces: &mut ForceModel,
    body: &mut Body,
) {
    controller.tick(&KeySnapshot::pressed([key]), forces, body);
    controller.tick(&KeySnapshot::new(), forces, body);
}

#[test]
fn cycling_n_times_returns_to_start() {
    let (mut forces, mut body) = make_state();
    let names = ["Gravity", "Drag", "Fluid Density", "Restitution"];
    let mut controller = SettingsController::new(Key::PageDown, Key::PageUp);
    for name in names {
        controller.register_group(name, Vec::new()).unwrap();
    }

    for key in [Key::PageDown, Key::PageUp] {
        let mut visited = Vec::new();
        for _ in 0..names.len() {
            press_and_release(&mut controller, key, &mut forces, &mut body);
            visited.push(controller.active_index());
        }
        assert_eq!(controller.active_index(), 0);
        visited.sort_unstable();
        assert_eq!(visited, vec![0, 1, 2, 3]);
    }
}

#[test]
fn holding_a_key_triggers_once() {
    let (mut forces, mut body) = make_state();
    let mut controller = SettingsController::new(Key::PageDown, Key::PageUp);
    controller.register_group("Drag", drag_settings()).unwrap();

    let held = KeySnapshot::pressed([Key::Up]);
    for _ in 0..10 {
        controller.tick(&held, &mut forces, &mut body);
    }
    assert_eq!(forces.drag_coefficient, 1.0);

    controller.tick(&KeySnapshot::new(), &mut forces, &mut body);
    controller.tick(&held, &mut forces, &mut body);
    assert_eq!(forces.drag_coefficient, 2.0);
}

#[test]
fn only_the_active_group_receives_input() {
    let (mut forces, mut body) = make_state();
    let mut controller = SettingsController::new(Key::PageDown, Key::PageUp);
    controller
        .register_group(
            "Gravity",
            vec![Setting::new("Down", Key::Down, 1.0, SettingTarget::GravityY)],
        )
        .unwrap();
    controller.register_group("Drag", drag_settings()).unwrap();

    press_and_release(&mut controller, Key::Down, &mut forces, &mut body);
    assert_eq!(forces.gravity.y, 1.0);

    press_and_release(&mut controller, Key::PageDown, &mut forces, &mut body);
    controller.tick(
        &KeySnapshot::pressed([Key::Up, Key::Down]),
        &mut forces,
        &mut body,
    );
    // Both drag settings fire in the same frame and cancel out.
    assert_eq!(forces.drag_coefficient, 0.0);
    assert_eq!(forces.gravity.y, 1.0);
}

#[test]
fn settings_added_after_registration_take_effect() {
    let (mut forces, mut body) = make_state();
    let mut controller = SettingsController::new(Key::PageDown, Key::PageUp);
    controller.register_group("Drag", drag_settings()).unwrap();
    controller
        .add_setting(
            "Drag",
            Setting::new("Thicken", Key::Char('t'), 0.5, SettingTarget::FluidDensity),
        )
        .unwrap();

    let err = controller
        .add_setting(
            "Drag",
            Setting::new("Increase", Key::Char('i'), 1.0, SettingTarget::DragCoefficient),
        )
        .unwrap_err();
    assert!(err.is_configuration());

    press_and_release(&mut controller, Key::Char('t'), &mut forces, &mut body);
    assert_eq!(forces.fluid_density, 0.5);
    assert_eq!(controller.group("Drag").unwrap().len(), 3);
}

#[test]
fn character_bindings_match_either_case() {
    let (mut forces, mut body) = make_state();
    let mut controller = SettingsController::new(Key::PageDown, Key::PageUp);
    controller
        .register_group(
            "Fluid",
            vec![Setting::new("Thicken", Key::Char('T'), 0.5, SettingTarget::FluidDensity)],
        )
        .unwrap();
    assert_eq!(
        controller.group("Fluid").unwrap().setting("Thicken").unwrap().key(),
        Key::Char('t')
    );

    press_and_release(&mut controller, Key::Char('t'), &mut forces, &mut body);
    press_and_release(&mut controller, Key::Char('T'), &mut forces, &mut body);
    assert_eq!(forces.fluid_density, 1.0);
}

#[test]
fn next_and_previous_in_one_frame_cancel() {
    let (mut forces, mut body) = make_state();
    let mut controller = SettingsController::new(Key::PageDown, Key::PageUp);
    for name in ["A", "B", "C"] {
        controller.register_group(name, Vec::new()).unwrap();
    }

    let events = controller.tick(
        &KeySnapshot::pressed([Key::PageDown, Key::PageUp]),
        &mut forces,
        &mut body,
    );
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].direction, CycleDirection::Next);
    assert_eq!(events[1].current_group, "A");
    assert_eq!(controller.active_index(), 0);
}
