use gravity_lab::*;

/// Frames of scripted input: (frame, keys held).
const SCRIPT: &[(u64, &[Key])] = &[
    (120, &[Key::Down]),
    (180, &[Key::PageDown]),
    (200, &[Key::Up]),
    (201, &[]),
    (202, &[Key::Up]),
    (260, &[Key::PageUp]),
];

fn main() -> Result<()> {
    env_logger::init();

    let mut sim = Simulation::with_default_settings(&SimulationConfig::default())?;
    sim.on_group_changed(|event| {
        println!(
            "Switched settings: {} -> {}",
            event.previous_group, event.current_group
        );
    });

    let dt = gravity_lab::config::DEFAULT_TIME_STEP;
    for frame in 0..400u64 {
        let held = SCRIPT
            .iter()
            .find(|(at, _)| *at == frame)
            .map(|(_, keys)| KeySnapshot::pressed(keys.iter().copied()))
            .unwrap_or_default();
        sim.tick(dt, &held);

        if !sim.last_collision().is_empty() {
            println!(
                "frame {frame}: hit {:?} at ({:.1}, {:.1})",
                sim.last_collision().edges,
                sim.body().position.x,
                sim.body().position.y
            );
        }
    }

    for stat in sim.stats().iter() {
        let marker = if stat.selected { '>' } else { ' ' };
        println!("{marker} {}: {}", stat.name, stat.text);
    }
    Ok(())
}
