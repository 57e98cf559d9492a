//! Bunny-hop movement - headless driver
//!
//! Runs a scripted strafe-jump session on the test course and logs how the
//! player's speed develops.
//!
//! Usage: `bhop [movement-config.json]`

use std::path::Path;

use anyhow::Context;
use bhop_game::input::PlayerInput;
use bhop_game::{Level, Simulation, SimulationConfig};
use bhop_physics::MovementConfig;

/// Simulated seconds to run.
const RUN_SECONDS: u32 = 12;

/// Ticks spent running forward before the first jump.
const RUN_UP_TICKS: u32 = 50;

/// Yaw change per tick while strafing (radians).
const TURN_RATE: f32 = 0.04;

/// Ticks between strafe direction switches.
const STRAFE_SWITCH_TICKS: u32 = 40;

fn load_config(path: &Path) -> anyhow::Result<MovementConfig> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config = MovementConfig::from_json(&json)
        .with_context(|| format!("invalid movement config {}", path.display()))?;
    Ok(config)
}

/// Hold forward to build ground speed, then strafe-hop, alternating sides
/// and turning into the strafe.
fn scripted_input(tick: u32) -> PlayerInput {
    let mut input = PlayerInput::default();

    if tick < RUN_UP_TICKS {
        input.movement.forward = true;
        return input;
    }

    let strafe_right = ((tick - RUN_UP_TICKS) / STRAFE_SWITCH_TICKS) % 2 == 0;
    input.movement.right = strafe_right;
    input.movement.left = !strafe_right;
    input.yaw_delta = if strafe_right { TURN_RATE } else { -TURN_RATE };

    // Scroll every tick so the jump lands on the first grounded frame
    input.actions.scroll_delta = 1.0;
    input
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let movement = match std::env::args().nth(1) {
        Some(path) => load_config(Path::new(&path))?,
        None => MovementConfig::default(),
    };
    log::info!(
        "movement: move_speed={} max_air_speed={} air_accel={} friction_presets={:?}",
        movement.move_speed,
        movement.max_air_speed,
        movement.air_accel,
        movement.friction_presets
    );

    let config = SimulationConfig {
        movement,
        ..Default::default()
    };
    let tick_rate = config.tick_rate;
    let mut simulation = Simulation::new(config, Level::test_course());
    let player_id = simulation.add_player("Player1");

    let mut top_speed: f32 = 0.0;
    for tick in 0..RUN_SECONDS * tick_rate {
        simulation.tick(&[scripted_input(tick)]);

        let Some(player) = simulation.get_player(player_id) else {
            anyhow::bail!("player {player_id} disappeared");
        };
        top_speed = top_speed.max(player.horizontal_speed());

        if (tick + 1) % tick_rate == 0 {
            let position = player.position();
            log::info!(
                "t={:>2}s speed={:6.2} pos=({:7.2}, {:5.2}, {:7.2}) grounded={} friction={}",
                (tick + 1) / tick_rate,
                player.horizontal_speed(),
                position.x,
                position.y,
                position.z,
                player.on_ground(),
                player.movement.friction_coefficient
            );
        }
    }

    let respawns = simulation
        .get_player(player_id)
        .map(|p| p.respawns)
        .unwrap_or_default();
    log::info!("top speed {:.2} m/s, {} respawns", top_speed, respawns);

    Ok(())
}
